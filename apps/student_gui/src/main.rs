use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::StudentClient;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::StudentGuiApp,
};

#[derive(Parser, Debug)]
#[command(about = "Desktop client for the student records API")]
struct Args {
    /// Student collection endpoint, e.g. http://localhost:8082/api/students
    #[arg(long)]
    api_url: Option<String>,
    /// Settings file to read instead of the default locations.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(api_url) = args.api_url {
        settings.api_base_url = api_url;
    }

    let client = StudentClient::new(&settings.api_base_url).with_context(|| {
        format!(
            "failed to configure student api client for '{}'",
            settings.api_base_url
        )
    })?;
    tracing::info!(api_base_url = client.base_url(), "starting student gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(Arc::new(client), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Student Management System")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Student Management System",
        options,
        Box::new(|_cc| Ok(Box::new(StudentGuiApp::new(cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("student gui exited with an error: {err}"))
}
