//! Command orchestration helpers from reducer output to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    banner: &mut Option<String>,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *banner = Some("UI command queue is full; please retry".to_string());
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
        }
        Err(TrySendError::Disconnected(_)) => {
            *banner = Some(
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string(),
            );
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
        }
    }
}
