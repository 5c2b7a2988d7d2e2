//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread, time::Duration};

use client_core::StudentApi;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use tokio::task::JoinHandle;

use crate::{
    backend_bridge::commands::{ApiCommand, BackendCommand},
    controller::{events::UiEvent, state::SaveTarget},
};

pub fn launch(api: Arc<dyn StudentApi>, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                emit(
                    &ui_tx,
                    UiEvent::BackendFailed(format!(
                        "backend worker startup failure: failed to build runtime: {err}"
                    )),
                );
                return;
            }
        };

        runtime.block_on(async move {
            let mut message_clear = MessageClearScheduler::default();
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::ScheduleMessageClear { token, after } => {
                        message_clear.schedule(token, after, ui_tx.clone());
                    }
                    BackendCommand::Api(cmd) => {
                        tokio::spawn(execute_api_command(Arc::clone(&api), cmd, ui_tx.clone()));
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}

/// Runs one API call and reports its outcome to the UI.
///
/// Transport failures are logged and produce no event. A delete that reaches the server is
/// reported as done even when the status is non-2xx.
pub async fn execute_api_command(
    api: Arc<dyn StudentApi>,
    cmd: ApiCommand,
    ui_tx: Sender<UiEvent>,
) {
    match cmd {
        ApiCommand::ListStudents => match api.list_students().await {
            Ok(students) => emit(&ui_tx, UiEvent::StudentsLoaded(students)),
            Err(err) => tracing::error!("failed to load students: {err}"),
        },
        ApiCommand::SaveStudent { target, payload } => {
            let result = match &target {
                SaveTarget::Create => api.create_student(&payload).await,
                SaveTarget::Update(id) => api.update_student(id, &payload).await,
            };
            match result {
                Ok(()) => emit(&ui_tx, UiEvent::SaveSucceeded(target)),
                Err(err) if err.is_status() => emit(&ui_tx, UiEvent::SaveFailed(target)),
                Err(err) => tracing::error!("failed to save student: {err}"),
            }
        }
        ApiCommand::DeleteStudent { id } => match api.delete_student(&id).await {
            Ok(()) => emit(&ui_tx, UiEvent::Deleted(id)),
            Err(err) if err.is_status() => {
                tracing::warn!(student_id = %id, "delete not confirmed by server: {err}");
                emit(&ui_tx, UiEvent::Deleted(id));
            }
            Err(err) => tracing::error!(student_id = %id, "failed to delete student: {err}"),
        },
    }
}

/// Owns the single pending status-message clear; scheduling a new one aborts the old.
#[derive(Default)]
pub struct MessageClearScheduler {
    pending: Option<JoinHandle<()>>,
}

impl MessageClearScheduler {
    pub fn schedule(&mut self, token: u64, after: Duration, ui_tx: Sender<UiEvent>) {
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            emit(&ui_tx, UiEvent::MessageExpired { token });
        }));
    }
}

fn emit(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            tracing::warn!("backend->ui event queue is full; event dropped")
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("backend->ui event queue closed; event dropped")
        }
    }
}
