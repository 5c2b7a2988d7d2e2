//! State transitions for user actions and backend events.
//!
//! Both entry points mutate the view state in place and return the backend commands the
//! transition requires. Nothing here performs I/O.

use crate::{
    backend_bridge::commands::{ApiCommand, BackendCommand},
    controller::{
        events::{Action, UiEvent},
        state::{FormState, MessageKind, StatusMessage, ViewState, STATUS_MESSAGE_TTL},
    },
};

pub const OPERATION_FAILED_TEXT: &str = "Operation failed";
pub const DELETED_TEXT: &str = "Student deleted successfully!";

pub fn reduce(state: &mut ViewState, action: Action) -> Vec<BackendCommand> {
    match action {
        Action::Mounted => vec![BackendCommand::Api(ApiCommand::ListStudents)],
        Action::FieldChanged { field, value } => {
            state.form.set(field, value);
            state.form_hint = None;
            Vec::new()
        }
        Action::Submit => match state.form.to_payload() {
            Ok(payload) => {
                state.form_hint = None;
                vec![BackendCommand::Api(ApiCommand::SaveStudent {
                    target: state.save_target(),
                    payload,
                })]
            }
            Err(err) => {
                tracing::debug!("form submission blocked: {err}");
                state.form_hint = Some(err);
                Vec::new()
            }
        },
        Action::Edit(student) => {
            state.form = FormState::from_student(&student);
            state.form_hint = None;
            Vec::new()
        }
        Action::RequestDelete(id) => {
            state.pending_delete = Some(id);
            Vec::new()
        }
        Action::ConfirmDelete => match state.pending_delete.take() {
            Some(id) => vec![BackendCommand::Api(ApiCommand::DeleteStudent { id })],
            None => Vec::new(),
        },
        Action::DismissDelete => {
            state.pending_delete = None;
            Vec::new()
        }
        Action::Cancel => {
            reset_form(state);
            Vec::new()
        }
        Action::DismissBanner => {
            state.banner = None;
            Vec::new()
        }
    }
}

pub fn apply_event(state: &mut ViewState, event: UiEvent) -> Vec<BackendCommand> {
    match event {
        UiEvent::StudentsLoaded(students) => {
            state.students = students;
            Vec::new()
        }
        UiEvent::SaveSucceeded(target) => {
            let clear = show_message(state, target.success_text(), MessageKind::Success);
            reset_form(state);
            vec![clear, BackendCommand::Api(ApiCommand::ListStudents)]
        }
        UiEvent::SaveFailed(target) => {
            tracing::debug!(?target, "student save rejected by server");
            vec![show_message(
                state,
                OPERATION_FAILED_TEXT,
                MessageKind::Error,
            )]
        }
        UiEvent::Deleted(id) => {
            tracing::debug!(student_id = %id, "student delete acknowledged");
            let clear = show_message(state, DELETED_TEXT, MessageKind::Success);
            vec![clear, BackendCommand::Api(ApiCommand::ListStudents)]
        }
        UiEvent::MessageExpired { token } => {
            if state
                .message
                .as_ref()
                .is_some_and(|message| message.token == token)
            {
                state.message = None;
            }
            Vec::new()
        }
        UiEvent::BackendFailed(reason) => {
            state.banner = Some(reason);
            Vec::new()
        }
    }
}

fn reset_form(state: &mut ViewState) {
    state.form = FormState::default();
    state.form_hint = None;
}

fn show_message(state: &mut ViewState, text: &str, kind: MessageKind) -> BackendCommand {
    let token = state.next_message_token();
    state.message = Some(StatusMessage {
        text: text.to_string(),
        kind,
        token,
    });
    BackendCommand::ScheduleMessageClear {
        token,
        after: STATUS_MESSAGE_TTL,
    }
}
