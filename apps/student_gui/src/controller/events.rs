//! User actions and backend events consumed by the reducer.

use shared::{domain::StudentId, protocol::Student};

use crate::controller::state::{FormField, SaveTarget};

/// Intents raised by the rendered UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Mounted,
    FieldChanged { field: FormField, value: String },
    Submit,
    Edit(Student),
    RequestDelete(StudentId),
    ConfirmDelete,
    DismissDelete,
    Cancel,
    DismissBanner,
}

/// Outcomes reported by the backend worker.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    StudentsLoaded(Vec<Student>),
    SaveSucceeded(SaveTarget),
    SaveFailed(SaveTarget),
    /// Sent whenever the server answered a delete, whatever the status.
    Deleted(StudentId),
    MessageExpired { token: u64 },
    BackendFailed(String),
}
