//! Bridge between the UI thread and the tokio worker that talks to the student API.

pub mod commands;
pub mod runtime;
