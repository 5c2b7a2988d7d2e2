//! Backend commands queued from UI to backend worker.

use std::time::Duration;

use shared::{domain::StudentId, protocol::StudentPayload};

use crate::controller::state::SaveTarget;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    Api(ApiCommand),
    ScheduleMessageClear { token: u64, after: Duration },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    ListStudents,
    SaveStudent {
        target: SaveTarget,
        payload: StudentPayload,
    },
    DeleteStudent {
        id: StudentId,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Api(ApiCommand::ListStudents) => "list_students",
            BackendCommand::Api(ApiCommand::SaveStudent {
                target: SaveTarget::Create,
                ..
            }) => "create_student",
            BackendCommand::Api(ApiCommand::SaveStudent {
                target: SaveTarget::Update(_),
                ..
            }) => "update_student",
            BackendCommand::Api(ApiCommand::DeleteStudent { .. }) => "delete_student",
            BackendCommand::ScheduleMessageClear { .. } => "schedule_message_clear",
        }
    }
}
