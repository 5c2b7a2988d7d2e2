use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::{Action, UiEvent},
        orchestration::dispatch_backend_command,
        reducer::{apply_event, reduce},
        state::ViewState,
    },
    ui::panels,
};

pub struct StudentGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ViewState,
}

impl StudentGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: ViewState::default(),
        };
        app.handle_action(Action::Mounted);
        app
    }

    fn handle_action(&mut self, action: Action) {
        let commands = reduce(&mut self.state, action);
        self.dispatch(commands);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            let commands = apply_event(&mut self.state, event);
            self.dispatch(commands);
        }
    }

    fn dispatch(&mut self, commands: Vec<BackendCommand>) {
        for cmd in commands {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.banner);
        }
    }
}

impl eframe::App for StudentGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        for action in panels::render(ctx, &self.state) {
            self.handle_action(action);
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend_bridge::commands::ApiCommand;
    use crossbeam_channel::bounded;
    use shared::{domain::StudentId, protocol::Student};

    fn drain(rx: &Receiver<BackendCommand>) -> Vec<BackendCommand> {
        rx.try_iter().collect()
    }

    #[test]
    fn startup_loads_students_once() {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (_ui_tx, ui_rx) = bounded(16);
        let _app = StudentGuiApp::new(cmd_tx, ui_rx);

        assert_eq!(
            drain(&cmd_rx),
            vec![BackendCommand::Api(ApiCommand::ListStudents)]
        );
    }

    #[test]
    fn backend_events_flow_through_reducer_and_queue_follow_ups() {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let mut app = StudentGuiApp::new(cmd_tx, ui_rx);
        drain(&cmd_rx);

        let student = Student {
            id: StudentId::from(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "a@x.com".to_string(),
            age: Some(30),
            course: Some("Math".to_string()),
        };
        ui_tx
            .send(UiEvent::StudentsLoaded(vec![student.clone()]))
            .expect("send loaded");
        ui_tx
            .send(UiEvent::Deleted(StudentId::from(1)))
            .expect("send deleted");
        app.process_ui_events();

        assert_eq!(app.state.students, vec![student]);
        let queued = drain(&cmd_rx);
        assert_eq!(queued.len(), 2);
        assert!(matches!(
            queued[0],
            BackendCommand::ScheduleMessageClear { .. }
        ));
        assert_eq!(queued[1], BackendCommand::Api(ApiCommand::ListStudents));
    }

    #[test]
    fn delete_without_confirmation_queues_nothing() {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (_ui_tx, ui_rx) = bounded(16);
        let mut app = StudentGuiApp::new(cmd_tx, ui_rx);
        drain(&cmd_rx);

        app.handle_action(Action::RequestDelete(StudentId::from(1)));
        app.handle_action(Action::DismissDelete);

        assert!(drain(&cmd_rx).is_empty());
    }
}
