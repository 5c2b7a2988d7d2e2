//! egui panels: header, banner, status message, form, student table, delete prompt.
//!
//! Panels only read the view state; every interaction comes back as an [`Action`].

use eframe::egui;

use crate::{
    controller::{
        events::Action,
        state::{FormField, MessageKind, ViewState},
    },
    ui::view_model::{
        FormView, TableBody, APP_SUBTITLE, APP_TITLE, DELETE_CONFIRM_TEXT, EMPTY_TABLE_TEXT,
        TABLE_COLUMNS,
    },
};

const FORM_ROWS: [&[FormField]; 3] = [
    &[FormField::FirstName, FormField::LastName],
    &[FormField::Email, FormField::Age],
    &[FormField::Course],
];

const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(198, 40, 40);
const HINT_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 140, 30);

pub fn render(ctx: &egui::Context, state: &ViewState) -> Vec<Action> {
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(APP_TITLE);
                ui.label(APP_SUBTITLE);
                ui.separator();

                show_banner(ui, state, &mut actions);
                show_message(ui, state);
                ui.add_space(8.0);
                show_form(ui, state, &mut actions);
                ui.add_space(16.0);
                show_table(ui, state, &mut actions);
            });
    });

    show_delete_confirmation(ctx, state, &mut actions);
    actions
}

fn show_banner(ui: &mut egui::Ui, state: &ViewState, actions: &mut Vec<Action>) {
    let Some(banner) = &state.banner else {
        return;
    };
    ui.horizontal_wrapped(|ui| {
        ui.colored_label(ERROR_COLOR, banner.as_str());
        if ui.button("Dismiss").clicked() {
            actions.push(Action::DismissBanner);
        }
    });
}

fn show_message(ui: &mut egui::Ui, state: &ViewState) {
    if let Some(message) = &state.message {
        let color = match message.kind {
            MessageKind::Success => SUCCESS_COLOR,
            MessageKind::Error => ERROR_COLOR,
        };
        ui.colored_label(color, egui::RichText::new(message.text.as_str()).strong());
    }
}

fn show_form(ui: &mut egui::Ui, state: &ViewState, actions: &mut Vec<Action>) {
    let view = FormView::from_state(state);
    ui.heading(view.heading);
    ui.add_space(4.0);

    let mut submitted = false;
    for row in FORM_ROWS {
        ui.horizontal(|ui| {
            for field in row {
                let response = field_input(ui, state, *field, actions);
                if response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter))
                {
                    submitted = true;
                }
            }
        });
    }

    if let Some(hint) = &state.form_hint {
        ui.colored_label(HINT_COLOR, hint.to_string());
    }

    ui.horizontal(|ui| {
        if ui.button(view.submit_label).clicked() {
            submitted = true;
        }
        if view.show_cancel && ui.button("Cancel").clicked() {
            actions.push(Action::Cancel);
        }
    });

    // Field edits from this frame are queued first so the submit sees them.
    if submitted {
        actions.push(Action::Submit);
    }
}

fn field_input(
    ui: &mut egui::Ui,
    state: &ViewState,
    field: FormField,
    actions: &mut Vec<Action>,
) -> egui::Response {
    let mut value = state.form.value(field).to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut value)
            .id_salt(field.name())
            .hint_text(field.placeholder())
            .desired_width(240.0),
    );
    if response.changed() {
        actions.push(Action::FieldChanged { field, value });
    }
    response
}

fn show_table(ui: &mut egui::Ui, state: &ViewState, actions: &mut Vec<Action>) {
    let body = TableBody::from_students(&state.students);

    egui::Grid::new("students_table")
        .striped(true)
        .num_columns(TABLE_COLUMNS.len())
        .spacing([18.0, 6.0])
        .show(ui, |ui| {
            for column in TABLE_COLUMNS {
                ui.strong(column);
            }
            ui.end_row();

            match &body {
                TableBody::Empty => {
                    ui.label(EMPTY_TABLE_TEXT);
                    ui.end_row();
                }
                TableBody::Rows(rows) => {
                    for row in rows {
                        for cell in &row.cells {
                            ui.label(cell.as_str());
                        }
                        ui.horizontal(|ui| {
                            for action in row.actions {
                                if ui.button(action.label()).clicked() {
                                    actions.push(row.action(action));
                                }
                            }
                        });
                        ui.end_row();
                    }
                }
            }
        });
}

fn show_delete_confirmation(ctx: &egui::Context, state: &ViewState, actions: &mut Vec<Action>) {
    if state.pending_delete.is_none() {
        return;
    }

    egui::Window::new("Confirm delete")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(DELETE_CONFIRM_TEXT);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    actions.push(Action::ConfirmDelete);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(Action::DismissDelete);
                }
            });
        });
}
