//! Plain-data projections of the view state that the panels render.

use shared::protocol::Student;

use crate::controller::{events::Action, state::ViewState};

pub const APP_TITLE: &str = "🎓 Student Management System";
pub const APP_SUBTITLE: &str = "Manage your student records efficiently";
pub const EMPTY_TABLE_TEXT: &str = "No students found";
pub const DELETE_CONFIRM_TEXT: &str = "Are you sure?";
pub const TABLE_COLUMNS: [&str; 7] = ["ID", "First", "Last", "Email", "Age", "Course", "Actions"];

const MISSING_VALUE: &str = "-";

/// Per-row buttons, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub student: Student,
    /// ID, first, last, email, age, course.
    pub cells: [String; 6],
    pub actions: [RowAction; 2],
}

impl StudentRow {
    pub fn from_student(student: &Student) -> Self {
        let age = student
            .age
            .map(|age| age.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string());
        let course = match student.course.as_deref() {
            Some(course) if !course.is_empty() => course.to_string(),
            _ => MISSING_VALUE.to_string(),
        };
        Self {
            student: student.clone(),
            cells: [
                student.id.to_string(),
                student.first_name.clone(),
                student.last_name.clone(),
                student.email.clone(),
                age,
                course,
            ],
            actions: [RowAction::Edit, RowAction::Delete],
        }
    }

    /// Edit loads the whole record into the form; Delete only asks for confirmation.
    pub fn action(&self, action: RowAction) -> Action {
        match action {
            RowAction::Edit => Action::Edit(self.student.clone()),
            RowAction::Delete => Action::RequestDelete(self.student.id.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Empty,
    Rows(Vec<StudentRow>),
}

impl TableBody {
    pub fn from_students(students: &[Student]) -> Self {
        if students.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(students.iter().map(StudentRow::from_student).collect())
        }
    }

    /// Rendered row count; the empty placeholder counts as one row.
    #[cfg(test)]
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Empty => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub show_cancel: bool,
}

impl FormView {
    pub fn from_state(state: &ViewState) -> Self {
        if state.edit_mode() {
            Self {
                heading: "Update Student",
                submit_label: "Update Student",
                show_cancel: true,
            }
        } else {
            Self {
                heading: "Add New Student",
                submit_label: "Add Student",
                show_cancel: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::state::FormState;
    use shared::domain::StudentId;

    fn ada() -> Student {
        Student {
            id: StudentId::from(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "a@x.com".to_string(),
            age: Some(30),
            course: Some("Math".to_string()),
        }
    }

    #[test]
    fn empty_list_renders_single_placeholder_row() {
        let body = TableBody::from_students(&[]);
        assert_eq!(body, TableBody::Empty);
        assert_eq!(body.row_count(), 1);
    }

    #[test]
    fn one_student_renders_one_row_with_all_values() {
        let body = TableBody::from_students(&[ada()]);
        assert_eq!(body.row_count(), 1);
        let TableBody::Rows(rows) = body else {
            panic!("expected rows");
        };
        assert_eq!(
            rows[0].cells,
            ["1", "Ada", "Lovelace", "a@x.com", "30", "Math"].map(String::from)
        );
        assert_eq!(rows[0].actions, [RowAction::Edit, RowAction::Delete]);
        assert_eq!(rows[0].actions.map(RowAction::label), ["Edit", "Delete"]);
    }

    #[test]
    fn row_actions_carry_the_full_student_and_its_id() {
        let row = StudentRow::from_student(&ada());
        assert_eq!(row.action(RowAction::Edit), Action::Edit(ada()));
        assert_eq!(
            row.action(RowAction::Delete),
            Action::RequestDelete(StudentId::from(1))
        );
    }

    #[test]
    fn text_ids_render_verbatim() {
        let student = Student {
            id: StudentId::from("65a1f0c2e4b0"),
            ..ada()
        };
        let row = StudentRow::from_student(&student);
        assert_eq!(row.cells[0], "65a1f0c2e4b0");
        assert_eq!(
            row.action(RowAction::Delete),
            Action::RequestDelete(StudentId::from("65a1f0c2e4b0"))
        );
    }

    #[test]
    fn row_count_matches_list_length() {
        let students: Vec<Student> = (1..=3_i64)
            .map(|id| Student {
                id: StudentId::from(id),
                ..ada()
            })
            .collect();
        assert_eq!(TableBody::from_students(&students).row_count(), 3);
    }

    #[test]
    fn missing_age_and_blank_course_render_as_dash() {
        let mut student = ada();
        student.age = None;
        student.course = Some(String::new());
        let row = StudentRow::from_student(&student);
        assert_eq!(row.cells[4], "-");
        assert_eq!(row.cells[5], "-");
    }

    #[test]
    fn form_labels_follow_edit_mode() {
        let mut state = ViewState::default();
        assert_eq!(FormView::from_state(&state).submit_label, "Add Student");
        assert!(!FormView::from_state(&state).show_cancel);

        state.form = FormState::from_student(&ada());
        let view = FormView::from_state(&state);
        assert_eq!(view.heading, "Update Student");
        assert!(view.show_cancel);
    }
}
