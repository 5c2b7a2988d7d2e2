//! View state owned by the UI thread: student list, form buffer, status message.

use std::time::Duration;

use shared::{
    domain::StudentId,
    protocol::{Student, StudentPayload},
};
use thiserror::Error;

/// How long a status message stays visible after it was last shown.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Age,
    Course,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Age,
        FormField::Course,
    ];

    /// Wire name of the field, also used as a stable widget id.
    pub fn name(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Age => "age",
            FormField::Course => "course",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::Age => "Age",
            FormField::Course => "Course",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::FirstName | FormField::LastName | FormField::Email
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.placeholder())]
    Required(FormField),
    #[error("Enter a valid email address")]
    InvalidEmail,
    #[error("Age must be a whole number")]
    InvalidAge,
}

/// Text buffer behind the create/update form. `id` is only set while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub id: Option<StudentId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub course: String,
}

impl FormState {
    pub fn from_student(student: &Student) -> Self {
        Self {
            id: Some(student.id.clone()),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            age: student.age.map(|age| age.to_string()).unwrap_or_default(),
            course: student.course.clone().unwrap_or_default(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Age => &self.age,
            FormField::Course => &self.course,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Age => &mut self.age,
            FormField::Course => &mut self.course,
        };
        *slot = value;
    }

    /// Applies the checks a native HTML form would run before submitting.
    pub fn to_payload(&self) -> Result<StudentPayload, FormError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.value(*field).is_empty())
        {
            return Err(FormError::Required(field));
        }

        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(FormError::InvalidEmail);
        }

        let age = match self.age.trim() {
            "" => None,
            raw => Some(raw.parse::<i32>().map_err(|_| FormError::InvalidAge)?),
        };

        Ok(StudentPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: email.to_string(),
            age,
            course: self.course.clone(),
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

/// Which request a submission turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(StudentId),
}

impl SaveTarget {
    pub fn success_text(&self) -> &'static str {
        match self {
            SaveTarget::Create => "Student added successfully!",
            SaveTarget::Update(_) => "Student updated successfully!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    /// Matches the `MessageExpired` event allowed to clear this message.
    pub token: u64,
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub students: Vec<Student>,
    pub form: FormState,
    pub message: Option<StatusMessage>,
    pub pending_delete: Option<StudentId>,
    pub form_hint: Option<FormError>,
    pub banner: Option<String>,
    message_token: u64,
}

impl ViewState {
    pub fn edit_mode(&self) -> bool {
        self.form.id.is_some()
    }

    pub fn save_target(&self) -> SaveTarget {
        match &self.form.id {
            Some(id) => SaveTarget::Update(id.clone()),
            None => SaveTarget::Create,
        }
    }

    pub(crate) fn next_message_token(&mut self) -> u64 {
        self.message_token = self.message_token.wrapping_add(1);
        self.message_token
    }
}
