use serde::{Deserialize, Serialize};

use crate::domain::StudentId;

/// A student record as returned by `GET /api/students`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub course: Option<String>,
}

/// Body of `POST /api/students` and `PUT /api/students/{id}`.
///
/// `age` is always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: Option<i32>,
    pub course: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_server_student_with_camel_case_fields() {
        let student: Student = serde_json::from_value(json!({
            "id": 1,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "a@x.com",
            "age": 30,
            "course": "Math"
        }))
        .expect("decode student");

        assert_eq!(student.id, StudentId::from(1));
        assert_eq!(student.first_name, "Ada");
        assert_eq!(student.last_name, "Lovelace");
        assert_eq!(student.age, Some(30));
        assert_eq!(student.course.as_deref(), Some("Math"));
    }

    #[test]
    fn decodes_numeric_and_text_ids() {
        let students: Vec<Student> = serde_json::from_value(json!([
            {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "a@x.com"},
            {"id": "65a1f0c2e4b0", "firstName": "Grace", "lastName": "Hopper", "email": "g@x.com"}
        ]))
        .expect("decode students");

        assert_eq!(students[0].id, StudentId::Int(1));
        assert_eq!(students[1].id, StudentId::Text("65a1f0c2e4b0".to_string()));
        assert_eq!(students[0].id.to_string(), "1");
        assert_eq!(students[1].id.to_string(), "65a1f0c2e4b0");
    }

    #[test]
    fn tolerates_null_and_missing_optional_fields() {
        let student: Student = serde_json::from_value(json!({
            "id": 4,
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "g@x.com",
            "age": null
        }))
        .expect("decode student");

        assert_eq!(student.age, None);
        assert_eq!(student.course, None);
    }

    #[test]
    fn payload_serializes_blank_age_as_null_and_omits_id() {
        let payload = StudentPayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "a@x.com".to_string(),
            age: None,
            course: String::new(),
        };

        let value = serde_json::to_value(&payload).expect("encode payload");
        assert_eq!(
            value,
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "a@x.com",
                "age": null,
                "course": ""
            })
        );
        assert!(value.get("id").is_none());
    }
}
