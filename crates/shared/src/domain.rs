use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned student identifier.
///
/// The client never interprets it: it is decoded from whatever JSON scalar the server uses,
/// rendered in the table and spliced into record URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentId {
    Int(i64),
    Text(String),
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentId::Int(id) => write!(f, "{id}"),
            StudentId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        StudentId::Int(id)
    }
}

impl From<&str> for StudentId {
    fn from(id: &str) -> Self {
        StudentId::Text(id.to_string())
    }
}

impl From<String> for StudentId {
    fn from(id: String) -> Self {
        StudentId::Text(id)
    }
}
