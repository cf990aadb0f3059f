use serde::{Deserialize, Serialize};

/// A contact stored in the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Database-generated primary key.
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Contact {
    /// Create a contact from an id and the fields of a payload.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
