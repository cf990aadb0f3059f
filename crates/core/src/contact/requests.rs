//! API request and response payloads.
//!
//! These types are shared between the server and client for type-safe API communication.

use serde::{Deserialize, Serialize};

use super::types::Contact;

/// Request body for creating or updating a contact.
///
/// Unknown fields are ignored, so an `id` sent by the caller never reaches
/// the database. The id always comes from the path or from the insert.
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl ContactPayload {
    /// Create a new payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Attach an id, producing the stored representation.
    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Response body for create, update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub message: String,
}

impl ContactMessage {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}
