use async_trait::async_trait;

use crate::contact::{Contact, ContactPayload};

use super::Result;

/// Repository for contact operations.
///
/// Each method runs a single statement. Absence is reported through
/// `Option` or a zero row count, never through an error.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts a contact and returns its generated id.
    async fn create_contact(&self, payload: &ContactPayload) -> Result<i64>;

    /// Gets a contact by its id.
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>>;

    /// Lists every contact, ordered by id.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// Updates name and email of a contact. Returns the number of rows changed.
    async fn update_contact(&self, id: i64, payload: &ContactPayload) -> Result<u64>;

    /// Deletes a contact. Returns the number of rows removed.
    async fn delete_contact(&self, id: i64) -> Result<u64>;

    /// Checks that the backend can answer a trivial query.
    async fn ping(&self) -> Result<()>;
}
