//! Contact API operations.

use super::ContactbookClient;
use crate::error::Result;
use contactbook_core::contact::{Contact, ContactMessage, ContactPayload};

impl ContactbookClient {
    /// List all contacts.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let response = self.client.get(self.url("/api/contacts")).send().await?;
        self.handle_response(response, "Contacts").await
    }

    /// Create a new contact.
    pub async fn create_contact(&self, payload: &ContactPayload) -> Result<ContactMessage> {
        let response = self
            .client
            .post(self.url("/api/contacts"))
            .json(payload)
            .send()
            .await?;
        self.handle_response(response, "Contacts").await
    }

    /// Get contact by ID.
    pub async fn get_contact(&self, id: i64) -> Result<Contact> {
        let response = self
            .client
            .get(self.url(&format!("/api/contacts/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("Contact {}", id))
            .await
    }

    /// Update contact by ID.
    pub async fn update_contact(&self, id: i64, payload: &ContactPayload) -> Result<ContactMessage> {
        let response = self
            .client
            .put(self.url(&format!("/api/contacts/{}", id)))
            .json(payload)
            .send()
            .await?;
        self.handle_response(response, &format!("Contact {}", id))
            .await
    }

    /// Delete contact by ID.
    pub async fn delete_contact(&self, id: i64) -> Result<ContactMessage> {
        let response = self
            .client
            .delete(self.url(&format!("/api/contacts/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("Contact {}", id))
            .await
    }
}
