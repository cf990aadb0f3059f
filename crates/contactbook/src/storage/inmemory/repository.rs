//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use contactbook_core::contact::{Contact, ContactPayload};
use contactbook_core::storage::{ContactRepository, Result};

/// In-memory storage backend.
///
/// Ids come from a sequence starting at 1, like a SERIAL column, and are
/// never reused after a delete.
#[derive(Debug, Clone)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<BTreeMap<i64, Contact>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContactRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create_contact(&self, payload: &ContactPayload) -> Result<i64> {
        let mut contacts = self.contacts.write().await;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        contacts.insert(id, payload.clone().into_contact(id));
        Ok(id)
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(&id).cloned())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.values().cloned().collect())
    }

    async fn update_contact(&self, id: i64, payload: &ContactPayload) -> Result<u64> {
        let mut contacts = self.contacts.write().await;
        match contacts.get_mut(&id) {
            Some(contact) => {
                contact.name = payload.name.clone();
                contact.email = payload.email.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_contact(&self, id: i64) -> Result<u64> {
        let mut contacts = self.contacts.write().await;
        Ok(u64::from(contacts.remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_increasing_ids() {
        let repo = InMemoryContactRepository::new();

        let first = repo
            .create_contact(&ContactPayload::new("Ada", "ada@x.io"))
            .await
            .unwrap();
        let second = repo
            .create_contact(&ContactPayload::new("Alan", "alan@x.io"))
            .await
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_get_missing_contact_is_none() {
        let repo = InMemoryContactRepository::new();

        assert!(repo.get_contact(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_contact_changes_nothing() {
        let repo = InMemoryContactRepository::new();
        repo.create_contact(&ContactPayload::new("Ada", "ada@x.io"))
            .await
            .unwrap();

        let rows = repo
            .update_contact(42, &ContactPayload::new("Ghost", "ghost@x.io"))
            .await
            .unwrap();

        assert_eq!(rows, 0);
        assert_eq!(
            repo.list_contacts().await.unwrap(),
            vec![Contact::new(1, "Ada", "ada@x.io")]
        );
    }

    #[tokio::test]
    async fn test_delete_twice_reports_zero_the_second_time() {
        let repo = InMemoryContactRepository::new();
        let id = repo
            .create_contact(&ContactPayload::new("Ada", "ada@x.io"))
            .await
            .unwrap();

        assert_eq!(repo.delete_contact(id).await.unwrap(), 1);
        assert_eq!(repo.delete_contact(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryContactRepository::new();
        let id = repo
            .create_contact(&ContactPayload::new("Ada", "ada@x.io"))
            .await
            .unwrap();
        repo.delete_contact(id).await.unwrap();

        let next = repo
            .create_contact(&ContactPayload::new("Ada", "ada@x.io"))
            .await
            .unwrap();

        assert_eq!(next, id + 1);
    }

    #[tokio::test]
    async fn test_list_returns_contacts_in_id_order() {
        let repo = InMemoryContactRepository::new();
        for (name, email) in [("Ada", "ada@x.io"), ("Alan", "alan@x.io"), ("Grace", "grace@x.io")] {
            repo.create_contact(&ContactPayload::new(name, email))
                .await
                .unwrap();
        }

        let contacts = repo.list_contacts().await.unwrap();

        let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Alan", "Grace"]);
    }
}
