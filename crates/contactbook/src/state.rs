//! Shared application state.
//!
//! Cloned for each request handler. The repository is a trait object so the
//! same handlers run against PostgreSQL in production and memory in tests.

use std::sync::Arc;

use contactbook_core::storage::ContactRepository;

use crate::storage::InMemoryContactRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Contact repository backing every API route.
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }

    /// Creates an AppState backed by an empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryContactRepository::new()))
    }
}
