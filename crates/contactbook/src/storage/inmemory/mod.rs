//! In-memory storage backend for tests and local development.
//!
//! Data is not persisted and is lost when the process exits.

mod repository;

pub use repository::InMemoryContactRepository;
