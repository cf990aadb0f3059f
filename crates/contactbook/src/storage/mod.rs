//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `contactbook_core::storage`.
//!
//! - `postgres`: PostgreSQL backend on a shared `sqlx` connection pool
//! - `inmemory`: process-local backend for tests and local development

pub mod inmemory;
pub mod postgres;

pub use inmemory::InMemoryContactRepository;
pub use postgres::PostgresContactRepository;
