//! PostgreSQL storage backend implementation.
//!
//! One `PgPool` is opened at startup and shared by every request. Each
//! repository call borrows a connection for a single statement.

mod error;
mod repository;
mod schema;

pub use repository::PostgresContactRepository;
