//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `contactbook_core::storage`.

use contactbook_core::storage::RepositoryError;

/// Maps a sqlx error to a RepositoryError.
///
/// # Error Mapping
///
/// - Pool, I/O, TLS and configuration errors → `RepositoryError::ConnectionFailed`
/// - Database errors (constraint violations included) → `RepositoryError::QueryFailed`
/// - All other errors → `RepositoryError::QueryFailed`
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => RepositoryError::ConnectionFailed(err.to_string()),

        sqlx::Error::Database(db_err) => match db_err.code() {
            Some(code) => RepositoryError::QueryFailed(format!("{} ({code})", db_err.message())),
            None => RepositoryError::QueryFailed(db_err.message().to_string()),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
