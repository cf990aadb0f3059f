use thiserror::Error;

/// Errors caused by malformed client input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid contact id: {0}")]
    InvalidId(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}
