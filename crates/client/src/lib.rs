//! contactbook_client - CLI client for the contactbook API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::ContactbookClient;
pub use error::{ClientError, Result};
