//! Contact CLI commands.

use clap::{Parser, Subcommand};

/// Contact management commands.
#[derive(Debug, Parser)]
pub struct ContactsCommand {
    #[command(subcommand)]
    pub action: ContactsAction,
}

/// Available contact actions.
#[derive(Debug, Subcommand)]
pub enum ContactsAction {
    /// List all contacts.
    List,
    /// Create a new contact.
    Create {
        /// Contact name.
        #[arg(long)]
        name: String,
        /// Contact email.
        #[arg(long)]
        email: String,
    },
    /// Get contact by ID.
    Get {
        /// Contact ID.
        id: i64,
    },
    /// Replace name and email of a contact.
    Update {
        /// Contact ID.
        id: i64,
        /// New name.
        #[arg(long)]
        name: String,
        /// New email.
        #[arg(long)]
        email: String,
    },
    /// Delete contact by ID.
    Delete {
        /// Contact ID.
        id: i64,
    },
}
