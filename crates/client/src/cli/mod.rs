//! CLI command definitions.

pub mod contacts;
pub mod health;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the contactbook API.
#[derive(Debug, Parser)]
#[command(name = "contactbook-client")]
#[command(about = "CLI client for the contactbook API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "CONTACTBOOK_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Contact management.
    Contacts(contacts::ContactsCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
