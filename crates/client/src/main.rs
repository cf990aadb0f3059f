//! contactbook-client CLI entry point.

use clap::Parser;
use contactbook_client::cli::contacts::ContactsAction;
use contactbook_client::cli::health::HealthAction;
use contactbook_client::cli::{Cli, Commands, OutputFormat};
use contactbook_client::client::ContactbookClient;
use contactbook_client::output::{format_json, pretty};
use contactbook_core::contact::{ContactMessage, ContactPayload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ContactbookClient::new(&cli.base_url);

    match cli.command {
        Commands::Contacts(contacts_cmd) => match contacts_cmd.action {
            ContactsAction::List => {
                let contacts = client.list_contacts().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_json(&contacts)),
                    OutputFormat::Pretty => println!("{}", pretty::format_contacts(&contacts)),
                }
            }
            ContactsAction::Get { id } => {
                let contact = client.get_contact(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_json(&contact)),
                    OutputFormat::Pretty => println!("{}", pretty::format_contact(&contact)),
                }
            }
            ContactsAction::Create { name, email } => {
                let message = client
                    .create_contact(&ContactPayload::new(name, email))
                    .await?;
                print_message(cli.format, cli.quiet, &message);
            }
            ContactsAction::Update { id, name, email } => {
                let message = client
                    .update_contact(id, &ContactPayload::new(name, email))
                    .await?;
                print_message(cli.format, cli.quiet, &message);
            }
            ContactsAction::Delete { id } => {
                let message = client.delete_contact(id).await?;
                print_message(cli.format, cli.quiet, &message);
            }
        },
        Commands::Health(health_cmd) => match health_cmd.action {
            HealthAction::Live => {
                let live = client.livez().await?;
                if !cli.quiet {
                    println!("Live: {}", live);
                }
                if !live {
                    std::process::exit(1);
                }
            }
            HealthAction::Ready => {
                let status = client.readyz().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_json(&status)),
                    OutputFormat::Pretty => match &status.error {
                        Some(error) => println!("Ready: {}\n  Error: {}", status.ready, error),
                        None => println!("Ready: {}", status.ready),
                    },
                }
                if !status.ready {
                    std::process::exit(1);
                }
            }
        },
    }

    Ok(())
}

/// Print the response of a create, update or delete.
fn print_message(format: OutputFormat, quiet: bool, message: &ContactMessage) {
    match format {
        OutputFormat::Json => println!("{}", format_json(message)),
        OutputFormat::Pretty if !quiet => println!("{}", pretty::format_message(message)),
        OutputFormat::Pretty => println!("{}", message.id),
    }
}
