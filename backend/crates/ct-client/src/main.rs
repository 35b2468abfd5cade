//! ct - contact form CLI
//!
//! Sends a contact submission through the configured transport, or checks
//! the hosted store connection.
//!
//! # Examples
//!
//! ```bash
//! # Send through the running server's JSON endpoint
//! ct --url http://127.0.0.1:8000 submit --name "Jo" --email jo@example.com \
//!     --project "Need a redesign soon" -s "UI Design" -s "UX Research"
//!
//! # Verify CT_STORE_URL / CT_STORE_KEY and the contacts table
//! ct check-store
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use ct_client::{ContactForm, SubmitOutcome};
use ct_config::{Config, ConfigError, StoreBackend, TransportKind};
use ct_store::StoreError;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Submit {
            name,
            email,
            company,
            project,
            services,
        } => {
            let transport = match ct_client::transport::from_config(&config) {
                Ok(transport) => transport,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            let form = ContactForm::new(transport);
            form.update_draft(|draft| {
                draft.name = name;
                draft.email = email;
                draft.company = company;
                draft.project = project;
                draft.services = services;
            });

            report(form.submit().await)
        }
        Commands::CheckStore => check_store(&config).await,
    }
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = Config::load()?;

    if let Some(ref url) = cli.url {
        config.transport.base_url = url.clone();
    }
    if let Some(ref kind) = cli.transport {
        config.transport.kind = kind.parse::<TransportKind>()?;
    }
    if let Some(timeout) = cli.timeout {
        config.transport.timeout_secs = timeout;
    }

    config.validate()?;
    Ok(config)
}

fn report(outcome: SubmitOutcome) -> ExitCode {
    match outcome {
        SubmitOutcome::Sent(notification) => {
            println!("{}", notification.title);
            println!("{}", notification.description);
            ExitCode::SUCCESS
        }
        SubmitOutcome::Invalid(errors) => {
            eprintln!("Please fix the following:");
            for error in &errors {
                eprintln!("  {}: {}", error.field, error.message);
            }
            ExitCode::FAILURE
        }
        SubmitOutcome::Failed {
            notification,
            error,
        } => {
            eprintln!("{}", notification.title);
            eprintln!("{}", notification.description);
            eprintln!();
            eprintln!("Details: {}", error);
            ExitCode::FAILURE
        }
        SubmitOutcome::Busy => {
            eprintln!("A submission is already in progress");
            ExitCode::FAILURE
        }
    }
}

async fn check_store(config: &Config) -> ExitCode {
    if config.store.backend != StoreBackend::Rest {
        println!(
            "Store backend '{}' has no remote connection to check",
            config.store.backend
        );
        return ExitCode::SUCCESS;
    }

    println!("Testing store connection...");

    let store = match ct_store::from_config(&config.store) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match store.check().await {
        Ok(()) => {
            println!("Successfully connected to the store!");
            println!(
                "The {} table is set up and ready to receive form submissions.",
                config.store.table
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error connecting to the store: {}", e);
            if let StoreError::Rejected { status: 404, .. } = e {
                eprintln!();
                eprintln!(
                    "The {} table doesn't exist yet. Create it in the store's SQL editor first.",
                    config.store.table
                );
            }
            ExitCode::FAILURE
        }
    }
}
