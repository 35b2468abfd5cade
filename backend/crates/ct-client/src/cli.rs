use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ct")]
#[command(about = "Send contact form submissions and check the contact store")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Site URL for the api/form transports (overrides transport.base_url)
    #[arg(long, global = true)]
    pub(crate) url: Option<String>,

    /// Transport: api, form or store (overrides transport.kind)
    #[arg(long, global = true)]
    pub(crate) transport: Option<String>,

    /// Network timeout in seconds (overrides transport.timeout_secs)
    #[arg(long, global = true)]
    pub(crate) timeout: Option<u64>,
}
