use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Validate and send one contact submission
    Submit {
        /// Your name
        #[arg(long)]
        name: String,

        /// Reply-to email address
        #[arg(long)]
        email: String,

        /// Company (optional)
        #[arg(long)]
        company: Option<String>,

        /// Project details
        #[arg(long)]
        project: String,

        /// Service of interest (repeatable)
        #[arg(long = "service", short = 's')]
        services: Vec<String>,
    },

    /// Check that the configured store is reachable and its table exists
    CheckStore,
}
