use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the current configuration
    View {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the default project
    SetProject { project: String },

    /// Set the API server address (records --insecure-skip-tls-verify too)
    SetServer { url: String },
}
