use clap::Subcommand;

use crate::{ConfigCommands, PromoteArgs};

pub(crate) mod config;
pub(crate) mod promote;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Promote a piece of freight
    Promote(PromoteArgs),

    /// Show or change the CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
