use anyhow::{Context, Result};

use crate::{Commands, ConfigCommands, Globals, PromoteArgs, require_client};

mod config;
mod promote;

pub(super) fn handle_command(globals: &Globals, command: Commands) -> Result<()> {
    match command {
        Commands::Promote(args) => promote::handle_promote_command(globals, args),
        Commands::Config { command } => config::handle_config_command(globals, command),
    }
}
