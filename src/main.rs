mod cli_commands;
mod cli_exec;
mod cli_runtime;

pub(crate) use cli_commands::config::ConfigCommands;
pub(crate) use cli_commands::promote::PromoteArgs;
pub(crate) use cli_commands::Commands;
pub(crate) use cli_runtime::{Globals, require_client};

fn main() {
    cli_runtime::init_logging();
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
