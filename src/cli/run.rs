use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, scan::scan},
};

/// Dispatches to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` describing what the command found
/// - `Err` if the command fails (invalid catalog, unreadable directory, bad config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => {
            let cwd = env::current_dir().context("Failed to determine current directory")?;
            init(&cwd)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
