//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use args::OutputFormat;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let format = match &args.command {
        Some(Command::Scan(cmd)) => cmd.args.format,
        _ => OutputFormat::Text,
    };

    let result = run::run(args)?;
    report::print(&result, format)?;

    Ok(ExitStatus::from_result(&result))
}
