use std::{io, process::ExitCode};

use clap::Parser;
use langcov::cli::{Arguments, ExitStatus};
use tracing::Level;

fn main() -> ExitCode {
    let args = Arguments::parse();

    let level = if args.verbose() {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match langcov::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
