//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Report which languages an installed application supports
//! - `init`: Initialize a langcov configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::Translation;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Installation prefix to search (overrides config file, default: /usr)
    pub prefix: Option<PathBuf>,

    /// Translation descriptor as gettext:ID, qt:ID or ID (overrides config file)
    /// Can be specified multiple times: -t gettext:foo -t qt:foo
    #[arg(short = 't', long = "translation", value_name = "KIND:ID")]
    pub translations: Vec<Translation>,

    /// Minimum completeness for a language to be reported (overrides config file)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_percentage: Option<u32>,

    /// Parse every .mo file of a locale when none matches a descriptor
    #[arg(long, overrides_with = "no_fallbacks")]
    pub fallbacks: bool,

    /// Only parse catalogs that match a descriptor
    #[arg(long, overrides_with = "fallbacks")]
    pub no_fallbacks: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl ScanArgs {
    /// Fallback setting from the command line, if one was given.
    pub fn use_fallbacks(&self) -> Option<bool> {
        match (self.fallbacks, self.no_fallbacks) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report the languages an installed application is translated into
    Scan(ScanCommand),
    /// Initialize a new .langcovrc.json configuration file
    Init,
}
