use std::env;

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::{CommandResult, ScanReport};
use crate::{
    cli::args::ScanCommand,
    config::{ConfigLoadResult, load_config},
    core::{Languages, ScanFlags, search_translations},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let ConfigLoadResult { config, from_file } = load_config(&cwd)?;
    if from_file {
        debug!("using config file found from {}", cwd.display());
    }

    let prefix = args
        .prefix
        .clone()
        .unwrap_or_else(|| config.prefix.clone());
    if !prefix.is_dir() {
        bail!("Prefix {} is not a directory", prefix.display());
    }

    let translations = if args.translations.is_empty() {
        config.translations.clone()
    } else {
        args.translations.clone()
    };
    let min_percentage = args.min_percentage.unwrap_or(config.min_percentage);
    let flags = ScanFlags {
        use_fallbacks: args.use_fallbacks().unwrap_or(config.use_fallbacks),
    };

    let mut languages = Languages::new();
    let summary = search_translations(
        &translations,
        &prefix,
        min_percentage,
        flags,
        None,
        &mut languages,
    )
    .with_context(|| format!("Failed to scan translations in {}", prefix.display()))?;

    Ok(CommandResult::scan(ScanReport {
        prefix,
        min_percentage,
        languages,
        summary,
    }))
}
