use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Writes the default config into `dir` unless one is already there.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult::init(InitSummary {
            error: Some(format!("{} already exists", CONFIG_FILE_NAME)),
        }));
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult::init(InitSummary { error: None }))
}
