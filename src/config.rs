use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{ScanFlags, Translation};

pub const CONFIG_FILE_NAME: &str = ".langcovrc.json";

/// Threshold below which a language is not reported.
pub const DEFAULT_MIN_PERCENTAGE: u32 = 25;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_prefix")]
    pub prefix: PathBuf,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default = "default_min_percentage")]
    pub min_percentage: u32,
    #[serde(default = "default_use_fallbacks")]
    pub use_fallbacks: bool,
}

fn default_prefix() -> PathBuf {
    PathBuf::from("/usr")
}

fn default_min_percentage() -> u32 {
    DEFAULT_MIN_PERCENTAGE
}

fn default_use_fallbacks() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            translations: Vec::new(),
            min_percentage: default_min_percentage(),
            use_fallbacks: default_use_fallbacks(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.min_percentage > 100 {
            bail!(
                "Invalid 'minPercentage': {} (must be between 0 and 100)",
                self.min_percentage
            );
        }

        for translation in &self.translations {
            if translation.id.is_empty() {
                bail!("Invalid 'translations': id must not be empty");
            }
        }

        Ok(())
    }

    pub fn flags(&self) -> ScanFlags {
        ScanFlags {
            use_fallbacks: self.use_fallbacks,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
