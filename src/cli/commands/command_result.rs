use std::path::PathBuf;

use serde::Serialize;

use crate::core::{Languages, ScanSummary};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanReport),
    Init(InitSummary),
}

/// Outcome of a successful scan, as printed and serialized.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub prefix: PathBuf,
    pub min_percentage: u32,
    pub languages: Languages,
    #[serde(flatten)]
    pub summary: ScanSummary,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file already existed and was left alone.
    pub error: Option<String>,
}

/// Result of running langcov commands
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn scan(report: ScanReport) -> Self {
        Self {
            summary: CommandSummary::Scan(report),
        }
    }

    pub fn init(summary: InitSummary) -> Self {
        Self {
            summary: CommandSummary::Init(summary),
        }
    }
}
