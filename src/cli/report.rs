//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow langcov to be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, ScanReport},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::Language;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Languages at or above this percentage are shown in green.
const WELL_TRANSLATED: u32 = 75;

pub fn print(result: &CommandResult, format: OutputFormat) -> Result<()> {
    match &result.summary {
        CommandSummary::Scan(report) => match format {
            OutputFormat::Text => {
                print_scan_to(report, &mut io::stdout().lock());
                Ok(())
            }
            OutputFormat::Json => print_scan_json_to(report, &mut io::stdout().lock()),
        },
        CommandSummary::Init(summary) => {
            print_init(summary);
            Ok(())
        }
    }
}

/// Print the language table and a summary line.
pub fn print_scan_to<W: Write>(report: &ScanReport, writer: &mut W) {
    let languages: Vec<&Language> = report.languages.iter().collect();
    let width = languages
        .iter()
        .map(|l| l.locale.width())
        .max()
        .unwrap_or(0);

    for language in &languages {
        let padding = " ".repeat(width - language.locale.width());
        let percentage = format!("{:>3}%", language.percentage);
        let percentage = if language.percentage >= WELL_TRANSLATED {
            percentage.green()
        } else {
            percentage.yellow()
        };
        let _ = writeln!(
            writer,
            "{}{} {}",
            language.locale.bold(),
            padding,
            percentage
        );
    }

    let catalogs = format!(
        "{} {}",
        report.summary.catalogs_scanned,
        if report.summary.catalogs_scanned == 1 {
            "catalog"
        } else {
            "catalogs"
        }
    );

    if languages.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "No languages at or above {}% ({} scanned)",
                report.min_percentage, catalogs
            )
            .red()
        );
        return;
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} {} at or above {}% ({} scanned, {} strings max)",
            languages.len(),
            if languages.len() == 1 {
                "language"
            } else {
                "languages"
            },
            report.min_percentage,
            catalogs,
            report.summary.max_string_count
        )
        .green()
    );
}

/// Print the report as pretty JSON.
pub fn print_scan_json_to<W: Write>(report: &ScanReport, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    writeln!(writer, "{}", json).context("Failed to write report")?;
    Ok(())
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("Error: {}", error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
    }
}
