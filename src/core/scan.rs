use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::core::{
    Cancellable, CatalogEntry, LanguageSink, ScanContext, ScanError, ScanFlags, Translation,
    search::{gettext::search_translations_gettext, qt::search_translations_qt},
};

/// Counters describing a finished scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    /// Catalog files parsed, across both formats.
    pub catalogs_scanned: usize,
    /// String count of the richest catalog; the 100% reference.
    pub max_string_count: u32,
    /// Languages handed to the sink.
    pub languages_added: usize,
}

/// Searches `prefix` for Qt and gettext catalogs and reports the languages
/// that are at least `min_percentage` complete.
///
/// Completeness is measured against the catalog with the most strings. Each
/// locale is reported at most once, in ascending order. On error nothing is
/// passed to `sink`.
///
/// Without any `translations`, only fallback search (see
/// [`ScanFlags::use_fallbacks`]) can find catalogs, and it may include
/// languages of unrelated packages.
pub fn search_translations<S: LanguageSink + ?Sized>(
    translations: &[Translation],
    prefix: &Path,
    min_percentage: u32,
    flags: ScanFlags,
    cancellable: Option<&Cancellable>,
    sink: &mut S,
) -> Result<ScanSummary, ScanError> {
    let mut ctx = ScanContext::new(translations, flags, cancellable);

    search_translations_qt(&mut ctx, prefix)?;
    search_translations_gettext(&mut ctx, prefix)?;
    ctx.check_cancelled()?;

    ctx.compute_percentages();
    let max_string_count = ctx.max_string_count();
    let entries = ctx.into_entries();
    let catalogs_scanned = entries.len();

    let mut languages_added = 0;
    for entry in select_languages(entries, min_percentage) {
        sink.add_language(entry.percentage, &entry.locale);
        languages_added += 1;
    }

    debug!(
        "{} catalogs, {} strings max, {} languages at or above {}%",
        catalogs_scanned, max_string_count, languages_added, min_percentage
    );
    Ok(ScanSummary {
        catalogs_scanned,
        max_string_count,
        languages_added,
    })
}

/// Sorts entries by locale, keeps the most complete catalog per locale and
/// drops those below `min_percentage`.
fn select_languages(mut entries: Vec<CatalogEntry>, min_percentage: u32) -> Vec<CatalogEntry> {
    entries.sort_by(|a, b| a.locale.cmp(&b.locale));

    let mut selected: Vec<CatalogEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match selected.last_mut() {
            Some(last) if last.locale == entry.locale => {
                if entry.percentage > last.percentage {
                    *last = entry;
                }
            }
            _ => selected.push(entry),
        }
    }

    selected.retain(|e| e.percentage >= min_percentage);
    selected
}
