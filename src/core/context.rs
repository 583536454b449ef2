use std::{fs, path::Path};

use tracing::debug;

use crate::core::{Cancellable, CatalogKind, ScanError, Translation};

/// Options that change how catalogs are searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanFlags {
    /// Parse every `.mo` file of a locale when none matches a descriptor.
    ///
    /// This may attribute catalogs of unrelated packages to the application,
    /// but without it an application with no descriptors reports nothing.
    pub use_fallbacks: bool,
}

/// One parsed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub locale: String,
    pub kind: CatalogKind,
    pub string_count: u32,
    /// Completeness relative to the richest catalog, filled in by
    /// [`ScanContext::compute_percentages`].
    pub percentage: u32,
}

/// Accumulates catalog entries for a single scan.
///
/// Both walkers push into the same context so that the maximum string count
/// covers gettext and Qt catalogs alike. Percentages are only meaningful after
/// every walker has run.
pub struct ScanContext<'a> {
    /// Descriptors of the application being scanned.
    pub translations: &'a [Translation],
    pub flags: ScanFlags,
    cancellable: Option<&'a Cancellable>,
    max_string_count: u32,
    entries: Vec<CatalogEntry>,
}

impl<'a> ScanContext<'a> {
    pub fn new(
        translations: &'a [Translation],
        flags: ScanFlags,
        cancellable: Option<&'a Cancellable>,
    ) -> Self {
        Self {
            translations,
            flags,
            cancellable,
            max_string_count: 0,
            entries: Vec::new(),
        }
    }

    pub fn max_string_count(&self) -> u32 {
        self.max_string_count
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }

    /// Fails with [`ScanError::Cancelled`] if the caller asked to stop.
    pub fn check_cancelled(&self) -> Result<(), ScanError> {
        match self.cancellable {
            Some(cancellable) => cancellable.check(),
            None => Ok(()),
        }
    }

    /// Records a catalog and raises the running maximum if needed.
    pub fn insert(&mut self, locale: &str, kind: CatalogKind, string_count: u32) {
        self.max_string_count = self.max_string_count.max(string_count);
        self.entries.push(CatalogEntry {
            locale: locale.to_string(),
            kind,
            string_count,
            percentage: 0,
        });
    }

    /// Reads a catalog file and records it under `locale`.
    ///
    /// A file that is not a valid catalog of `kind` aborts the scan.
    pub fn parse_file(
        &mut self,
        kind: CatalogKind,
        locale: &str,
        path: &Path,
    ) -> Result<(), ScanError> {
        self.check_cancelled()?;

        let data = fs::read(path).map_err(|source| ScanError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let string_count = kind
            .count_strings(&data)
            .map_err(|err| ScanError::format(path, err))?;

        debug!(
            "{:?} catalog {} for {}: {} strings",
            kind,
            path.display(),
            locale,
            string_count
        );
        self.insert(locale, kind, string_count);
        Ok(())
    }

    /// Sets each entry's percentage against the final maximum.
    ///
    /// With no strings anywhere every percentage is 0.
    pub fn compute_percentages(&mut self) {
        let max = u64::from(self.max_string_count);
        for entry in &mut self.entries {
            entry.percentage = if max == 0 {
                0
            } else {
                (u64::from(entry.string_count) * 100 / max).min(100) as u32
            };
        }
    }
}
