use std::path::Path;

use tracing::debug;

use super::list_dir;
use crate::core::{CatalogKind, ScanContext, ScanError};

/// Finds `.qm` catalogs for every Qt (or unknown) descriptor.
///
/// Catalogs live in `<prefix>/share/<id>/translations/` and are named
/// `<id>_<locale>.qm`.
pub fn search_translations_qt(ctx: &mut ScanContext<'_>, prefix: &Path) -> Result<(), ScanError> {
    let translations = ctx.translations;

    for translation in translations.iter().filter(|t| t.kind.matches_qt()) {
        ctx.check_cancelled()?;

        let path = prefix
            .join("share")
            .join(&translation.id)
            .join("translations");
        if !path.exists() {
            debug!("no Qt translations for {} in {}", translation.id, path.display());
            continue;
        }

        for entry in list_dir(&path)? {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                debug!("skipping non UTF-8 file name {}", entry.path().display());
                continue;
            };
            let Some(locale) = locale_from_file_name(file_name, &translation.id) else {
                continue;
            };
            ctx.parse_file(CatalogKind::Qt, locale, entry.path())?;
        }
    }

    Ok(())
}

/// Extracts `de` from `foo_de.qm` for id `foo`.
///
/// One separator character after the id is dropped, then everything from the
/// first `.` on.
fn locale_from_file_name<'a>(file_name: &'a str, id: &str) -> Option<&'a str> {
    let mut rest = file_name.strip_prefix(id)?.chars();
    rest.next()?;
    let locale = rest.as_str().split('.').next()?;
    (!locale.is_empty()).then_some(locale)
}
