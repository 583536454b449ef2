use std::path::{Path, PathBuf};

use tracing::debug;

use super::list_dir;
use crate::core::{CatalogKind, ScanContext, ScanError};

/// Finds `.mo` catalogs in `<prefix>/share/locale/*/LC_MESSAGES/`.
pub fn search_translations_gettext(
    ctx: &mut ScanContext<'_>,
    prefix: &Path,
) -> Result<(), ScanError> {
    let path = prefix.join("share").join("locale");
    if !path.exists() {
        debug!("no gettext catalogs in {}", path.display());
        return Ok(());
    }

    for entry in list_dir(&path)? {
        ctx.check_cancelled()?;

        let Some(locale) = entry.file_name().to_str() else {
            continue;
        };
        let messages_path = entry.path().join("LC_MESSAGES");
        if !messages_path.exists() {
            continue;
        }
        search_locale(ctx, locale, &messages_path)?;
    }

    Ok(())
}

/// Searches one `LC_MESSAGES` directory.
///
/// Catalogs named after a gettext descriptor are preferred. Only when none
/// exists and fallbacks are enabled is every file in the directory parsed.
fn search_locale(
    ctx: &mut ScanContext<'_>,
    locale: &str,
    messages_path: &Path,
) -> Result<(), ScanError> {
    let translations = ctx.translations;
    let mut found_anything = false;
    let mut mo_paths: Vec<PathBuf> = Vec::new();

    for entry in list_dir(messages_path)? {
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name();
        for translation in translations.iter().filter(|t| t.kind.matches_gettext()) {
            let expected = format!("{}.mo", translation.id);
            if file_name == expected.as_str() {
                ctx.parse_file(CatalogKind::Gettext, locale, entry.path())?;
                found_anything = true;
            }
        }
        mo_paths.push(entry.into_path());
    }

    if found_anything {
        return Ok(());
    }

    if !ctx.flags.use_fallbacks {
        debug!("no matching catalog for {} and fallbacks are disabled", locale);
        return Ok(());
    }

    // may count catalogs of other packages installed in the same prefix
    for path in &mo_paths {
        ctx.parse_file(CatalogKind::Gettext, locale, path)?;
    }
    Ok(())
}
