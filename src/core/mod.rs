//! Translation completeness scanning.
//!
//! A scan runs in four steps:
//!
//! 1. **Qt search**: `.qm` catalogs below `share/<id>/translations`
//! 2. **gettext search**: `.mo` catalogs below `share/locale/*/LC_MESSAGES`
//! 3. **Normalization**: string counts become percentages of the richest catalog
//! 4. **Selection**: sort by locale, drop incomplete languages, emit to a [`LanguageSink`]
//!
//! The catalog readers in [`catalog`] work on byte buffers and never touch the
//! filesystem.

mod cancellable;
pub mod catalog;
mod context;
mod error;
mod languages;
mod scan;
pub mod search;
mod translation;

pub use cancellable::Cancellable;
pub use catalog::CatalogKind;
pub use context::{CatalogEntry, ScanContext, ScanFlags};
pub use error::{CatalogError, ScanError};
pub use languages::{Language, LanguageSink, Languages};
pub use scan::{ScanSummary, search_translations};
pub use translation::{Translation, TranslationKind};
