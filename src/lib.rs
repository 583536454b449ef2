//! langcov - translation completeness for installed applications
//!
//! langcov finds the compiled gettext (`.mo`) and Qt (`.qm`) catalogs an
//! application installed below a prefix, counts the translated strings in
//! each, and reports every language whose catalog is complete enough relative
//! to the best translated one.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog readers, directory walkers and the scan itself
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use langcov::core::{Languages, ScanFlags, Translation, TranslationKind, search_translations};
//!
//! let translations = [Translation::new(TranslationKind::Gettext, "gnome-calculator")];
//! let mut languages = Languages::new();
//! search_translations(
//!     &translations,
//!     Path::new("/usr"),
//!     25,
//!     ScanFlags::default(),
//!     None,
//!     &mut languages,
//! )?;
//! for language in &languages {
//!     println!("{} {}%", language.locale, language.percentage);
//! }
//! # Ok::<(), langcov::core::ScanError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
