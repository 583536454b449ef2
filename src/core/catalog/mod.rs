//! Readers for compiled message catalogs.
//!
//! Each reader takes a whole file's bytes and returns how many translated
//! strings it holds. String payloads are never decoded.

pub mod gettext;
pub mod qt;

use serde::Serialize;

use crate::core::error::CatalogError;

/// Binary catalog format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// GNU gettext `.mo`
    Gettext,
    /// Qt Linguist `.qm`
    Qt,
}

impl CatalogKind {
    pub fn count_strings(self, data: &[u8]) -> Result<u32, CatalogError> {
        match self {
            CatalogKind::Gettext => gettext::count_strings(data),
            CatalogKind::Qt => qt::count_strings(data),
        }
    }
}
