use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Toolchain an application's translations were built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationKind {
    Gettext,
    Qt,
    /// No kind was declared, so both layouts are searched.
    #[default]
    Unknown,
}

impl TranslationKind {
    /// Whether catalogs found by the gettext walker may belong to this descriptor.
    pub fn matches_gettext(self) -> bool {
        matches!(self, TranslationKind::Gettext | TranslationKind::Unknown)
    }

    /// Whether catalogs found by the Qt walker may belong to this descriptor.
    pub fn matches_qt(self) -> bool {
        matches!(self, TranslationKind::Qt | TranslationKind::Unknown)
    }
}

impl fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TranslationKind::Gettext => "gettext",
            TranslationKind::Qt => "qt",
            TranslationKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Where an application installs its translations.
///
/// For gettext the id is the text domain (`<id>.mo`), for Qt it is both the
/// install directory below `share/` and the catalog file name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Translation {
    #[serde(default)]
    pub kind: TranslationKind,
    pub id: String,
}

impl Translation {
    pub fn new(kind: TranslationKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Parses `gettext:ID`, `qt:ID` or a bare `ID` of unknown kind.
impl FromStr for Translation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = match s.split_once(':') {
            Some(("gettext", id)) => (TranslationKind::Gettext, id),
            Some(("qt", id)) => (TranslationKind::Qt, id),
            Some(("unknown", id)) => (TranslationKind::Unknown, id),
            Some((kind, _)) => bail!(
                "unknown translation kind \"{}\" (expected gettext, qt or unknown)",
                kind
            ),
            None => (TranslationKind::Unknown, s),
        };
        if id.is_empty() {
            bail!("translation id must not be empty");
        }
        Ok(Translation::new(kind, id))
    }
}
