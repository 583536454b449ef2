use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that abort a translation scan.
///
/// A missing locale or translations directory is not an error; it simply
/// contributes nothing. Everything here stops the scan and no languages are
/// emitted.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The catalog header is truncated or carries an unknown magic.
    #[error("{}: file is invalid: {}", .path.display(), .reason)]
    Format { path: PathBuf, reason: String },
    /// The directory exists but could not be listed.
    #[error("failed to open directory {}: {}", .path.display(), .source)]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The catalog file exists but could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("scan was cancelled")]
    Cancelled,
}

/// A catalog buffer that could not be recognised.
///
/// Readers work on bytes only; the walker attaches the file path when it
/// turns this into a [`ScanError::Format`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("expected at least {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("unknown magic {0}")]
    BadMagic(String),
}

impl ScanError {
    pub(crate) fn format(path: impl Into<PathBuf>, err: CatalogError) -> Self {
        ScanError::Format {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}
