//! Directory walkers that find catalogs below an installation prefix.
//!
//! Layouts searched:
//!
//! - Qt: `<prefix>/share/<id>/translations/<id>_<locale>.qm`
//! - gettext: `<prefix>/share/locale/<locale>/LC_MESSAGES/<domain>.mo`
//!
//! A directory that does not exist contributes nothing. A directory that
//! exists but cannot be listed aborts the scan.

pub mod gettext;
pub mod qt;

use std::{io, path::Path};

use walkdir::{DirEntry, WalkDir};

use crate::core::ScanError;

/// Lists the direct children of `path`, sorted by file name.
///
/// Symlinks are followed so that `file_type()` describes the target.
pub(crate) fn list_dir(path: &Path) -> Result<Vec<DirEntry>, ScanError> {
    if !path.is_dir() {
        return Err(ScanError::DirectoryAccess {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry.map_err(|err| {
                let message = err.to_string();
                ScanError::DirectoryAccess {
                    path: path.to_path_buf(),
                    source: err.into_io_error().unwrap_or_else(|| io::Error::other(message)),
                }
            })
        })
        .collect()
}
