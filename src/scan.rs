//! Image discovery.
//!
//! Stage 1 of the pipeline. Lists the target directory and keeps the
//! entries eligible for conversion, in directory-listing order.
//!
//! ## Filtering
//!
//! An entry survives the filter when it is a regular file whose extension
//! matches the recognized set (case-insensitively). Everything else is
//! skipped silently: directories (even ones named like `icons.png`),
//! extensionless files, sidecar text, and already-converted `.webp`
//! artifacts from a prior run.
//!
//! ## Failure Model
//!
//! Discovery is all-or-nothing. If the directory cannot be listed the
//! whole run aborts before any conversion is attempted; there is no
//! partial discovery.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot list directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Extensions eligible for conversion, matched case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// One discovered source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Path to the source file inside the scanned directory.
    pub path: PathBuf,
    /// File name without extension; drives quality classification.
    pub stem: String,
    /// Extension as it appeared in the listing.
    pub extension: String,
}

impl ImageEntry {
    /// Display name as listed in the directory.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{}.{}", self.stem, self.extension))
    }
}

/// List `dir` and return the entries with recognized image extensions.
///
/// Order is the underlying directory-listing order; no sorting is
/// applied. Returns [`ScanError::DirectoryUnreadable`] when the listing
/// itself fails, which is fatal for the run.
pub fn scan(dir: &Path) -> Result<Vec<ImageEntry>, ScanError> {
    let unreadable = |source| ScanError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(unreadable)? {
        let item = item.map_err(unreadable)?;
        let path = item.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.iter().any(|k| ext.eq_ignore_ascii_case(k)) {
            continue;
        }
        let extension = ext.to_string();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        entries.push(ImageEntry {
            path,
            stem,
            extension,
        });
    }

    Ok(entries)
}
