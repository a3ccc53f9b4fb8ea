//! Document loading
//!
//! The only place the library touches the filesystem for the linted file.
//! Everything downstream works on the loaded text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default document linted when no path is given
pub const DEFAULT_DOCUMENT: &str = "./CLAUDE.md";

/// Errors that can occur while loading a document
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document does not exist
    #[error("{} not found.", .path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// The document exists but could not be read
    #[error("failed to read {}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

/// A loaded document and the label it is reported under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Label shown in reports, the path as given
    pub label: String,
    /// Full document text
    pub content: String,
}

impl SourceFile {
    /// Read the document at `path`
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD so a stray byte still
    /// produces a report.
    pub fn read(path: &Path) -> Result<Self, SourceError> {
        let bytes = fs::read(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound { path: path.to_path_buf() }
            } else {
                SourceError::Read { path: path.to_path_buf(), source }
            }
        })?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        log::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(Self { label: path.display().to_string(), content })
    }

    /// Directory containing the document, used for config discovery
    #[must_use]
    pub fn directory(path: &Path) -> &Path {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
