//! Error type for directory loading, saving, and query processing.
//!
//! Every failure carries the path of the file involved so the operator can
//! tell which of the five files in a run went wrong. There is no retry
//! layer: the first error aborts the run.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures surfaced while reading or writing directory and query files.
#[derive(Debug)]
pub enum DirectoryError {
    /// The underlying file could not be opened, read, or written.
    Io { path: PathBuf, source: io::Error },
    /// The file opened fine but its contents do not match the flat text
    /// format (bad count, short record, non-numeric phone field).
    Parse { path: PathBuf, detail: String },
    /// A name field exceeds the capacity policy (rejected, not truncated).
    NameTooLong {
        path: PathBuf,
        field: &'static str,
        len: usize,
    },
    /// The backing storage for the declared contact count could not be
    /// allocated.
    Alloc { path: PathBuf, count: usize },
}

impl DirectoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DirectoryError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        DirectoryError::Parse {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Path of the file this error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            DirectoryError::Io { path, .. }
            | DirectoryError::Parse { path, .. }
            | DirectoryError::NameTooLong { path, .. }
            | DirectoryError::Alloc { path, .. } => path,
        }
    }
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Io { path, source } => {
                write!(f, "cannot access {}: {}", path.display(), source)
            }
            DirectoryError::Parse { path, detail } => {
                write!(f, "cannot parse {}: {}", path.display(), detail)
            }
            DirectoryError::NameTooLong { path, field, len } => {
                write!(
                    f,
                    "cannot parse {}: {} name of {} bytes exceeds the {}-byte limit",
                    path.display(),
                    field,
                    len,
                    crate::types::MAX_NAME_BYTES
                )
            }
            DirectoryError::Alloc { path, count } => {
                write!(
                    f,
                    "cannot load {}: failed to allocate storage for {} contacts",
                    path.display(),
                    count
                )
            }
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
