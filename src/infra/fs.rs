//! Reading and atomically writing the persisted notes blob.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors while reading or writing the blob file.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path does not name a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Reads the saved blob.
///
/// Returns `Ok(None)` when the file does not exist, meaning nothing has been
/// saved yet.
///
/// # Errors
///
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8, and
/// `FsError::PermissionDenied` / `FsError::Io` for other read failures.
pub fn read_blob(path: &Path) -> Result<Option<String>, FsError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(FsError::from_io(path, e)),
    };

    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| FsError::InvalidEncoding {
            path: path.into(),
            encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        })
}

/// Writes the blob atomically, creating parent directories as needed.
///
/// Uses a temporary file in the target directory and an atomic rename, so a
/// crash never leaves a half-written blob behind.
///
/// # Errors
///
/// Returns `FsError::AtomicWrite` if the rename fails, `FsError::Io` for
/// directory creation or write failures.
pub fn write_blob(path: &Path, blob: &str) -> Result<(), FsError> {
    if path.file_name().is_none() {
        return Err(FsError::NotAFile { path: path.into() });
    }
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(path, e))?;
    temp.write_all(blob.as_bytes())
        .map_err(|e| FsError::from_io(path, e))?;

    temp.persist(path).map_err(|e| FsError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
