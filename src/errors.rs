//! Error types for docsift.

use std::path::PathBuf;

/// Top-level error type for docsift operations.
///
/// Classification itself is total over all byte sequences; errors only arise
/// from opening inputs and from the underlying reader/writer.
#[derive(Debug, thiserror::Error)]
pub enum DocsiftError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocsiftError {
    /// Wrap an open failure with the path that caused it.
    pub fn from_open(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => DocsiftError::FileNotFound(path),
            std::io::ErrorKind::PermissionDenied => DocsiftError::PermissionDenied(path),
            _ => DocsiftError::Io(source),
        }
    }
}

/// Map an error to its exit code.
pub fn exit_code(error: &DocsiftError) -> i32 {
    match error {
        DocsiftError::FileNotFound(_) => 3,
        DocsiftError::PermissionDenied(_) => 4,
        DocsiftError::Io(_) => 1,
    }
}
