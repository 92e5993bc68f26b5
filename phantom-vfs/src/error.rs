//! VFS Error Types

use thiserror::Error;

/// Result type for VFS operations
pub type VfsResult<T> = Result<T, VfsError>;

/// Error type for VFS operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VfsError {
    /// File or directory not found
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// Permission denied
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// Path exists but is not a regular file
    #[error("Not a file: {path}")]
    NotAFile { path: String },

    /// IO error
    #[error("IO error: {message}")]
    Io { message: String },
}

impl VfsError {
    /// Map an IO error on `path` onto the closest VFS error
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        let path = path.to_string_lossy().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => VfsError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => VfsError::PermissionDenied { path },
            _ => VfsError::Io {
                message: err.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for VfsError {
    fn from(err: std::io::Error) -> Self {
        VfsError::Io {
            message: err.to_string(),
        }
    }
}
