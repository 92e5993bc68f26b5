//! Native file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::path::Path;

/// A native OS file system implementation.
///
/// This wraps `std::fs` operations and provides the `VirtualFileSystem`
/// interface for local file access. Relative paths resolve against the
/// process working directory.
///
/// # Example
/// ```
/// use phantom_vfs::{NativeFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = NativeFileSystem::new();
/// assert!(!fs.exists(Path::new("/definitely/not/here.js")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    /// Create a new native file system.
    pub fn new() -> Self {
        Self
    }
}

impl VirtualFileSystem for NativeFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        if path.is_dir() {
            return Err(VfsError::NotAFile {
                path: path.to_string_lossy().to_string(),
            });
        }
        std::fs::read(path).map_err(|e| VfsError::from_io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
