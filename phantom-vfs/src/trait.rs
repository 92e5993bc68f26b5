//! VirtualFileSystem trait definition

use crate::error::VfsResult;
use std::path::Path;

/// Virtual File System trait
///
/// Read-only view of a file system, decoupling script loading from
/// the host file system.
///
/// # Implementations
/// - `MemoryFileSystem`: In-memory file system
/// - `NativeFileSystem`: Native OS file system
/// - `RecordingFileSystem`: Wrapper that records every access
pub trait VirtualFileSystem: Send + Sync {
    /// Read file contents
    ///
    /// The whole file is read and the handle released before returning.
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>>;

    /// Check if path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;
}

impl<T: VirtualFileSystem + ?Sized> VirtualFileSystem for std::sync::Arc<T> {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        (**self).read_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}
