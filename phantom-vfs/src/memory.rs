//! In-memory file system implementation

use crate::error::{VfsError, VfsResult};
use crate::VirtualFileSystem;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct Entries {
    files: BTreeMap<String, Vec<u8>>,
    unreadable: BTreeSet<String>,
}

/// An in-memory file system implementation.
///
/// All files are stored in memory using a `BTreeMap`, making it suitable
/// for testing and scenarios where disk access is not desired. Paths are
/// matched literally, as the native backend on Unix would match them:
/// `lib/a.js`, `./lib/a.js` and `lib\a.js` are different entries.
///
/// # Example
/// ```
/// use phantom_vfs::{MemoryFileSystem, VirtualFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new();
/// fs.insert("/test.js", "1 + 1");
/// let content = fs.read_file(Path::new("/test.js")).unwrap();
/// assert_eq!(content, b"1 + 1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    entries: Arc<RwLock<Entries>>,
}

impl MemoryFileSystem {
    /// Create a new empty memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new memory file system pre-populated with files.
    ///
    /// # Arguments
    /// * `files` - Iterator of (path, content) tuples
    pub fn with_files<I, S, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: AsRef<str>,
        C: AsRef<[u8]>,
    {
        let fs = Self::new();
        for (path, content) in files {
            fs.insert(path.as_ref(), content);
        }
        fs
    }

    /// Add or replace a file.
    pub fn insert(&self, path: &str, content: impl AsRef<[u8]>) {
        let key = path_key(Path::new(path));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.files.insert(key, content.as_ref().to_vec());
    }

    /// Make an existing file fail on read, as if permissions were revoked.
    pub fn deny_read(&self, path: &str) {
        let key = path_key(Path::new(path));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.unreadable.insert(key);
    }
}

/// Storage key for a path, taken verbatim like the native backend does.
fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl VirtualFileSystem for MemoryFileSystem {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        let key = path_key(path);
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        if entries.unreadable.contains(&key) {
            return Err(VfsError::PermissionDenied { path: key });
        }

        entries
            .files
            .get(&key)
            .cloned()
            .ok_or(VfsError::NotFound { path: key })
    }

    fn exists(&self, path: &Path) -> bool {
        let key = path_key(path);
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.files.contains_key(&key)
    }
}
