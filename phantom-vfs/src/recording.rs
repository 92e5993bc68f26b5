//! Access-recording wrapper

use crate::{VfsResult, VirtualFileSystem};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// One file system call seen by [`RecordingFileSystem`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Exists(String),
    Read(String),
}

impl Access {
    /// The path the call was made with
    pub fn path(&self) -> &str {
        match self {
            Access::Exists(p) | Access::Read(p) => p,
        }
    }
}

/// Wraps another file system and records every call made through it.
///
/// Calls are forwarded unchanged; the log is kept in call order.
pub struct RecordingFileSystem<F> {
    inner: F,
    accesses: Mutex<Vec<Access>>,
}

impl<F: VirtualFileSystem> RecordingFileSystem<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            accesses: Mutex::new(Vec::new()),
        }
    }

    /// Calls recorded so far
    pub fn accesses(&self) -> Vec<Access> {
        self.accesses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Paths passed to `read_file`, in order
    pub fn reads(&self) -> Vec<String> {
        self.accesses()
            .into_iter()
            .filter_map(|a| match a {
                Access::Read(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    fn record(&self, access: Access) {
        self.accesses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(access);
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl<F: VirtualFileSystem> VirtualFileSystem for RecordingFileSystem<F> {
    fn read_file(&self, path: &Path) -> VfsResult<Vec<u8>> {
        self.record(Access::Read(display(path)));
        self.inner.read_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.record(Access::Exists(display(path)));
        self.inner.exists(path)
    }
}
