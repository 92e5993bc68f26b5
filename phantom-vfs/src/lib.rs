//! Phantom Virtual File System
//!
//! A read-only virtual file system abstraction used to locate and load
//! scripts, with native, in-memory and recording backends.
//!
//! # Usage
//! ```rust
//! use phantom_vfs::{VirtualFileSystem, MemoryFileSystem};
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::with_files([("lib/hello.js", "hello()")]);
//! let content = fs.read_file(Path::new("lib/hello.js")).unwrap();
//! assert_eq!(content, b"hello()");
//! ```

mod error;
mod memory;
mod native;
mod recording;
mod r#trait;

pub use error::{VfsError, VfsResult};
pub use memory::MemoryFileSystem;
pub use native::NativeFileSystem;
pub use recording::{Access, RecordingFileSystem};
pub use r#trait::VirtualFileSystem;
