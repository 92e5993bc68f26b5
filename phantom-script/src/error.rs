//! Script injection error types

use phantom_vfs::VfsError;
use thiserror::Error;

/// Why a script could not be prepared for injection
#[derive(Error, Debug)]
pub enum InjectError {
    /// No script path was given
    #[error("empty script path")]
    EmptyPath,

    /// The selected candidate could not be read
    #[error("Can't open '{requested}'")]
    Open {
        /// Path as the caller gave it
        requested: String,
        /// Candidate that was actually tried
        candidate: String,
        #[source]
        source: VfsError,
    },

    /// The alternate dialect could not be converted
    #[error("Can't convert '{path}': {source}")]
    Transpile {
        path: String,
        #[source]
        source: TranspileError,
    },
}

impl InjectError {
    /// Whether this is a silent no-op rather than a failure worth reporting
    pub fn is_empty_path(&self) -> bool {
        matches!(self, InjectError::EmptyPath)
    }
}

/// Transpiler failures
#[derive(Error, Debug)]
pub enum TranspileError {
    /// The compiler process could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Piping source to or output from the compiler failed
    #[error("I/O error talking to '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The compiler ran but reported an error
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}
