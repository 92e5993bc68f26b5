//! Script injection: locate, load, normalize, convert, submit
//!
//! Resolution order for a requested path:
//! 1. the path itself, relative to the working directory (or absolute)
//! 2. `<lookup dir>/<path>`, taken whether or not it exists
//!
//! Only the second candidate's readability decides failure.

use crate::context::ScriptContext;
use crate::dialect::{neutralize_shebang, to_portable, ScriptDialect};
use crate::error::InjectError;
use crate::sink::ExecutionSink;
use phantom_log::{critical, warning, Logger};
use phantom_vfs::{NativeFileSystem, VirtualFileSystem};
use std::path::Path;
use std::sync::Arc;

/// What the caller asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRequest {
    pub requested_path: String,
    pub lookup_directory: String,
}

impl ScriptRequest {
    pub fn new(requested_path: impl Into<String>, lookup_directory: impl Into<String>) -> Self {
        Self {
            requested_path: requested_path.into(),
            lookup_directory: lookup_directory.into(),
        }
    }
}

/// A located and loaded script, shebang already handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScript {
    /// The candidate that was opened, as it was opened
    pub path: String,
    pub source_text: String,
    pub dialect: ScriptDialect,
}

impl ResolvedScript {
    pub fn is_alternate_dialect(&self) -> bool {
        self.dialect.needs_transpile()
    }
}

/// Code ready for an execution sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedScript {
    pub path: String,
    pub dialect: ScriptDialect,
    pub code: String,
}

/// Loads scripts through a file system and submits them to execution sinks.
pub struct ScriptInjector<F = NativeFileSystem> {
    fs: F,
    context: Arc<ScriptContext>,
    logger: Arc<Logger>,
}

impl ScriptInjector<NativeFileSystem> {
    /// Injector over the host file system
    pub fn native(context: Arc<ScriptContext>, logger: Arc<Logger>) -> Self {
        Self::new(NativeFileSystem::new(), context, logger)
    }
}

impl<F: VirtualFileSystem> ScriptInjector<F> {
    pub fn new(fs: F, context: Arc<ScriptContext>, logger: Arc<Logger>) -> Self {
        Self {
            fs,
            context,
            logger,
        }
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Pick the candidate path for a request.
    ///
    /// `None` only for an empty requested path; no file system access then.
    pub fn select_candidate(&self, request: &ScriptRequest) -> Option<String> {
        if request.requested_path.is_empty() {
            return None;
        }

        let portable = to_portable(&request.requested_path);
        if self.fs.exists(Path::new(&portable)) {
            tracing::debug!(path = %portable, "script found relative to working directory");
            return Some(portable);
        }

        let fallback = format!("{}/{}", request.lookup_directory, portable);
        tracing::debug!(path = %fallback, "falling back to lookup directory");
        Some(fallback)
    }

    /// Locate and load a script, neutralizing a JavaScript shebang line.
    pub fn resolve(&self, request: &ScriptRequest) -> Result<ResolvedScript, InjectError> {
        let path = self
            .select_candidate(request)
            .ok_or(InjectError::EmptyPath)?;

        let bytes = self
            .fs
            .read_file(Path::new(&path))
            .map_err(|source| InjectError::Open {
                requested: request.requested_path.clone(),
                candidate: path.clone(),
                source,
            })?;

        let dialect = ScriptDialect::from_path(&path);
        let source_text = neutralize_shebang(String::from_utf8_lossy(&bytes).into_owned(), dialect);

        Ok(ResolvedScript {
            path,
            source_text,
            dialect,
        })
    }

    /// Resolve a script and convert it to executable code.
    pub fn prepare(&self, request: &ScriptRequest) -> Result<PreparedScript, InjectError> {
        let resolved = self.resolve(request)?;

        let code = if resolved.dialect.needs_transpile() {
            self.context
                .transpiler()
                .convert(&resolved.source_text)
                .map_err(|source| InjectError::Transpile {
                    path: resolved.path.clone(),
                    source,
                })?
        } else {
            resolved.source_text
        };

        Ok(PreparedScript {
            path: resolved.path,
            dialect: resolved.dialect,
            code,
        })
    }

    /// Load `requested_path` and submit it to `sink`.
    ///
    /// Returns `false` without touching the sink when the path is empty,
    /// when the selected file cannot be read, or when conversion fails;
    /// the last two also write a diagnostic.
    pub fn inject(
        &self,
        requested_path: &str,
        lookup_directory: &str,
        sink: &mut dyn ExecutionSink,
    ) -> bool {
        self.inject_request(&ScriptRequest::new(requested_path, lookup_directory), sink)
    }

    pub fn inject_request(&self, request: &ScriptRequest, sink: &mut dyn ExecutionSink) -> bool {
        match self.prepare(request) {
            Ok(script) => {
                tracing::debug!(path = %script.path, dialect = ?script.dialect, "submitting script");
                sink.evaluate(&script.code);
                true
            }
            Err(InjectError::EmptyPath) => false,
            Err(e @ InjectError::Open { .. }) => {
                warning!(self.logger, "{}", e);
                false
            }
            Err(e @ InjectError::Transpile { .. }) => {
                critical!(self.logger, "{}", e);
                false
            }
        }
    }
}
