//! Phantom Script - script injection
//!
//! Loads a user script from disk and submits it to an execution sink:
//! - Path resolution (working directory first, then the lookup directory)
//! - Shebang neutralization for JavaScript
//! - CoffeeScript conversion through one lazily created transpiler
//! - Diagnostics through `phantom-log`
//!
//! For CLI convenience, this crate provides a global context and [`inject`].
//! For library use, build a [`ScriptInjector`] with an explicit [`ScriptContext`].

pub mod context;
pub mod dialect;
pub mod error;
pub mod injector;
pub mod sink;
pub mod transpiler;

pub use context::{get_or_create_transpiler, global, init, is_initialized, ScriptContext};
pub use dialect::{neutralize_shebang, to_portable, ScriptDialect};
pub use error::{InjectError, TranspileError};
pub use injector::{PreparedScript, ResolvedScript, ScriptInjector, ScriptRequest};
pub use sink::{ExecutionSink, RecordingSink, WriterSink};
pub use transpiler::{CommandTranspiler, PassthroughTranspiler, Transpiler, TranspilerSlot};

use phantom_log::Logger;
use std::sync::Arc;

/// Inject a script from the host file system using the global context.
///
/// Returns `true` only when code was handed to `sink`.
pub fn inject(
    requested_path: &str,
    lookup_directory: &str,
    sink: &mut dyn ExecutionSink,
    logger: Arc<Logger>,
) -> bool {
    ScriptInjector::native(global(), logger).inject(requested_path, lookup_directory, sink)
}
