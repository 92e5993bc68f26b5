//! Phantom - script injection for a headless page host
//!
//! Loads a user script, converts CoffeeScript when needed and hands the
//! resulting code to an execution sink. Diagnostics go through a small
//! message handler with a fixed line format.
//!
//! # Architecture
//!
//! ```text
//! phantom-config  - Pure configuration data (serde)
//! phantom-log     - Message handler: levels, dispositions, sinks
//! phantom-vfs     - Read-only file system abstraction
//! phantom-script  - Path resolution, dialects, transpiler, sinks
//! phantom-cli     - `phantom` binary
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use phantom_workspace::{LogConfig, RecordingSink, ScriptContext, ScriptInjector};
//! use std::sync::Arc;
//!
//! let (logger, _) = LogConfig::console().init();
//! let injector = ScriptInjector::native(Arc::new(ScriptContext::default()), logger);
//!
//! let mut sink = RecordingSink::new();
//! if injector.inject("hello.coffee", "scripts", &mut sink) {
//!     println!("{}", sink.last().unwrap_or_default());
//! }
//! ```

pub use phantom_config as config;
pub use phantom_log as log;
pub use phantom_script as script;
pub use phantom_vfs as vfs;

pub use phantom_config::{InjectorConfig, LogLevel, LoggingConfig, PhantomConfig};
pub use phantom_log::{Level, LogConfig, LogRingBuffer, Logger};
pub use phantom_script::{
    ExecutionSink, InjectError, RecordingSink, ScriptContext, ScriptDialect, ScriptInjector,
    Transpiler, WriterSink,
};
pub use phantom_vfs::{MemoryFileSystem, NativeFileSystem, VirtualFileSystem};
