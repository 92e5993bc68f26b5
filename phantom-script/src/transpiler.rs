//! Alternate dialect transpilers and the lazily created shared instance

use crate::error::TranspileError;
use once_cell::sync::OnceCell;
use phantom_config::TranspilerConfig;
use std::fmt;
use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;

/// Converts CoffeeScript source into JavaScript
pub trait Transpiler: Send + Sync {
    fn convert(&self, source: &str) -> Result<String, TranspileError>;
}

/// Returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranspiler;

impl Transpiler for PassthroughTranspiler {
    fn convert(&self, source: &str) -> Result<String, TranspileError> {
        Ok(source.to_string())
    }
}

/// Runs an external compiler: source on stdin, JavaScript on stdout
#[derive(Debug, Clone)]
pub struct CommandTranspiler {
    program: String,
    args: Vec<String>,
}

impl CommandTranspiler {
    pub fn new<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a full command line (`[program, args...]`)
    pub fn from_command_line(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Transpiler for CommandTranspiler {
    fn convert(&self, source: &str) -> Result<String, TranspileError> {
        tracing::debug!(program = %self.program, bytes = source.len(), "running transpiler");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| TranspileError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // stdin is written on its own thread while stdout and stderr drain here
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => match stdin.write_all(source.as_bytes()) {
                    // exited without reading; the exit status tells the rest
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
                    other => other,
                },
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output.map_err(|source| TranspileError::Io {
            program: self.program.clone(),
            source,
        })?;
        written.map_err(|source| TranspileError::Io {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(TranspileError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

type Factory = Box<dyn Fn() -> Arc<dyn Transpiler> + Send + Sync>;

/// Holds one transpiler, created by its factory on first use and shared afterwards.
///
/// Creation goes through a `OnceCell`, so concurrent first calls still
/// produce exactly one instance.
pub struct TranspilerSlot {
    cell: OnceCell<Arc<dyn Transpiler>>,
    factory: Factory,
}

impl TranspilerSlot {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Transpiler> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// A slot that already holds `transpiler`
    pub fn with_instance(transpiler: Arc<dyn Transpiler>) -> Self {
        let shared = Arc::clone(&transpiler);
        Self {
            cell: OnceCell::with_value(transpiler),
            factory: Box::new(move || Arc::clone(&shared)),
        }
    }

    /// Slot whose factory follows the configured command line.
    ///
    /// An empty command yields a passthrough transpiler.
    pub fn from_config(config: &TranspilerConfig) -> Self {
        let command = config.command.clone();
        Self::new(move || match CommandTranspiler::from_command_line(&command) {
            Some(transpiler) => Arc::new(transpiler) as Arc<dyn Transpiler>,
            None => Arc::new(PassthroughTranspiler) as Arc<dyn Transpiler>,
        })
    }

    /// The shared transpiler, created on first call
    pub fn get_or_create(&self) -> Arc<dyn Transpiler> {
        Arc::clone(self.cell.get_or_init(|| {
            tracing::debug!("creating transpiler instance");
            (self.factory)()
        }))
    }

    pub fn is_created(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for TranspilerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranspilerSlot")
            .field("created", &self.is_created())
            .finish()
    }
}
