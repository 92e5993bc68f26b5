//! Phantom Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Phantom crates.

use serde::Deserialize;

/// File name suffix of the alternate script dialect (CoffeeScript)
pub const COFFEE_SCRIPT_EXTENSION: &str = ".coffee";

/// Default transpiler invocation: compile stdin, print JavaScript to stdout
pub const DEFAULT_COFFEE_COMMAND: [&str; 4] = ["coffee", "--compile", "--print", "--stdio"];

/// Top-level configuration, usually read from a JSON file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhantomConfig {
    /// Script injection settings
    pub injector: InjectorConfig,
    /// Message handler settings
    pub logging: LoggingConfig,
}

/// Configuration for script injection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InjectorConfig {
    /// Fallback directory searched when a script is not found in the working directory
    pub lookup_dir: String,
    /// Alternate dialect transpiler
    pub transpiler: TranspilerConfig,
}

/// How the alternate dialect gets converted
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TranspilerConfig {
    /// External compiler command line; empty means pass sources through unchanged
    pub command: Vec<String>,
}

/// Minimum severity the message handler writes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Debug,
    Warning,
    Critical,
    Fatal,
}

impl LogLevel {
    /// Parse a level name, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "warning" | "warn" => Some(LogLevel::Warning),
            "critical" => Some(LogLevel::Critical),
            "fatal" => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Warning => "warning",
            LogLevel::Critical => "critical",
            LogLevel::Fatal => "fatal",
        }
    }
}

/// Configuration for the message handler
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum severity that gets written
    pub level: LogLevel,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            lookup_dir: String::from("."),
            transpiler: TranspilerConfig::default(),
        }
    }
}

impl Default for TranspilerConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_COFFEE_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }
}
