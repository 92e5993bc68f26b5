//! Process-lifetime script context
//!
//! Owns the shared transpiler. Library users build a [`ScriptContext`] and
//! hand it to the injector; the CLI installs one process-wide instance.

use crate::transpiler::{Transpiler, TranspilerSlot};
use once_cell::sync::OnceCell;
use phantom_config::InjectorConfig;
use std::sync::Arc;

/// Shared state for script injection
#[derive(Debug)]
pub struct ScriptContext {
    transpiler: TranspilerSlot,
}

impl ScriptContext {
    pub fn new(transpiler: TranspilerSlot) -> Self {
        Self { transpiler }
    }

    /// Context whose transpiler follows the configured command
    pub fn from_config(config: &InjectorConfig) -> Self {
        Self::new(TranspilerSlot::from_config(&config.transpiler))
    }

    /// Context with an already created transpiler
    pub fn with_transpiler(transpiler: Arc<dyn Transpiler>) -> Self {
        Self::new(TranspilerSlot::with_instance(transpiler))
    }

    /// The shared transpiler, created on first use
    pub fn transpiler(&self) -> Arc<dyn Transpiler> {
        self.transpiler.get_or_create()
    }

    pub fn transpiler_created(&self) -> bool {
        self.transpiler.is_created()
    }
}

impl Default for ScriptContext {
    fn default() -> Self {
        Self::from_config(&InjectorConfig::default())
    }
}

// Global context singleton for CLI convenience
static GLOBAL_CONTEXT: OnceCell<Arc<ScriptContext>> = OnceCell::new();

/// Install the process-wide context.
///
/// Fails, handing the rejected context back, if one is already installed.
pub fn init(context: ScriptContext) -> Result<Arc<ScriptContext>, Arc<ScriptContext>> {
    let shared = Arc::new(context);
    GLOBAL_CONTEXT.set(Arc::clone(&shared)).map(|()| shared)
}

/// The process-wide context; a default one is installed on first call if none was
pub fn global() -> Arc<ScriptContext> {
    Arc::clone(GLOBAL_CONTEXT.get_or_init(|| Arc::new(ScriptContext::default())))
}

/// Check if the process-wide context is installed
pub fn is_initialized() -> bool {
    GLOBAL_CONTEXT.get().is_some()
}

/// The process-wide transpiler, created on first use
pub fn get_or_create_transpiler() -> Arc<dyn Transpiler> {
    global().transpiler()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranspileError;
    use crate::transpiler::PassthroughTranspiler;

    struct Shouting;

    impl Transpiler for Shouting {
        fn convert(&self, source: &str) -> Result<String, TranspileError> {
            Ok(source.to_uppercase())
        }
    }

    #[test]
    fn test_default_context_is_lazy() {
        let context = ScriptContext::default();
        assert!(!context.transpiler_created());
    }

    #[test]
    fn test_with_transpiler() {
        let context = ScriptContext::with_transpiler(Arc::new(Shouting));
        assert!(context.transpiler_created());
        assert_eq!(context.transpiler().convert("abc").unwrap(), "ABC");
    }

    #[test]
    fn test_from_config_empty_command() {
        let mut config = InjectorConfig::default();
        config.transpiler.command.clear();
        let context = ScriptContext::from_config(&config);
        assert_eq!(context.transpiler().convert("x = 1").unwrap(), "x = 1");
        assert!(context.transpiler_created());
    }

    #[test]
    fn test_global_context() {
        // global state can only be set once; this is the only test that sets it
        let installed = init(ScriptContext::with_transpiler(Arc::new(PassthroughTranspiler)));
        assert!(installed.is_ok());
        assert!(is_initialized());

        let first = get_or_create_transpiler();
        let second = get_or_create_transpiler();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&global(), &global()));

        let again = init(ScriptContext::default());
        assert!(again.is_err());
    }
}
