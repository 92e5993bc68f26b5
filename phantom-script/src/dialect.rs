//! Script dialects and source text normalization

use phantom_config::COFFEE_SCRIPT_EXTENSION;
use std::path::MAIN_SEPARATOR;

/// Language a script file is written in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScriptDialect {
    /// Executed as-is
    JavaScript,
    /// Converted to JavaScript before execution
    CoffeeScript,
}

impl ScriptDialect {
    /// Determine the dialect from the file name of the path being opened.
    ///
    /// Matching is case-sensitive: `app.COFFEE` is JavaScript.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(COFFEE_SCRIPT_EXTENSION) {
            ScriptDialect::CoffeeScript
        } else {
            ScriptDialect::JavaScript
        }
    }

    pub fn needs_transpile(self) -> bool {
        self == ScriptDialect::CoffeeScript
    }
}

/// Convert platform-native separators to `/`.
pub fn to_portable(path: &str) -> String {
    path.replace(MAIN_SEPARATOR, "/")
}

/// Turn a leading `#!` line into a JavaScript line comment.
///
/// CoffeeScript sources keep their shebang untouched.
pub fn neutralize_shebang(source: String, dialect: ScriptDialect) -> String {
    if dialect == ScriptDialect::JavaScript && source.starts_with("#!") {
        let mut commented = String::with_capacity(source.len() + 2);
        commented.push_str("//");
        commented.push_str(&source);
        commented
    } else {
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_path() {
        assert_eq!(ScriptDialect::from_path("a.js"), ScriptDialect::JavaScript);
        assert_eq!(
            ScriptDialect::from_path("lib/a.coffee"),
            ScriptDialect::CoffeeScript
        );
        assert_eq!(ScriptDialect::from_path("a.COFFEE"), ScriptDialect::JavaScript);
        assert_eq!(
            ScriptDialect::from_path("a.coffee.js"),
            ScriptDialect::JavaScript
        );
        assert_eq!(ScriptDialect::from_path(""), ScriptDialect::JavaScript);
    }

    #[test]
    fn test_needs_transpile() {
        assert!(ScriptDialect::CoffeeScript.needs_transpile());
        assert!(!ScriptDialect::JavaScript.needs_transpile());
    }

    #[test]
    fn test_to_portable_keeps_forward_slashes() {
        assert_eq!(to_portable("lib/sub/a.js"), "lib/sub/a.js");
        assert_eq!(to_portable("/abs/a.js"), "/abs/a.js");
    }

    #[test]
    fn test_to_portable_native_separator() {
        let native = format!("lib{MAIN_SEPARATOR}a.js");
        assert_eq!(to_portable(&native), "lib/a.js");
    }

    #[test]
    fn test_shebang_commented_for_javascript() {
        let src = String::from("#!/usr/bin/env phantomjs\nconsole.log(1);\n");
        assert_eq!(
            neutralize_shebang(src, ScriptDialect::JavaScript),
            "//#!/usr/bin/env phantomjs\nconsole.log(1);\n"
        );
    }

    #[test]
    fn test_shebang_untouched_for_coffeescript() {
        let src = String::from("#!/usr/bin/env phantomjs\nconsole.log 1\n");
        assert_eq!(
            neutralize_shebang(src.clone(), ScriptDialect::CoffeeScript),
            src
        );
    }

    #[test]
    fn test_no_shebang_unchanged() {
        let src = String::from("// #! not at start\n");
        assert_eq!(
            neutralize_shebang(src.clone(), ScriptDialect::JavaScript),
            src
        );
        assert_eq!(neutralize_shebang(String::from("#"), ScriptDialect::JavaScript), "#");
    }
}
