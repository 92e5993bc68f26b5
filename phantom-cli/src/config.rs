//! CLI 配置
//!
//! 读取可选的 JSON 配置文件，再叠加命令行参数。

use phantom_config::{LogLevel, PhantomConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置文件错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 读取配置；未指定文件时使用默认值
pub fn load(path: Option<&Path>) -> Result<PhantomConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(PhantomConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// 命令行中可覆盖配置文件的部分
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub lookup_dir: Option<String>,
    /// 空白分隔的命令行；空字符串表示不转换
    pub coffee_command: Option<String>,
    pub log_level: Option<LogLevel>,
}

impl Overrides {
    pub fn apply(&self, config: &mut PhantomConfig) {
        if let Some(dir) = &self.lookup_dir {
            config.injector.lookup_dir = dir.clone();
        }
        if let Some(command) = &self.coffee_command {
            config.injector.transpiler.command =
                command.split_whitespace().map(String::from).collect();
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

/// clap 参数解析器
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| {
        format!("unknown log level '{s}' (expected debug, warning, critical or fatal)")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_without_file() {
        assert_eq!(load(None).unwrap(), PhantomConfig::default());
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "injector": {{ "lookup_dir": "/srv/scripts", "transpiler": {{ "command": [] }} }} }}"#
        )
        .unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.injector.lookup_dir, "/srv/scripts");
        assert!(config.injector.transpiler.command.is_empty());
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ injector: ").unwrap();
        assert!(matches!(
            load(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = PhantomConfig::default();
        Overrides {
            lookup_dir: Some("lib".into()),
            coffee_command: Some("  npx coffee -cps ".into()),
            log_level: Some(LogLevel::Critical),
        }
        .apply(&mut config);

        assert_eq!(config.injector.lookup_dir, "lib");
        assert_eq!(config.injector.transpiler.command, ["npx", "coffee", "-cps"]);
        assert_eq!(config.logging.level, LogLevel::Critical);
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = PhantomConfig::default();
        Overrides::default().apply(&mut config);
        assert_eq!(config, PhantomConfig::default());
    }

    #[test]
    fn test_empty_coffee_command_disables_transpiler() {
        let mut config = PhantomConfig::default();
        Overrides {
            coffee_command: Some(String::new()),
            ..Default::default()
        }
        .apply(&mut config);
        assert!(config.injector.transpiler.command.is_empty());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("warn"), Ok(LogLevel::Warning));
        assert!(parse_log_level("chatty").unwrap_err().contains("chatty"));
    }
}
