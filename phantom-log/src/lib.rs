//! phantom-log - 消息处理器
//!
//! 命令行工具的日志系统，特点：
//! - **显式传递**：无全局logger，`Arc<Logger>` 通过参数传入
//! - **级别查表**：每个级别对应（输出流，是否终止）
//! - **固定行格式**：`2011-03-14T09:26:53 [WARNING] message`
//! - **FATAL 终止**：写入所有 sink 后终止进程
//!
//! | 级别 | 输出流 | 终止进程 |
//! |------|--------|----------|
//! | Debug | stdout | 否 |
//! | Warning | stderr | 否 |
//! | Critical | stderr | 否 |
//! | Fatal | stderr | 是 |
//!
//! # 快速开始
//!
//! ```
//! use phantom_log::{LogConfig, warning};
//!
//! let (logger, ring) = LogConfig::test().with_ring_buffer(16).init();
//! warning!(logger, "Can't open '{}'", "missing.js");
//! ```
//!
//! # tracing 集成
//!
//! 启用 `tracing-bridge` feature（默认）后，[`TracingBridge`] 可作为
//! `tracing_subscriber` 的一层，把库内部的 tracing 事件写入同一个 Logger。

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

#[cfg(feature = "tracing-bridge")]
mod bridge;

pub use record::{Disposition, Level, Record, Stream};

// 宏通过 #[macro_export] 自动导出到 crate 根：
// debug!, warning!, critical!, fatal!, log!

pub use config::{LogConfig, OutputConfig};
pub use logger::{ConsoleSink, LogSink, Logger, Terminator};
pub use ring_buffer::LogRingBuffer;

#[cfg(feature = "tracing-bridge")]
pub use bridge::{map_level, TracingBridge};

/// 日志结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// 日志系统错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 无法识别的级别名称
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),
}

/// 从名称解析级别（不区分大小写）
pub fn parse_level(name: &str) -> Result<Level> {
    phantom_config::LogLevel::parse(name)
        .map(Level::from)
        .ok_or_else(|| Error::UnknownLevel(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), Level::Debug);
        assert_eq!(parse_level("WARNING").unwrap(), Level::Warning);
        assert_eq!(parse_level("fatal").unwrap(), Level::Fatal);
        assert!(matches!(parse_level("loud"), Err(Error::UnknownLevel(s)) if s == "loud"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", Error::UnknownLevel("x".into())),
            "Unknown log level: x"
        );
    }
}
