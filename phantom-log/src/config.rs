//! 日志配置
//!
//! 提供便捷的日志初始化配置。

use crate::{ConsoleSink, Level, LogRingBuffer, Logger};
use std::sync::Arc;

/// 日志输出目标配置
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// 按级别输出到 stdout / stderr
    Console,
    /// 输出到环形缓冲区（容量）
    RingBuffer(usize),
}

/// 日志配置
///
/// 用于一键初始化日志系统
///
/// # 示例
///
/// ```
/// use phantom_log::{LogConfig, Level};
///
/// let config = LogConfig::new(Level::Debug)
///     .with_ring_buffer(10000);
///
/// let (logger, ring) = config.init();
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// 日志级别
    pub level: Level,
    /// 输出目标列表
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// 创建默认配置（无输出）
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// 命令行推荐配置
    ///
    /// - Debug 级别
    /// - 输出到控制台
    pub fn console() -> Self {
        LogConfig::new(Level::Debug).with_console()
    }

    /// 测试环境配置（静默）
    ///
    /// - Critical 级别
    /// - 无输出
    pub fn test() -> Self {
        LogConfig::new(Level::Critical)
    }

    /// 添加控制台输出
    pub fn with_console(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Console) {
            self.outputs.push(OutputConfig::Console);
        }
        self
    }

    /// 添加环形缓冲区输出
    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// 初始化日志系统
    ///
    /// 返回 (logger, Option<ring_buffer>)
    /// 如果配置了环形缓冲区，会返回最后一个
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer: Option<Arc<LogRingBuffer>> = None;

        for output in self.outputs {
            match output {
                OutputConfig::Console => {
                    logger.add_sink(ConsoleSink::new());
                }
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}

impl From<&phantom_config::LoggingConfig> for LogConfig {
    fn from(config: &phantom_config::LoggingConfig) -> Self {
        LogConfig::new(config.level.into()).with_console()
    }
}
