//! 日志记录与级别定义

use chrono::{DateTime, Local};
use core::fmt;

/// 日志级别
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// 调试信息
    Debug = 0,
    /// 警告
    Warning = 1,
    /// 严重错误（进程继续）
    Critical = 2,
    /// 致命错误（写入后终止进程）
    Fatal = 3,
}

/// 输出流
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// 级别对应的处理方式：写到哪个流，写完是否终止进程
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disposition {
    pub stream: Stream,
    pub terminates: bool,
}

/// 级别 -> 处理方式 查找表（按 `Level as usize` 索引）
const DISPOSITIONS: [Disposition; 4] = [
    // Debug
    Disposition {
        stream: Stream::Stdout,
        terminates: false,
    },
    // Warning
    Disposition {
        stream: Stream::Stderr,
        terminates: false,
    },
    // Critical
    Disposition {
        stream: Stream::Stderr,
        terminates: false,
    },
    // Fatal
    Disposition {
        stream: Stream::Stderr,
        terminates: true,
    },
];

impl Level {
    /// 所有级别（从低到高）
    pub const ALL: [Level; 4] = [Level::Debug, Level::Warning, Level::Critical, Level::Fatal];

    /// 将级别转换为标签字符串
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Warning => "WARNING",
            Level::Critical => "CRITICAL",
            Level::Fatal => "FATAL",
        }
    }

    /// 从u8解析级别
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Debug),
            1 => Some(Level::Warning),
            2 => Some(Level::Critical),
            3 => Some(Level::Fatal),
            _ => None,
        }
    }

    /// 查表获取处理方式
    pub const fn disposition(self) -> Disposition {
        DISPOSITIONS[self as usize]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<phantom_config::LogLevel> for Level {
    fn from(level: phantom_config::LogLevel) -> Self {
        use phantom_config::LogLevel;
        match level {
            LogLevel::Debug => Level::Debug,
            LogLevel::Warning => Level::Warning,
            LogLevel::Critical => Level::Critical,
            LogLevel::Fatal => Level::Fatal,
        }
    }
}

/// 单条日志记录
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// 本地时间
    pub timestamp: DateTime<Local>,
    /// 日志级别
    pub level: Level,
    /// 模块路径（编译期确定）
    pub target: &'static str,
    /// 格式化后的消息
    pub message: String,
}

impl Record {
    /// 创建新记录（时间戳取当前本地时间）
    pub fn new(level: Level, target: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            target,
            message: message.into(),
        }
    }

    /// 替换时间戳
    pub fn at(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// 格式化为 `<ISO 时间> [<级别>] <消息>`
    pub fn format(&self) -> String {
        format!(
            "{} [{}] {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            self.level,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Warning);
        assert!(Level::Warning < Level::Critical);
        assert!(Level::Critical < Level::Fatal);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(Level::from_u8(0), Some(Level::Debug));
        assert_eq!(Level::from_u8(3), Some(Level::Fatal));
        assert_eq!(Level::from_u8(4), None);
    }

    #[test]
    fn test_disposition_table() {
        assert_eq!(
            Level::Debug.disposition(),
            Disposition {
                stream: Stream::Stdout,
                terminates: false
            }
        );
        assert_eq!(Level::Warning.disposition().stream, Stream::Stderr);
        assert_eq!(Level::Critical.disposition().stream, Stream::Stderr);

        let fatal = Level::Fatal.disposition();
        assert_eq!(fatal.stream, Stream::Stderr);
        assert!(fatal.terminates);

        // 只有 Fatal 终止进程
        let terminating: Vec<Level> = Level::ALL
            .iter()
            .copied()
            .filter(|l| l.disposition().terminates)
            .collect();
        assert_eq!(terminating, vec![Level::Fatal]);
    }

    #[test]
    fn test_from_config_level() {
        use phantom_config::LogLevel;
        assert_eq!(Level::from(LogLevel::Debug), Level::Debug);
        assert_eq!(Level::from(LogLevel::Warning), Level::Warning);
        assert_eq!(Level::from(LogLevel::Critical), Level::Critical);
        assert_eq!(Level::from(LogLevel::Fatal), Level::Fatal);
    }

    #[test]
    fn test_record_creation() {
        let record = Record::new(Level::Warning, "phantom::script", "test message");
        assert_eq!(record.level, Level::Warning);
        assert_eq!(record.target, "phantom::script");
        assert_eq!(record.message, "test message");
    }

    #[test]
    fn test_record_format() {
        let ts = Local.with_ymd_and_hms(2011, 3, 14, 9, 26, 53).unwrap();
        let record = Record::new(Level::Critical, "test", "page crashed").at(ts);

        assert_eq!(record.format(), "2011-03-14T09:26:53 [CRITICAL] page crashed");
    }

    #[test]
    fn test_record_format_tags() {
        let ts = Local.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        for level in Level::ALL {
            let line = Record::new(level, "test", "m").at(ts).format();
            assert_eq!(line, format!("2020-01-02T03:04:05 [{}] m", level.as_str()));
        }
    }
}
