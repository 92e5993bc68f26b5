//! 日志器实现

use crate::record::{Level, Record, Stream};
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// 日志输出目标trait
pub trait LogSink: Send + Sync {
    /// 写入日志记录
    fn write(&self, record: &Record);
}

/// FATAL 记录写入后调用的终止函数
pub type Terminator = fn() -> !;

fn abort_process() -> ! {
    std::process::abort()
}

/// 日志器配置和状态
pub struct Logger {
    /// 当前日志级别（原子存储）
    level: AtomicU8,
    /// 输出目标列表
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
    /// FATAL 之后执行
    terminator: Terminator,
}

impl Logger {
    /// 创建新的日志器（FATAL 时 abort）
    pub fn new(level: Level) -> Arc<Self> {
        Self::with_terminator(level, abort_process)
    }

    /// 创建使用自定义终止函数的日志器
    pub fn with_terminator(level: Level, terminator: Terminator) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
            terminator,
        })
    }

    /// 添加输出目标
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// 添加 sink（用于 config）
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        let mut sinks = self.sinks.lock().unwrap_or_else(PoisonError::into_inner);
        sinks.push(Box::new(sink));
    }

    /// 动态设置日志级别
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// 获取当前日志级别
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Debug)
    }

    /// 检查指定级别是否启用（Fatal 永远启用）
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// 记录日志
    ///
    /// 级别的处理方式要求终止时，所有 sink 写完后调用终止函数，不会返回。
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        self.dispatch(&record);

        if level.disposition().terminates {
            (self.terminator)();
        }
    }

    fn dispatch(&self, record: &Record) {
        let sinks = self.sinks.lock().unwrap_or_else(PoisonError::into_inner);
        for sink in sinks.iter() {
            sink.write(record);
        }
    }

    /// 创建无 sink 的日志器（仍会在 FATAL 时终止）
    pub fn noop() -> Arc<Self> {
        Self::new(Level::Fatal)
    }
}

// 为Arc<Logger>实现LogSink，支持链式日志器
impl LogSink for Arc<Logger> {
    fn write(&self, record: &Record) {
        if self.is_enabled(record.level) {
            self.dispatch(record);
        }
    }
}

/// 控制台 sink：按级别查表选择 stdout 或 stderr
pub struct ConsoleSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// 写到进程的 stdout / stderr
    pub fn new() -> Self {
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// 写到指定的两个 writer（测试用）
    pub fn with_writers(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>) -> Self {
        ConsoleSink {
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, record: &Record) {
        let stream = match record.level.disposition().stream {
            Stream::Stdout => &self.out,
            Stream::Stderr => &self.err,
        };
        let mut writer = stream.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{}", record.format());
        let _ = writer.flush();
    }
}
