//! 日志专用环形缓冲区

use crate::logger::LogSink;
use crate::record::{Level, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 日志环形缓冲区
///
/// 当缓冲区满时，新记录会覆盖最旧的记录（FIFO）
pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
}

impl LogRingBuffer {
    /// 创建新的环形缓冲区
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        })
    }

    fn records(&self) -> MutexGuard<'_, VecDeque<Record>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 写入记录（满了则覆盖旧数据）
    fn push(&self, record: Record) {
        let mut inner = self.records();
        if inner.len() >= self.capacity {
            inner.pop_front();
        }
        inner.push_back(record);
    }

    /// 获取当前所有记录（按时间顺序）
    pub fn dump_records(&self) -> Vec<Record> {
        self.records().iter().cloned().collect()
    }

    /// 获取指定级别的消息
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    /// 获取当前记录数
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for LogRingBuffer {
    fn write(&self, record: &Record) {
        if self.capacity > 0 {
            self.push(record.clone());
        }
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        LogSink::write(self.as_ref(), record);
    }
}
