//! tracing 事件桥接
//!
//! 把 `tracing` 事件转换成 [`Record`](crate::Record) 交给 [`Logger`]，
//! 使库内部的 tracing 输出与消息处理器使用同一种行格式。
//!
//! 级别映射：TRACE / DEBUG / INFO -> Debug，WARN -> Warning，ERROR -> Critical。
//! Fatal 只能通过 Logger 直接产生。

use crate::{Level, Logger};
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// tracing-subscriber 层：事件 -> Logger
pub struct TracingBridge {
    logger: Arc<Logger>,
}

impl TracingBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

/// tracing 级别 -> 消息处理器级别
pub fn map_level(level: &tracing::Level) -> Level {
    if *level == tracing::Level::ERROR {
        Level::Critical
    } else if *level == tracing::Level::WARN {
        Level::Warning
    } else {
        Level::Debug
    }
}

impl<S: Subscriber> Layer<S> for TracingBridge {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = map_level(metadata.level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logger.log(level, metadata.target(), visitor.finish());
    }
}

/// 收集 message 字段和其余键值对
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.join(" ")
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}
