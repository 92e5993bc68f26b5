//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber`：库内部的 tracing 事件经 [`TracingBridge`]
//! 写入消息处理器，与诊断信息使用同一种行格式。

use phantom_log::{Logger, TracingBridge};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 控制 tracing 事件过滤的环境变量，语法同 `RUST_LOG`
pub const FILTER_ENV: &str = "PHANTOM_LOG";

/// 未设置环境变量时的过滤规则：只转发警告和错误，stdout 保持干净
pub const DEFAULT_FILTER: &str = "warn";

/// 构建过滤器：环境变量优先，无效或缺失时用默认值
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// 安装全局 subscriber；已安装时返回 false
pub fn init(logger: Arc<Logger>) -> bool {
    let directives = std::env::var(FILTER_ENV).ok();
    tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(TracingBridge::new(logger))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use phantom_log::{Level, LogRingBuffer};

    #[test]
    fn test_default_filter_drops_debug() {
        let ring = LogRingBuffer::new(8);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());
        let subscriber = tracing_subscriber::registry()
            .with(filter_from(None))
            .with(TracingBridge::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("resolving");
            tracing::warn!("sink write failed");
        });

        assert_eq!(ring.messages_at(Level::Debug), Vec::<String>::new());
        assert_eq!(ring.messages_at(Level::Warning), vec!["sink write failed"]);
    }

    #[test]
    fn test_custom_filter() {
        let ring = LogRingBuffer::new(8);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());
        let subscriber = tracing_subscriber::registry()
            .with(filter_from(Some("debug")))
            .with(TracingBridge::new(logger));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("resolving");
        });

        assert_eq!(ring.messages_at(Level::Debug), vec!["resolving"]);
    }
}
