//! 日志宏实现

/// 记录 Debug 级别日志
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)*)
    };
}

/// 记录 Warning 级别日志
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)*)
    };
}

/// 记录 Critical 级别日志
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)*)
    };
}

/// 记录 Fatal 级别日志，写入后终止进程
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)*)
    };
}

/// 内部使用的通用日志宏
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        // 惰性求值：先检查级别，只有启用时才格式化消息
        if $logger.is_enabled($level) {
            let message = ::std::format!($($arg)*);
            $logger.log($level, ::std::module_path!(), message);
        }
    }};
}
