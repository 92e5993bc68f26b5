//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示。

use std::error::Error;
use std::fmt::Write as _;

/// 把错误及其来源链格式化为多行文本
pub fn format_error_chain(e: &dyn Error) -> String {
    let mut text = format!("Error: {e}");
    let mut source = e.source();
    while let Some(cause) = source {
        let _ = write!(text, "\n  caused by: {cause}");
        source = cause.source();
    }
    text
}

/// 打印错误及其来源链到 stderr
pub fn print_error(e: &dyn Error) {
    eprintln!("{}", format_error_chain(e));
}
