//! 内置资源与用法说明
//!
//! 资源在编译时嵌入二进制文件，按名称查找。

use phantom_log::{fatal, Logger};
use std::io::{self, Write};

/// 用法说明的资源名称
pub const USAGE: &str = "usage.txt";

type Resource = (&'static str, &'static str);

static RESOURCES: &[Resource] = &[(USAGE, include_str!("usage.txt"))];

fn lookup(table: &[Resource], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, text)| *text)
}

/// 原样输出用法说明
pub fn show_usage(out: &mut dyn Write, logger: &Logger) -> io::Result<()> {
    print_from(RESOURCES, out, logger)
}

/// 资源缺失时写 Fatal 记录并终止进程
fn print_from(table: &[Resource], out: &mut dyn Write, logger: &Logger) -> io::Result<()> {
    match lookup(table, USAGE) {
        Some(text) => {
            out.write_all(text.as_bytes())?;
            out.flush()
        }
        None => {
            fatal!(logger, "Unable to print the usage message");
            Err(io::Error::new(io::ErrorKind::NotFound, USAGE))
        }
    }
}
