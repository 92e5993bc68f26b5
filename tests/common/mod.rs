//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数：临时脚本目录 + 本地文件系统注入器

#![allow(dead_code)]

use phantom_workspace::script::TranspileError;
use phantom_workspace::{
    Level, LogRingBuffer, Logger, NativeFileSystem, RecordingSink, ScriptContext, ScriptInjector,
    Transpiler,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// 把源码转成大写并计数的转换器
#[derive(Default)]
pub struct UpperCase {
    calls: AtomicUsize,
}

impl UpperCase {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transpiler for UpperCase {
    fn convert(&self, source: &str) -> Result<String, TranspileError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(source.to_uppercase())
    }
}

/// 临时脚本目录
pub struct Fixture {
    pub dir: TempDir,
    pub injector: ScriptInjector<NativeFileSystem>,
    pub transpiler: Arc<UpperCase>,
    pub ring: Arc<LogRingBuffer>,
}

impl Fixture {
    pub fn new() -> Self {
        let transpiler = Arc::new(UpperCase::default());
        let ring = LogRingBuffer::new(32);
        let logger = Logger::new(Level::Debug).with_sink(ring.clone());
        let context = Arc::new(ScriptContext::with_transpiler(transpiler.clone()));

        Fixture {
            dir: tempfile::tempdir().expect("create temp dir"),
            injector: ScriptInjector::native(context, logger),
            transpiler,
            ring,
        }
    }

    /// 写入脚本，返回绝对路径
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create script dir");
        }
        std::fs::write(&path, content).expect("write script");
        path
    }

    /// 查找目录（临时目录本身）
    pub fn lookup_dir(&self) -> String {
        path_str(self.dir.path())
    }

    /// 注入并返回 (是否成功, 提交记录)
    pub fn inject(&self, requested: &str, lookup_dir: &str) -> (bool, RecordingSink) {
        let mut sink = RecordingSink::new();
        let injected = self.injector.inject(requested, lookup_dir, &mut sink);
        (injected, sink)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.ring.messages_at(Level::Warning)
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_str().expect("temp path is UTF-8").to_string()
}
