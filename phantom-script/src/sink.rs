//! Execution sinks: where prepared script text goes

use std::io::Write;

/// Accepts code and runs it in some page context.
///
/// Nothing is reported back; execution may happen later.
pub trait ExecutionSink {
    fn evaluate(&mut self, code: &str);
}

impl<S: ExecutionSink + ?Sized> ExecutionSink for &mut S {
    fn evaluate(&mut self, code: &str) {
        (**self).evaluate(code)
    }
}

/// Writes every submission to a writer, each followed by a newline
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ExecutionSink for WriterSink<W> {
    fn evaluate(&mut self, code: &str) {
        let written = writeln!(self.writer, "{code}").and_then(|()| self.writer.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "execution sink write failed");
        }
    }
}

/// Keeps every submission in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    submissions: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> &[String] {
        &self.submissions
    }

    pub fn last(&self) -> Option<&str> {
        self.submissions.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

impl ExecutionSink for RecordingSink {
    fn evaluate(&mut self, code: &str) {
        self.submissions.push(code.to_string());
    }
}
