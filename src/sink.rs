use std::io::Write;

/// Line-oriented text sink receiving step diagnostics and child output.
///
/// `Send` is required because the process runner pumps stdout and stderr
/// from reader threads.
pub trait LogSink: Send {
    fn line(&mut self, text: &str);
}

/// Adapts any writer into a sink. Lines are flushed as they arrive so the
/// collaborator sees output while the child is still running.
pub struct WriteSink<W: Write + Send>(pub W);

impl<W: Write + Send> LogSink for WriteSink<W> {
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.0, "{text}");
        let _ = self.0.flush();
    }
}

/// Collects lines in memory. Used by tests and embedding hosts that want
/// the log after the fact.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl LogSink for MemorySink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
