//! Output sinks for result lines.

use std::io::Write;
use std::sync::Mutex;

/// Destination for result lines, shared by every worker.
///
/// Implementations must write each line as a unit so lines from concurrent
/// workers never interleave.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str) -> std::io::Result<()>;
}

/// Writes each line to stdout with a single `write_all` under the stdout lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(buf.as_bytes())?;
        handle.flush()
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far, in write order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, line: &str) -> std::io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
        Ok(())
    }
}
