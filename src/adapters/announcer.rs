use crate::domain::ports::Announcer;
use std::io::{self, Write};

/// Writes every announcement as a line on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutAnnouncer;

impl StdoutAnnouncer {
    pub fn new() -> Self {
        Self
    }
}

impl Announcer for StdoutAnnouncer {
    fn announce(&self, line: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        // A closed stdout must not turn a device call into a failure.
        if let Err(e) = writeln!(handle, "{}", line) {
            tracing::warn!("Failed to write announcement to stdout: {}", e);
        }
    }
}
