//! Reporter that keeps messages in memory.

use std::sync::{Arc, Mutex};

use patternsmith_core::application::ports::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warn,
    Error,
}

/// Collects reported messages for later inspection.
///
/// Clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferedReporter {
    messages: Arc<Mutex<Vec<(ReportLevel, String)>>>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(ReportLevel, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Messages reported at `level`, in order.
    pub fn at(&self, level: ReportLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: ReportLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl Reporter for BufferedReporter {
    fn info(&self, message: &str) {
        self.push(ReportLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(ReportLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(ReportLevel::Error, message);
    }
}
