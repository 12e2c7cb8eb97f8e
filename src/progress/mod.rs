//! Progress reporting for terminal output.
//!
//! Components never print directly; they receive a [`Reporter`]. The
//! binary uses [`TerminalReporter`], which writes colored lines to stderr so
//! stdout stays reserved for the version string. Tests and library callers
//! use [`MemoryReporter`] to inspect what would have been shown.

use std::io::{self, Write};
use std::sync::Mutex;

use colored::Colorize;

/// Kind of a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// A step is starting.
    Step,
    /// A step completed.
    Success,
    /// Recovered problem; the run continues.
    Warning,
    /// A step failed.
    Error,
}

/// Sink for human-readable progress.
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn step(&self, message: &str) {
        self.report(Level::Step, message);
    }

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn warn(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// Colored progress on stderr.
pub struct TerminalReporter {
    /// If false, all output is suppressed.
    enabled: bool,
}

impl TerminalReporter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn icon(level: Level) -> String {
        match level {
            Level::Step => "▸".cyan().bold().to_string(),
            Level::Success => "✔".green().bold().to_string(),
            Level::Warning => "⚠".yellow().bold().to_string(),
            Level::Error => "✖".red().bold().to_string(),
        }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, level: Level, message: &str) {
        if !self.enabled {
            return;
        }
        let text = match level {
            Level::Step => message.normal(),
            Level::Success => message.green(),
            Level::Warning => message.yellow(),
            Level::Error => message.red(),
        };
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "  {} {text}", Self::icon(level));
        let _ = handle.flush();
    }
}

/// Records every line in memory.
#[derive(Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Messages reported at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
