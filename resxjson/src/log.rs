//! The severity-tagged run log handed back to the embedding CLI.
//!
//! The converter never writes to a terminal. Every stage appends to a
//! [`ConverterLog`] threaded through the run, and the caller decides how to
//! render the accumulated messages once conversion finishes.

use std::fmt::{self, Display};

use serde::Serialize;

/// Severity of a single log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace,
    Info,
    Warning,
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Trace => "trace",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// One formatted message together with its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogItem {
    pub severity: Severity,
    pub message: String,
}

/// Ordered, append-only sequence of log items accumulated across a run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ConverterLog {
    items: Vec<LogItem>,
}

impl ConverterLog {
    pub fn new() -> Self {
        ConverterLog::default()
    }

    /// Append a message with the given severity.
    pub fn add(&mut self, severity: Severity, message: impl Into<String>) {
        self.items.push(LogItem {
            severity,
            message: message.into(),
        });
    }

    pub fn trace(&mut self, message: impl Into<String>) {
        self.add(Severity::Trace, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.add(Severity::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Severity::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Severity::Error, message);
    }

    pub fn items(&self) -> &[LogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if any item has [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.severity == Severity::Error)
    }

    /// Items of exactly the given severity, in log order.
    pub fn items_with_severity(&self, severity: Severity) -> impl Iterator<Item = &LogItem> {
        self.items
            .iter()
            .filter(move |item| item.severity == severity)
    }
}

impl<'a> IntoIterator for &'a ConverterLog {
    type Item = &'a LogItem;
    type IntoIter = std::slice::Iter<'a, LogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
