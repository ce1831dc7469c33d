//! Error and warning collection for batch operations

use std::fmt;
use tracing::{error, warn};

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation did not do what was asked
    Error,
    /// Worth reporting, but the result is usable
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("ERROR"),
            Self::Warning => f.write_str("WARNING"),
        }
    }
}

/// A single reported problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
}

/// Ordered list of problems reported while processing many inputs
///
/// Collaborators that must keep going after one input fails record the
/// failure here instead of returning it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("{}", message);
        self.messages.push(Diagnostic {
            severity: Severity::Error,
            message,
        });
    }

    /// Record a warning
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.messages.push(Diagnostic {
            severity: Severity::Warning,
            message,
        });
    }

    /// Append everything recorded in `other`
    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
    }

    /// Whether any error was recorded
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }

    /// Everything recorded, in order
    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render a failure summary: `message` followed by one indented line per
    /// diagnostic
    pub fn format_failures(&self, message: &str) -> String {
        let mut report = message.to_string();
        for diagnostic in &self.messages {
            report.push_str(&format!("\n  - {}: {}", diagnostic.severity, diagnostic.message));
        }
        report
    }
}
