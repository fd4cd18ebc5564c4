//! Findings produced by the sync engine.
//!
//! Nothing is thrown across an operation boundary during diagnostics:
//! every detected problem accumulates as a [`Finding`] and the command
//! layer renders them. Warnings never block; errors mark per-field
//! failures that the operation skips past.

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Drift worth reporting; never blocks.
    Warning,
    /// A per-field failure; the operation continues with remaining fields.
    Error,
}

/// One reportable problem detected by a sync operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    /// Create a warning-level finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Create an error-level finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Whether this finding is error-level.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
