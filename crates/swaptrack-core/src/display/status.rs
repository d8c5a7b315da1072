//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::error::{ErrorKind, TrackerError};

/// Severity of an operation status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    /// Non-fatal problem; other operations are unaffected
    Warning,
    Error,
}

/// Wrapper type for displaying operation confirmation messages and the
/// user-facing form of errors caught at the action boundary.
pub struct OperationStatus {
    pub message: String,
    pub severity: Severity,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Create a new warning banner.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Converts an error into the message shown to the user.
    ///
    /// Advisor failures become warnings; storage failures get a generic
    /// retry hint since the displayed data was not rolled back.
    pub fn from_error(error: &TrackerError) -> Self {
        match error.kind() {
            ErrorKind::AdvisorUnavailable => Self::warning(error.to_string()),
            ErrorKind::StorageUnavailable => {
                Self::failure(format!("{error}. Sync operation aborted, please retry."))
            }
            ErrorKind::Validation | ErrorKind::NotFound | ErrorKind::Authentication => {
                Self::failure(error.to_string())
            }
        }
    }

    /// Whether this status represents a failed operation.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Success => "Success:",
            Severity::Warning => "Warning:",
            Severity::Error => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
