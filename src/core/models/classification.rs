//! Classification model

use super::Severity;

/// A status together with the message reported alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Status level
    pub severity: Severity,
    /// Single-line message for the supervisor
    pub message: String,
}

impl Classification {
    /// Create a new classification
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// An `ok` classification
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Severity::Ok, message)
    }

    /// A `warning` classification
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// A `critical` classification
    #[must_use]
    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    /// Whether this classification is critical
    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}
