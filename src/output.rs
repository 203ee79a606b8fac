//! Status output for human and JSON modes
//!
//! The supervisor reads one line from stdout and the exit code. Human mode
//! prints the bare message; JSON mode wraps status and message in an object.

use serde::Serialize;

use crate::core::models::{Classification, Severity};
use crate::core::services::ScanReport;
use crate::error::CheckError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Final result of a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Status level
    pub status: Severity,
    /// Message for the supervisor
    pub message: String,
}

impl CheckResult {
    /// Create a result
    #[must_use]
    pub fn new(status: Severity, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Result for an error that ended the run
    #[must_use]
    pub fn from_error(err: &CheckError) -> Self {
        Self::new(err.severity(), err.to_string())
    }

    /// Exit code the process should end with
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }

    /// Format the result as a single line
    ///
    /// Supervisors only read the first line, so a multi-line message is
    /// joined with `"; "` in human mode.
    #[must_use]
    pub fn to_line(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Human => self
                .message
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
            OutputMode::Json => serde_json::to_string(self).unwrap_or_default(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        println!("{}", self.to_line(mode));
    }
}

impl From<Classification> for CheckResult {
    fn from(classification: Classification) -> Self {
        Self::new(classification.severity, classification.message)
    }
}

impl From<ScanReport> for CheckResult {
    fn from(report: ScanReport) -> Self {
        report.classification.into()
    }
}

impl From<Result<ScanReport, CheckError>> for CheckResult {
    fn from(outcome: Result<ScanReport, CheckError>) -> Self {
        match outcome {
            Ok(report) => report.into(),
            Err(e) => Self::from_error(&e),
        }
    }
}
