//! Check status levels
//!
//! The three states a Sensu/Nagios style supervisor understands.

use serde::Serialize;

/// Status reported to the monitoring supervisor
///
/// Variants are ordered by how bad they are, so the worst of several
/// statuses is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing to report
    #[default]
    Ok,
    /// The check could not get a clean answer from the feed
    Warning,
    /// A hazardous object was found, or the check itself is misconfigured
    Critical,
}

impl Severity {
    /// Process exit code for this status
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
        }
    }

    /// Lowercase name, as used in JSON output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
