//! Check error types
//!
//! Every failure the check can hit maps to exactly one status. Configuration
//! problems are critical because they stop the check from saying anything
//! useful at all; trouble reaching or reading the feed is a warning.

use thiserror::Error;

use crate::config::ConfigError;
use crate::core::models::Severity;

/// Errors that end a check run early
#[derive(Debug, Error)]
pub enum CheckError {
    /// The config file could not be read or parsed
    #[error("Failed to parse config data: {0}")]
    Config(#[from] ConfigError),

    /// The feed endpoint is not a usable URL
    #[error("Invalid feed endpoint: {0}")]
    Endpoint(String),

    /// The request never got a response
    #[error("Error: {0}")]
    Network(String),

    /// The feed answered with something other than 200 OK
    #[error("Error: unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("Error reading body: {0}")]
    Body(String),

    /// The body is not a feed response
    #[error("Error decoding JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CheckError {
    /// Status this error is reported as
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Config(_) | Self::Endpoint(_) => Severity::Critical,
            Self::Network(_) | Self::Status(_) | Self::Body(_) | Self::Decode(_) => {
                Severity::Warning
            },
        }
    }
}
