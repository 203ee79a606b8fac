//! Check configuration
//!
//! The API key lives in a small INI-style file, `config.cfg` in the working
//! directory by default:
//!
//! ```ini
//! [Credentials]
//! Apikey = DEMO_KEY
//! ```
//!
//! Section and key names are case-insensitive and the value may be quoted.
//! `api_key` is accepted as a key name too.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Config file used when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config.cfg";

const CREDENTIALS_SECTION: &str = "credentials";
const API_KEY_NAMES: [&str; 2] = ["apikey", "api_key"];

/// Errors that can occur when loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The file is not valid INI
    #[error("{0}")]
    Parse(#[from] ini::ParseError),

    /// No API key was set
    #[error("missing Credentials.Apikey")]
    MissingApiKey,
}

/// Parsed config file
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Feed credentials
    pub credentials: Credentials,
}

/// The `[Credentials]` section
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Key passed to the feed as `api_key`
    pub api_key: String,
}

impl CheckConfig {
    /// Load and validate the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate config file contents
    ///
    /// If the key appears more than once, the last value wins.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content)?;

        let api_key = ini
            .iter()
            .filter(|(section, _)| {
                section.is_some_and(|name| name.trim().eq_ignore_ascii_case(CREDENTIALS_SECTION))
            })
            .flat_map(|(_, properties)| properties.iter())
            .filter(|(key, _)| {
                API_KEY_NAMES.iter().any(|name| key.trim().eq_ignore_ascii_case(name))
            })
            .map(|(_, value)| unquote(value))
            .last()
            .unwrap_or_default();

        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            credentials: Credentials { api_key },
        })
    }

    /// The configured API key
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }
}

/// Strip one layer of double quotes, or a trailing `;`/`#` comment from a bare value
fn unquote(value: &str) -> String {
    let value = value.trim();
    if let Some(inner) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return inner.trim().to_string();
    }
    value.find([';', '#']).map_or(value, |end| &value[..end]).trim().to_string()
}
