//! Asteroid model
//!
//! One near-Earth object record from the feed. Only the fields the check
//! looks at are kept; everything else in the record is ignored on decode.

use serde::{Deserialize, Serialize};

/// A near-Earth object
///
/// Missing fields decode to their empty values, so a sparse record is
/// treated as a harmless, unnamed object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Asteroid {
    /// Object designation, e.g. "(2024 AB1)"
    pub name: String,
    /// JPL small-body database page for the object
    pub nasa_jpl_url: String,
    /// Whether the feed flags the object as potentially hazardous
    pub is_potentially_hazardous_asteroid: bool,
}

impl Asteroid {
    /// Create a new asteroid record
    #[must_use]
    pub fn new(name: impl Into<String>, nasa_jpl_url: impl Into<String>, hazardous: bool) -> Self {
        Self {
            name: name.into(),
            nasa_jpl_url: nasa_jpl_url.into(),
            is_potentially_hazardous_asteroid: hazardous,
        }
    }

    /// Shorthand for the hazardous flag
    #[must_use]
    pub const fn is_hazardous(&self) -> bool {
        self.is_potentially_hazardous_asteroid
    }
}
