//! Feed response model
//!
//! The outer shape is decoded eagerly. Each per-date array is kept as raw
//! JSON and only decoded when asked for, so one corrupt date cannot spoil
//! the rest of the feed.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;

use super::Asteroid;

/// Decoded body of the near-Earth-object feed
#[derive(Debug, Deserialize)]
pub struct FeedResponse {
    /// Number of objects the feed claims to contain; not checked against the lists
    #[serde(default)]
    pub element_count: i64,

    /// Per-date object arrays, keyed by date string
    #[serde(default)]
    near_earth_objects: Option<HashMap<String, Box<RawValue>>>,
}

impl FeedResponse {
    /// Decode the outer structure of a feed body
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Number of date entries in the feed
    #[must_use]
    pub fn date_count(&self) -> usize {
        self.near_earth_objects.as_ref().map_or(0, HashMap::len)
    }

    /// Date keys in ascending order
    #[must_use]
    pub fn dates(&self) -> Vec<&str> {
        let mut dates: Vec<&str> = self
            .near_earth_objects
            .iter()
            .flat_map(HashMap::keys)
            .map(String::as_str)
            .collect();
        dates.sort_unstable();
        dates
    }

    /// Decode the objects listed under `date`
    ///
    /// Returns `None` if the date is not in the feed. A JSON `null` entry
    /// decodes to an empty list.
    #[must_use]
    pub fn asteroids_for(&self, date: &str) -> Option<serde_json::Result<Vec<Asteroid>>> {
        let raw = self.near_earth_objects.as_ref()?.get(date)?;
        Some(serde_json::from_str::<Option<Vec<Asteroid>>>(raw.get()).map(Option::unwrap_or_default))
    }
}
