//! Hazard classification for a single object

use crate::core::models::{Asteroid, Classification};

/// Message prefix for a hazardous object; the object's JPL URL follows directly
pub const HAZARD_DETECTED: &str = "Potentially Hazardous Asteroid detected!";

/// Message reported when nothing hazardous was seen
pub const ALL_CLEAR: &str = "No Hazardous Asteroids today.";

/// Classify one object
///
/// Hazardous objects are critical, everything else is ok.
#[must_use]
pub fn classify(asteroid: &Asteroid) -> Classification {
    if asteroid.is_hazardous() {
        Classification::critical(format!("{HAZARD_DETECTED}{}", asteroid.nasa_jpl_url))
    } else {
        Classification::ok(ALL_CLEAR)
    }
}
