//! Feed scanning
//!
//! Walks every date of a feed and reduces the per-object classifications to
//! one status. Dates are visited in ascending order and objects in feed
//! order, so the outcome never depends on map iteration order.

use log::debug;

use super::classifier::{ALL_CLEAR, classify};
use crate::core::models::{Classification, FeedResponse};

/// How much of the feed to look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Classify every object and report the worst result
    #[default]
    All,
    /// Report the classification of the first object only
    First,
}

/// A date whose object list could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    /// Date key from the feed
    pub date: String,
    /// Decoder error message
    pub error: String,
}

/// Outcome of scanning a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Final status and message
    pub classification: Classification,
    /// Objects classified before the scan stopped
    pub examined: usize,
    /// Hazardous objects among those examined
    pub hazardous: usize,
    /// Dates skipped because their list did not decode
    pub failures: Vec<DecodeFailure>,
}

/// Scan a decoded feed
///
/// A date whose list fails to decode counts as an empty list and is recorded
/// in [`ScanReport::failures`]. Hazardous objects win over decode failures,
/// which win over an all-clear. A feed with no objects at all is ok.
#[must_use]
pub fn scan(feed: &FeedResponse, mode: ScanMode) -> ScanReport {
    let mut examined = 0;
    let mut hazardous = 0;
    let mut first_hazard: Option<Classification> = None;
    let mut failures = Vec::new();

    for date in feed.dates() {
        let asteroids = match feed.asteroids_for(date) {
            Some(Ok(asteroids)) => asteroids,
            Some(Err(e)) => {
                debug!("Skipping {date}: {e}");
                failures.push(DecodeFailure {
                    date: date.to_string(),
                    error: e.to_string(),
                });
                Vec::new()
            },
            None => continue,
        };
        debug!("{date}: {} object(s)", asteroids.len());

        for asteroid in &asteroids {
            examined += 1;
            let classification = classify(asteroid);

            if mode == ScanMode::First {
                let hazardous = usize::from(classification.is_critical());
                return ScanReport {
                    classification,
                    examined,
                    hazardous,
                    failures,
                };
            }

            if classification.is_critical() {
                hazardous += 1;
                if first_hazard.is_none() {
                    first_hazard = Some(classification);
                }
            }
        }
    }

    let classification = if let Some(hazard) = first_hazard {
        Classification::critical(with_more(hazard.message, hazardous - 1))
    } else if let Some(failure) = failures.first() {
        Classification::warning(with_more(
            format!("Error decoding asteroids for {}: {}", failure.date, failure.error),
            failures.len() - 1,
        ))
    } else {
        Classification::ok(ALL_CLEAR)
    };

    ScanReport {
        classification,
        examined,
        hazardous,
        failures,
    }
}

fn with_more(message: String, more: usize) -> String {
    if more == 0 {
        message
    } else {
        format!("{message} (+{more} more)")
    }
}
