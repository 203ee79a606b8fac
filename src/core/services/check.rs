//! Check service - one full run of the check
//!
//! Fetch, decode, scan. Every step either yields a [`ScanReport`] or stops
//! with the [`CheckError`] that decides the status; nothing here exits the
//! process.

use log::debug;

use super::scanner::{ScanMode, ScanReport, scan};
use crate::core::models::FeedResponse;
use crate::core::ports::FeedSource;
use crate::error::CheckError;

/// Run the check against a feed source
pub fn run_check(source: &dyn FeedSource, mode: ScanMode) -> Result<ScanReport, CheckError> {
    let body = source.fetch()?;
    debug!("Received {} byte(s)", body.len());

    let feed = FeedResponse::from_slice(&body)?;
    debug!(
        "Feed reports {} object(s) across {} date(s)",
        feed.element_count,
        feed.date_count()
    );

    let report = scan(&feed, mode);
    debug!(
        "Examined {} object(s), {} hazardous, {} undecodable date(s)",
        report.examined,
        report.hazardous,
        report.failures.len()
    );
    Ok(report)
}
