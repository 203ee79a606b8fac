//! Tests for feed scanning

use check_asteroids::core::models::{Classification, FeedResponse, Severity};
use check_asteroids::core::services::{ALL_CLEAR, ScanMode, scan};
use serde_json::json;

use crate::common::fixtures::{FeedBuilder, harmless, hazardous};

fn feed(body: &str) -> FeedResponse {
    FeedResponse::from_slice(body.as_bytes()).unwrap()
}

// =============================================================================
// ALL MODE
// =============================================================================

#[test]
fn test_empty_feed_is_ok() {
    let report = scan(&feed(&FeedBuilder::new().build()), ScanMode::All);
    assert_eq!(report.classification.severity, Severity::Ok);
    assert_eq!(report.classification.message, ALL_CLEAR);
    assert_eq!(report.examined, 0);
}

#[test]
fn test_dates_with_no_objects_are_ok() {
    let body = FeedBuilder::new().date("2024-06-01", &[]).date("2024-06-02", &[]).build();
    let report = scan(&feed(&body), ScanMode::All);
    assert_eq!(report.classification.severity, Severity::Ok);
}

#[test]
fn test_all_harmless_is_ok() {
    let body = FeedBuilder::new()
        .date("2024-06-01", &[harmless("a"), harmless("b")])
        .date("2024-06-02", &[harmless("c")])
        .build();

    let report = scan(&feed(&body), ScanMode::All);
    assert_eq!(report.classification.severity, Severity::Ok);
    assert_eq!(report.classification.message, "No Hazardous Asteroids today.");
    assert_eq!(report.examined, 3);
    assert_eq!(report.hazardous, 0);
}

#[test]
fn test_hazard_anywhere_is_critical() {
    let body = FeedBuilder::new()
        .date("2024-06-01", &[harmless("a"), harmless("b")])
        .date("2024-06-02", &[harmless("c"), hazardous("d")])
        .build();

    let report = scan(&feed(&body), ScanMode::All);
    assert_eq!(report.classification.severity, Severity::Critical);
    assert_eq!(
        report.classification.message,
        "Potentially Hazardous Asteroid detected!http://ssd.jpl.nasa.gov/sbdb.cgi?sstr=d"
    );
    assert_eq!(report.examined, 4);
    assert_eq!(report.hazardous, 1);
}

#[test]
fn test_several_hazards_report_the_earliest_and_a_count() {
    let body = FeedBuilder::new()
        .date("2024-06-03", &[hazardous("late")])
        .date("2024-06-01", &[harmless("a"), hazardous("early"), hazardous("second")])
        .build();

    let report = scan(&feed(&body), ScanMode::All);
    assert_eq!(report.classification.severity, Severity::Critical);
    assert_eq!(
        report.classification.message,
        "Potentially Hazardous Asteroid detected!http://ssd.jpl.nasa.gov/sbdb.cgi?sstr=early (+2 more)"
    );
    assert_eq!(report.hazardous, 3);
}

// =============================================================================
// DECODE FAILURES
// =============================================================================

#[test]
fn test_corrupt_date_is_skipped_and_valid_date_still_scanned() {
    let body = FeedBuilder::new()
        .raw_date("2024-06-01", json!("garbage"))
        .date("2024-06-02", &[hazardous("d")])
        .build();

    let report = scan(&feed(&body), ScanMode::All);
    assert_eq!(report.classification.severity, Severity::Critical);
    assert_eq!(report.examined, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].date, "2024-06-01");
}

#[test]
fn test_corrupt_date_without_hazard_is_warning() {
    let body = FeedBuilder::new()
        .raw_date("2024-06-01", json!([{"is_potentially_hazardous_asteroid": "yes"}]))
        .raw_date("2024-06-03", json!(42))
        .date("2024-06-02", &[harmless("b")])
        .build();

    let report = scan(&feed(&body), ScanMode::All);
    assert_eq!(report.classification.severity, Severity::Warning);
    assert!(
        report
            .classification
            .message
            .starts_with("Error decoding asteroids for 2024-06-01: ")
    );
    assert!(report.classification.message.ends_with(" (+1 more)"));
    assert_eq!(report.examined, 1);
    assert_eq!(report.failures.len(), 2);
}

// =============================================================================
// FIRST MODE
// =============================================================================

#[test]
fn test_first_mode_reports_first_object_of_earliest_date() {
    let body = FeedBuilder::new()
        .date("2024-06-02", &[hazardous("later")])
        .date("2024-06-01", &[harmless("first"), hazardous("second")])
        .build();

    let report = scan(&feed(&body), ScanMode::First);
    assert_eq!(report.classification.severity, Severity::Ok);
    assert_eq!(report.examined, 1);
    assert_eq!(report.hazardous, 0);
}

#[test]
fn test_first_mode_hazardous_first_object() {
    let body = FeedBuilder::new()
        .date("2024-06-01", &[hazardous("first"), harmless("second")])
        .build();

    let report = scan(&feed(&body), ScanMode::First);
    assert_eq!(report.classification.severity, Severity::Critical);
    assert_eq!(
        report.classification.message,
        "Potentially Hazardous Asteroid detected!http://ssd.jpl.nasa.gov/sbdb.cgi?sstr=first"
    );
    assert_eq!(report.hazardous, 1);
}

#[test]
fn test_first_mode_reports_first_valid_object_after_corrupt_date() {
    let body = FeedBuilder::new()
        .raw_date("2024-06-01", json!({"broken": true}))
        .date("2024-06-02", &[harmless("first")])
        .build();

    let report = scan(&feed(&body), ScanMode::First);
    assert_eq!(report.classification, Classification::ok(ALL_CLEAR));
    assert_eq!(report.examined, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].date, "2024-06-01");
}

#[test]
fn test_first_mode_corrupt_dates_only_is_warning() {
    let body = FeedBuilder::new().raw_date("2024-06-01", json!("garbage")).build();

    let report = scan(&feed(&body), ScanMode::First);
    assert_eq!(report.classification.severity, Severity::Warning);
    assert_eq!(report.examined, 0);
}

#[test]
fn test_first_mode_empty_feed_falls_back_to_ok() {
    let body = FeedBuilder::new().date("2024-06-01", &[]).build();
    let report = scan(&feed(&body), ScanMode::First);
    assert_eq!(report.classification.severity, Severity::Ok);
    assert_eq!(report.examined, 0);
}

#[test]
fn test_default_mode_is_all() {
    assert_eq!(ScanMode::default(), ScanMode::All);
}
