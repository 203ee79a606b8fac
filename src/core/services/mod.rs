//! Business logic services
//!
//! - [`classifier`] - Classify a single object
//! - [`scanner`] - Reduce a whole feed to one status
//! - [`check`] - Fetch, decode and scan in one run

pub mod check;
pub mod classifier;
pub mod scanner;

pub use check::run_check;
pub use classifier::{ALL_CLEAR, HAZARD_DETECTED, classify};
pub use scanner::{DecodeFailure, ScanMode, ScanReport, scan};
