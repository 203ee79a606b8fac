//! check-asteroids - A monitoring check for potentially hazardous asteroids
//!
//! Queries today's near-Earth-object feed and reports ok, warning or critical
//! through stdout and the process exit code.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the check-asteroids CLI
fn main() {
    let result = cli::run();
    std::process::exit(result.exit_code());
}
