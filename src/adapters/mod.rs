//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - Blocking HTTP client for the near-Earth-object feed

pub mod http;

pub use http::{DEFAULT_ENDPOINT, HttpFeedSource};
