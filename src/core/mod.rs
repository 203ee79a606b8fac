//! Core domain logic for check-asteroids
//!
//! This module contains pure business logic with no I/O dependencies.
//! The network fetch is abstracted through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Asteroid, FeedResponse, Severity, Classification)
//! - `services/` - Classification, feed scanning, check orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
