//! Domain models for check-asteroids
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Asteroid`] - One near-Earth object as reported by the feed
//! - [`FeedResponse`] - The feed body, with per-date arrays decoded lazily
//! - [`Severity`] - The status reported to the monitoring supervisor
//! - [`Classification`] - A severity paired with its message

mod asteroid;
mod classification;
mod feed;
mod severity;

pub use asteroid::Asteroid;
pub use classification::Classification;
pub use feed::FeedResponse;
pub use severity::Severity;
