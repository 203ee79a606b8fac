//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the check logic and the
//! network. Implementations live in the `adapters` module; tests supply
//! their own.

mod feed_source;

pub use feed_source::FeedSource;
