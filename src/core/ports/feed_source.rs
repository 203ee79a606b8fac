//! Feed source port
//!
//! Defines how the check obtains the raw feed body.

use crate::error::CheckError;

/// Something that can produce one feed body
///
/// Implementations make exactly one attempt per call. Failures must be
/// reported as [`CheckError::Network`], [`CheckError::Status`] or
/// [`CheckError::Body`] so they classify as warnings.
pub trait FeedSource {
    /// Fetch the raw feed body
    fn fetch(&self) -> Result<Vec<u8>, CheckError>;
}
