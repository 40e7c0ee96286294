//! Error types for overlap calculation.
//!
//! There are exactly two failure kinds, both caller input errors reported
//! synchronously. There is no retry or partial-result path.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlapError {
    /// Fewer than two availability entries were supplied.
    #[error("At least two availability slots are required.")]
    InsufficientInput,

    /// An entry's timezone identifier does not resolve to a known IANA zone.
    /// Carries the exact offending identifier string.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

impl OverlapError {
    /// The HTTP status code the boundary layer should translate this error to.
    /// Both kinds are client errors.
    pub fn status_code(&self) -> u16 {
        match self {
            OverlapError::InsufficientInput | OverlapError::InvalidTimezone(_) => 400,
        }
    }
}

pub type Result<T> = std::result::Result<T, OverlapError>;
