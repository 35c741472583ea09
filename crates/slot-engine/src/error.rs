//! Error types for slot-engine operations.

use thiserror::Error;

/// Errors that can occur when building values from untrusted input or when a
/// comment-store backend fails.
///
/// The query algorithm itself has no recoverable error path: once an
/// [`crate::TimeRange`] exists its invariant holds, and an empty result is a
/// valid answer, not an error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// A time range whose start comes after its end.
    #[error("invalid time range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },

    /// A time range reaching past the end of the day (minute 1440).
    #[error("time range {start}..{end} extends past the end of the day")]
    OutOfDay { start: u32, end: u32 },

    /// A comment-store backend failure.
    #[error("comment store error: {0}")]
    Store(String),
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, SlotError>;
