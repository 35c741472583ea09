//! Minutes-of-day time ranges.
//!
//! A [`TimeRange`] is an immutable `(start, end)` pair of integer minutes
//! within a single day, `0 <= start <= end <= 1440`. Ranges are half-open
//! (`[start, end)`); the one exception is the whole-day constant and the
//! final free range emitted by the query, which run to the day's last
//! instant at minute 1440.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// An immutable time range within a single day, in minutes.
///
/// Value-equal by `(start, end)`. The derived `Ord` sorts by start ascending
/// with ties broken by end ascending; use [`TimeRange::order_by_end`] to sort
/// by end instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Wire shape for [`TimeRange`] deserialization. Deserializing routes through
/// [`TimeRange::checked`] so no decoded value can violate the day-bound
/// invariant.
#[derive(Deserialize)]
struct RawRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawRange) -> Result<Self, SlotError> {
        TimeRange::checked(raw.start, raw.end)
    }
}

impl TimeRange {
    /// First minute of the day.
    pub const START_OF_DAY: u32 = 0;

    /// One minute past the last minute of the day.
    pub const END_OF_DAY: u32 = 24 * 60;

    /// The entire day, inclusive of its final instant.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: Self::START_OF_DAY,
        end: Self::END_OF_DAY,
    };

    /// Create a range from start and end minutes.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > 1440`. Malformed bounds are a caller
    /// contract violation and are never clamped; use [`TimeRange::checked`]
    /// for untrusted input.
    pub const fn new(start: u32, end: u32) -> Self {
        assert!(start <= end, "time range start must not exceed end");
        assert!(
            end <= Self::END_OF_DAY,
            "time range must not extend past the end of the day"
        );
        TimeRange { start, end }
    }

    /// Create a range from a start minute and a duration in minutes.
    ///
    /// # Panics
    ///
    /// Panics if `start + duration` extends past the end of the day.
    pub const fn from_start_duration(start: u32, duration: u32) -> Self {
        Self::new(start, start + duration)
    }

    /// Validating constructor for untrusted input.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::InvalidRange`] if `start > end` and
    /// [`SlotError::OutOfDay`] if `end > 1440`.
    pub fn checked(start: u32, end: u32) -> Result<Self, SlotError> {
        if start > end {
            return Err(SlotError::InvalidRange { start, end });
        }
        if end > Self::END_OF_DAY {
            return Err(SlotError::OutOfDay { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Start minute of the range.
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// End minute of the range.
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the two ranges share any point in time.
    ///
    /// Ranges that merely touch at a boundary (`a.end == b.start`) do NOT
    /// overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether the given minute falls within `[start, end)`.
    pub const fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Comparator ordering ranges by end minute ascending.
    pub fn order_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end)
    }
}
