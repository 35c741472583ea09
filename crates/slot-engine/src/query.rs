//! Meeting-availability search.
//!
//! Filters the day's events down to the ones booking relevant attendees,
//! merges their time ranges into non-overlapping busy blocks, then walks the
//! gaps between blocks for ranges wide enough to hold the requested meeting.

use std::collections::HashSet;

use crate::event::{Event, MeetingRequest};
use crate::range::TimeRange;

/// Find every open range on the day where the requested meeting fits.
///
/// First tries to accommodate required and optional attendees together. If
/// that leaves no slot (and at least one required attendee exists), falls
/// back to the required attendees alone — optional attendees are dropped as a
/// group, never weighed individually.
///
/// Returned ranges are sorted by start, pairwise disjoint, each at least
/// `request.duration_minutes` long, and maximal: none can be widened without
/// hitting a relevant busy range or the day's bounds. The last range may run
/// to the end of the day; it alone includes the day's final instant.
pub fn find_open_slots(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    let open_all =
        find_open_slots_for(events, request.duration_minutes, &request.all_attendees());
    if request.required.is_empty() || !open_all.is_empty() {
        return open_all;
    }
    find_open_slots_for(events, request.duration_minutes, &request.required)
}

/// Find the earliest open range for the request, if any.
///
/// Delegates to [`find_open_slots`], so the two-tier required/optional
/// fallback applies here too.
pub fn find_first_open_slot(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    find_open_slots(events, request).into_iter().next()
}

/// Find every gap of at least `duration_minutes` left open for one fixed set
/// of attendees.
///
/// Events booking none of the given attendees do not constrain the result.
pub fn find_open_slots_for(
    events: &[Event],
    duration_minutes: u32,
    attendees: &HashSet<String>,
) -> Vec<TimeRange> {
    let busy: Vec<TimeRange> = events
        .iter()
        .filter(|event| event.involves_any(attendees))
        .map(|event| event.when)
        .collect();

    let mut open = Vec::new();
    let mut cursor = TimeRange::START_OF_DAY;

    for block in merge_busy(busy) {
        if block.start() - cursor >= duration_minutes {
            open.push(TimeRange::new(cursor, block.start()));
        }
        cursor = cursor.max(block.end());
    }

    // Trailing gap after the last busy block. With no busy blocks at all the
    // cursor never moves, so this is the whole day when it is wide enough.
    if TimeRange::END_OF_DAY - cursor >= duration_minutes {
        open.push(TimeRange::new(cursor, TimeRange::END_OF_DAY));
    }

    open
}

/// Merge busy ranges into a minimal sorted set of non-overlapping blocks.
///
/// Sorts by `(start, end)` then sweeps once, extending the current block
/// while the next range starts at or before its end — so transitive chains
/// (A overlaps B, B overlaps C) collapse regardless of input order, and
/// ranges that merely touch coalesce. Zero-length ranges occupy no time and
/// are dropped. Idempotent.
pub fn merge_busy(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    ranges.sort();

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in ranges {
        if range.duration() == 0 {
            continue;
        }
        if let Some(last) = merged.last_mut() {
            if range.start() <= last.end() {
                *last = TimeRange::new(last.start(), last.end().max(range.end()));
                continue;
            }
        }
        merged.push(range);
    }

    merged
}
