//! Calendar events and meeting requests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::range::TimeRange;

/// A calendar event: a display name, the time it occupies, and the set of
/// attendee identifiers it books.
///
/// Events are constructed once per input and never mutated. Duplicate events
/// are permitted and harmless — merging collapses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Display name, carried through for callers; never inspected by the
    /// query.
    pub name: String,
    /// The time the event occupies.
    pub when: TimeRange,
    /// Attendees booked by this event.
    pub attendees: HashSet<String>,
}

impl Event {
    /// Create an event from a name, a time range, and any iterable of
    /// attendee identifiers.
    pub fn new(
        name: impl Into<String>,
        when: TimeRange,
        attendees: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Event {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether any of this event's attendees appears in the given set.
    pub fn involves_any(&self, attendees: &HashSet<String>) -> bool {
        self.attendees.iter().any(|a| attendees.contains(a))
    }
}

/// A request to find room for a meeting on the queried day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Attendees that must be free for a slot to count.
    pub required: HashSet<String>,
    /// Attendees to accommodate when doing so leaves at least one slot.
    pub optional: HashSet<String>,
    /// Minimum slot length in minutes. Requests longer than the day always
    /// come back empty.
    pub duration_minutes: u32,
}

impl MeetingRequest {
    /// Create a request from required and optional attendee sets and a
    /// minimum duration in minutes.
    pub fn new(
        required: impl IntoIterator<Item = impl Into<String>>,
        optional: impl IntoIterator<Item = impl Into<String>>,
        duration_minutes: u32,
    ) -> Self {
        MeetingRequest {
            required: required.into_iter().map(Into::into).collect(),
            optional: optional.into_iter().map(Into::into).collect(),
            duration_minutes,
        }
    }

    /// The union of required and optional attendees. An attendee listed in
    /// both sets is effectively required.
    pub fn all_attendees(&self) -> HashSet<String> {
        self.required.union(&self.optional).cloned().collect()
    }
}
