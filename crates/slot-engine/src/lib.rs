//! # slot-engine
//!
//! Meeting-availability search over a single day.
//!
//! Given a day's calendar events (each a time range plus the attendees it
//! books) and a meeting request (required attendees, optional attendees,
//! minimum duration), the engine computes every open range where all the
//! relevant attendees are simultaneously free for long enough. Optional
//! attendees are accommodated only when doing so leaves at least one slot;
//! otherwise the search falls back to the required attendees alone.
//!
//! The computation is a pure transformation — no I/O, no shared state — and
//! is bounded by a sort of the day's events.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{find_open_slots, Event, MeetingRequest, TimeRange};
//!
//! // Alice is booked 09:00-10:00 (minutes 540-600).
//! let events = vec![Event::new("standup", TimeRange::new(540, 600), ["alice"])];
//! let request = MeetingRequest::new(["alice"], Vec::<String>::new(), 60);
//!
//! let open = find_open_slots(&events, &request);
//! assert_eq!(open, vec![TimeRange::new(0, 540), TimeRange::new(600, 1440)]);
//! ```
//!
//! ## Modules
//!
//! - [`range`] — the [`TimeRange`] minutes-of-day value type
//! - [`event`] — [`Event`] and [`MeetingRequest`] inputs
//! - [`query`] — busy-range merging, gap extraction, and the two-tier
//!   required/optional policy
//! - [`comments`] — the comment-store collaborator used by the surrounding
//!   application
//! - [`error`] — error types

pub mod comments;
pub mod error;
pub mod event;
pub mod query;
pub mod range;

pub use comments::{CommentBoard, CommentStore, MemoryCommentStore, DEFAULT_MAX_COMMENTS};
pub use error::SlotError;
pub use event::{Event, MeetingRequest};
pub use query::{find_first_open_slot, find_open_slots, find_open_slots_for, merge_busy};
pub use range::TimeRange;
