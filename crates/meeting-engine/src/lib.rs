//! # meeting-engine
//!
//! Deterministic meeting slot search over a single day of calendar events.
//!
//! Given the events already on attendees' calendars and a [`MeetingRequest`]
//! naming mandatory and optional attendees, the engine returns every free
//! window long enough to host the meeting. Slots that suit every attendee are
//! preferred; when none exist the optional attendees are dropped and only the
//! mandatory ones are honored.
//!
//! ```rust
//! use meeting_engine::{query, AttendanceRecord, Interval, MeetingRequest};
//!
//! let events = vec![AttendanceRecord::new(["alice"], Interval::new(600, 660).unwrap())];
//! let request = MeetingRequest::new(["alice"], Vec::<String>::new(), 30).unwrap();
//!
//! let slots = query(&events, &request);
//! assert_eq!(slots, vec![Interval::new(0, 600).unwrap(), Interval::new(660, 1440).unwrap()]);
//! ```
//!
//! ## Modules
//!
//! - [`interval`]: half-open minute ranges within one day
//! - [`attendance`]: existing events and the read-only event source seam
//! - [`request`]: validated meeting requests
//! - [`busy`]: project events onto an attendee set
//! - [`gaps`]: sweep busy intervals for free slots
//! - [`query`]: two-tier (everyone, then mandatory-only) slot search
//! - [`error`]: Error types

pub mod attendance;
pub mod busy;
pub mod error;
pub mod gaps;
pub mod interval;
pub mod query;
pub mod request;

pub use attendance::{AttendanceRecord, EventSource};
pub use busy::build_busy_intervals;
pub use error::MeetingError;
pub use gaps::{find_free_slots, merge_overlapping};
pub use interval::{Interval, WHOLE_DAY};
pub use query::{query, query_detailed, query_source, Schedule, Tier};
pub use request::MeetingRequest;
