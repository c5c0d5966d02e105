//! Project calendar events onto a set of attendees.

use std::collections::BTreeSet;

use crate::attendance::AttendanceRecord;
use crate::interval::Interval;

/// Collect the intervals during which at least one of `attendee_ids` is busy.
///
/// Each event contributes its interval at most once, however many of its
/// attendees match. The result is sorted by the [`Interval`] ordering but is
/// not merged: overlapping and adjacent intervals are left for the sweep in
/// [`crate::gaps::find_free_slots`].
pub fn build_busy_intervals(
    events: &[AttendanceRecord],
    attendee_ids: &BTreeSet<String>,
) -> Vec<Interval> {
    if attendee_ids.is_empty() {
        return Vec::new();
    }

    let mut busy: Vec<Interval> = events
        .iter()
        .filter(|event| event.involves_any(attendee_ids))
        .map(|event| event.when)
        .collect();

    busy.sort();
    busy
}
