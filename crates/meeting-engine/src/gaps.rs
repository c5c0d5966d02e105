//! Compute free slots from a sorted list of busy intervals.
//!
//! A single left-to-right sweep keeps a cursor at the earliest minute not yet
//! known to be busy. Busy intervals may overlap or nest; the cursor only ever
//! moves forward, so no pre-merge pass is needed.

use crate::interval::{Interval, END_OF_DAY, START_OF_DAY};

/// Find every maximal free interval of at least `min_duration` minutes.
///
/// `busy` must be sorted by start (as returned by
/// [`crate::busy::build_busy_intervals`]). A gap exactly `min_duration` long
/// fits. Returns slots in ascending order; an empty result means nothing fits.
pub fn find_free_slots(busy: &[Interval], min_duration: u32) -> Vec<Interval> {
    let mut free_slots = Vec::new();
    let mut cursor = START_OF_DAY;

    for interval in busy {
        if interval.start() > cursor && interval.start() - cursor >= min_duration {
            free_slots.push(Interval::between(cursor, interval.start()));
        }
        // A nested interval may end before the cursor; never step backwards.
        cursor = cursor.max(interval.end());
    }

    // Trailing free slot after the last busy period.
    if cursor < END_OF_DAY && END_OF_DAY - cursor >= min_duration {
        free_slots.push(Interval::between(cursor, END_OF_DAY));
    }

    free_slots
}

/// Merge overlapping or adjacent busy intervals.
///
/// `busy` must be sorted by start. Returns a sorted, non-overlapping list
/// whose union equals the union of the input. A zero-length interval that
/// touches no block is kept, so sweeping the merged list splits the day at the
/// same points as sweeping the original.
pub fn merge_overlapping(busy: &[Interval]) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::new();
    for interval in busy {
        if let Some(last) = merged.last_mut() {
            if interval.start() <= last.end() {
                // Overlapping or adjacent: extend the current block.
                *last = Interval::between(last.start(), last.end().max(interval.end()));
                continue;
            }
        }
        merged.push(*interval);
    }
    merged
}
