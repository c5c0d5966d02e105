//! Half-open minute ranges within a single day.
//!
//! Every interval is stored as `[start, end)` in minutes from midnight, with
//! `0 <= start <= end <= 1440`. Inclusive-end input is converted once at
//! construction so that overlap, containment and duration all share one
//! convention.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Exclusive end of the day (24 * 60).
pub const END_OF_DAY: u32 = 24 * 60;

/// The entire day, `[0, 1440)`.
pub const WHOLE_DAY: Interval = Interval {
    start: START_OF_DAY,
    end: END_OF_DAY,
};

/// A half-open `[start, end)` range of minutes within one day.
///
/// Ordering is by `start`, then by `end`, both ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: u32,
    end: u32,
}

#[derive(Deserialize)]
struct RawInterval {
    start: u32,
    end: u32,
}

impl TryFrom<RawInterval> for Interval {
    type Error = MeetingError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Interval::new(raw.start, raw.end)
    }
}

impl Interval {
    /// Build `[start, end)`.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidRange` if `start > end` or `end > 1440`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end || end > END_OF_DAY {
            return Err(MeetingError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build from bounds already known to be valid.
    pub(crate) fn between(start: u32, end: u32) -> Self {
        debug_assert!(start <= end && end <= END_OF_DAY);
        Self { start, end }
    }

    /// Build an interval from explicit bounds.
    ///
    /// When `inclusive` is true, `end` names the last minute inside the range
    /// and is stored as `end + 1`; `from_start_end(0, 1439, true)` is the
    /// whole day.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        if inclusive {
            let exclusive = end
                .checked_add(1)
                .ok_or(MeetingError::InvalidRange { start, end })?;
            Self::new(start, exclusive)
        } else {
            Self::new(start, end)
        }
    }

    /// Build `[start, start + duration)`.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start
            .checked_add(duration)
            .ok_or(MeetingError::InvalidRange { start, end: u32::MAX })?;
        Self::new(start, end)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True iff the two ranges share at least one minute.
    ///
    /// Adjacent intervals (`a.end == b.start`) do not overlap, and an empty
    /// interval overlaps nothing.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }

    /// True iff `point` lies in `[start, end)`.
    pub fn contains(&self, point: u32) -> bool {
        self.start <= point && point < self.end
    }

    /// True iff `other` lies entirely inside this interval.
    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Convert a clock time to minutes from midnight.
///
/// `time_of_day(24, 0)` is accepted and yields the exclusive end of the day.
///
/// # Errors
/// Returns `MeetingError::InvalidRange` for `minutes >= 60` or a time past 24:00.
pub fn time_of_day(hours: u32, minutes: u32) -> Result<u32> {
    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .filter(|&t| minutes < 60 && t <= END_OF_DAY);
    total.ok_or(MeetingError::InvalidRange {
        start: hours.saturating_mul(60).saturating_add(minutes),
        end: END_OF_DAY,
    })
}

/// Render minutes from midnight as `HH:MM`; the end of the day is `24:00`.
pub fn clock_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", clock_time(self.start), clock_time(self.end))
    }
}
