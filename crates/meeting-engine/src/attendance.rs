//! Existing calendar events and the read-only source they are loaded from.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// An event already on the calendar: who attends it, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Display name. Never consulted when scheduling.
    #[serde(default)]
    pub title: String,
    pub attendees: BTreeSet<String>,
    pub when: Interval,
}

impl AttendanceRecord {
    pub fn new<I, S>(attendees: I, when: Interval) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: String::new(),
            attendees: attendees.into_iter().map(Into::into).collect(),
            when,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// True iff at least one of `ids` attends this event.
    pub fn involves_any(&self, ids: &BTreeSet<String>) -> bool {
        // Iterate the smaller set and probe the larger one.
        if self.attendees.len() <= ids.len() {
            self.attendees.iter().any(|a| ids.contains(a))
        } else {
            ids.iter().any(|id| self.attendees.contains(id))
        }
    }
}

/// A read-only provider of the events a query runs against.
///
/// Implemented for plain slices and vectors so in-memory callers need no
/// adapter; calendar backends implement it over whatever they have loaded.
pub trait EventSource {
    fn events(&self) -> &[AttendanceRecord];
}

impl EventSource for [AttendanceRecord] {
    fn events(&self) -> &[AttendanceRecord] {
        self
    }
}

impl EventSource for Vec<AttendanceRecord> {
    fn events(&self) -> &[AttendanceRecord] {
        self
    }
}
