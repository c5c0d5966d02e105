//! Two-tier meeting slot search.
//!
//! Optional attendees are all-or-nothing: the search first looks for slots
//! where every mandatory and optional attendee is free, and only when there are
//! none does it fall back to slots that suit the mandatory attendees alone. A
//! returned slot never conflicts with a mandatory attendee.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::attendance::{AttendanceRecord, EventSource};
use crate::busy::build_busy_intervals;
use crate::gaps::find_free_slots;
use crate::interval::{Interval, WHOLE_DAY};
use crate::request::MeetingRequest;

/// Which attendees the returned slots are guaranteed to suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Every mandatory and optional attendee is free.
    Everyone,
    /// Only the mandatory attendees are guaranteed free.
    MandatoryOnly,
    /// Nothing fits, even ignoring optional attendees.
    NoFit,
}

/// Slots found for a request, along with the tier that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub tier: Tier,
    pub slots: Vec<Interval>,
}

/// Find every free slot that can host `request`.
///
/// Returns an empty list when no slot fits; that is a valid answer, not an
/// error. See [`query_detailed`] to learn whether optional attendees were
/// honored.
pub fn query(events: &[AttendanceRecord], request: &MeetingRequest) -> Vec<Interval> {
    query_detailed(events, request).slots
}

/// Like [`query`], but also reports which [`Tier`] the slots satisfy.
pub fn query_detailed(events: &[AttendanceRecord], request: &MeetingRequest) -> Schedule {
    let duration = request.duration();
    if duration >= WHOLE_DAY.duration() {
        debug!(duration, "requested duration does not fit in a day");
        return Schedule {
            tier: Tier::NoFit,
            slots: Vec::new(),
        };
    }

    let busy_all = build_busy_intervals(events, &request.everyone());
    let slots_all = find_free_slots(&busy_all, duration);
    trace!(busy = busy_all.len(), slots = slots_all.len(), "everyone tier");

    if !slots_all.is_empty() {
        debug!(slots = slots_all.len(), "found slots suiting every attendee");
        return Schedule {
            tier: Tier::Everyone,
            slots: slots_all,
        };
    }

    let busy_mandatory = build_busy_intervals(events, request.mandatory());
    let slots_mandatory = find_free_slots(&busy_mandatory, duration);
    trace!(
        busy = busy_mandatory.len(),
        slots = slots_mandatory.len(),
        "mandatory tier"
    );

    let tier = if slots_mandatory.is_empty() {
        Tier::NoFit
    } else {
        Tier::MandatoryOnly
    };
    debug!(?tier, slots = slots_mandatory.len(), "fell back to mandatory attendees");

    Schedule {
        tier,
        slots: slots_mandatory,
    }
}

/// Run [`query`] against the events exposed by `source`.
pub fn query_source<S>(source: &S, request: &MeetingRequest) -> Vec<Interval>
where
    S: EventSource + ?Sized,
{
    query(source.events(), request)
}
