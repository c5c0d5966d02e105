//! Validated meeting requests.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// What the caller wants to schedule: who must come, who would ideally come,
/// and for how many minutes.
///
/// An attendee listed as both mandatory and optional is treated as mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct MeetingRequest {
    mandatory: BTreeSet<String>,
    optional: BTreeSet<String>,
    duration: u32,
}

#[derive(Deserialize)]
struct RawRequest {
    #[serde(default)]
    mandatory: BTreeSet<String>,
    #[serde(default)]
    optional: BTreeSet<String>,
    duration: u32,
}

impl TryFrom<RawRequest> for MeetingRequest {
    type Error = MeetingError;

    fn try_from(raw: RawRequest) -> Result<Self> {
        MeetingRequest::new(raw.mandatory, raw.optional, raw.duration)
    }
}

impl MeetingRequest {
    /// # Errors
    /// Returns `MeetingError::InvalidRequest` if `duration` is zero. A duration
    /// longer than the day is accepted; it simply never fits.
    pub fn new<M, O, S, T>(mandatory: M, optional: O, duration: u32) -> Result<Self>
    where
        M: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        if duration == 0 {
            return Err(MeetingError::InvalidRequest(
                "duration must be at least one minute".to_string(),
            ));
        }
        Ok(Self {
            mandatory: mandatory.into_iter().map(Into::into).collect(),
            optional: optional.into_iter().map(Into::into).collect(),
            duration,
        })
    }

    pub fn mandatory(&self) -> &BTreeSet<String> {
        &self.mandatory
    }

    pub fn optional(&self) -> &BTreeSet<String> {
        &self.optional
    }

    /// Requested length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Mandatory and optional attendees together.
    pub fn everyone(&self) -> BTreeSet<String> {
        self.mandatory.union(&self.optional).cloned().collect()
    }
}
