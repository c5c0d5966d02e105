//! JSON schedule files: the events on the calendar and the meeting to place.

use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Timelike};
use meeting_engine::interval::{clock_time, time_of_day};
use meeting_engine::{AttendanceRecord, EventSource, Interval, MeetingRequest};
use serde::{Deserialize, Serialize};

/// Top-level shape of a schedule file.
#[derive(Debug, Deserialize)]
struct RawSchedule {
    #[serde(default)]
    events: Vec<EventInput>,
    request: Option<MeetingRequest>,
}

#[derive(Debug, Deserialize)]
struct EventInput {
    #[serde(default)]
    title: String,
    attendees: Vec<String>,
    start: TimeInput,
    end: TimeInput,
}

/// A time of day, either `"HH:MM"` or minutes from midnight.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TimeInput {
    Minutes(u32),
    Clock(String),
}

impl TimeInput {
    fn to_minutes(&self) -> Result<u32> {
        match self {
            TimeInput::Minutes(m) => Ok(*m),
            // chrono has no 24:00; it is the exclusive end of the day.
            TimeInput::Clock(s) if s == "24:00" => Ok(time_of_day(24, 0)?),
            TimeInput::Clock(s) => {
                let t = NaiveTime::parse_from_str(s, "%H:%M")
                    .with_context(|| format!("Invalid time of day '{}', expected HH:MM", s))?;
                Ok(time_of_day(t.hour(), t.minute())?)
            }
        }
    }
}

/// Events loaded from a schedule file, plus the request if it had one.
#[derive(Debug)]
pub struct CalendarDay {
    events: Vec<AttendanceRecord>,
    request: Option<MeetingRequest>,
}

impl EventSource for CalendarDay {
    fn events(&self) -> &[AttendanceRecord] {
        &self.events
    }
}

impl CalendarDay {
    pub fn parse(json: &str) -> Result<Self> {
        let file: RawSchedule =
            serde_json::from_str(json).context("Failed to parse schedule JSON")?;

        let events = file
            .events
            .into_iter()
            .enumerate()
            .map(|(i, input)| -> Result<AttendanceRecord> {
                let start = input.start.to_minutes()?;
                let end = input.end.to_minutes()?;
                let when = Interval::new(start, end)
                    .with_context(|| format!("Event #{} has an invalid time range", i + 1))?;
                Ok(AttendanceRecord::new(input.attendees, when).with_title(input.title))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            events,
            request: file.request,
        })
    }

    pub fn require_request(&self) -> Result<&MeetingRequest> {
        match &self.request {
            Some(request) => Ok(request),
            None => bail!("Schedule has no \"request\" section"),
        }
    }
}

/// An interval as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct SlotDto {
    pub start: String,
    pub end: String,
    pub duration_minutes: u32,
}

impl From<&Interval> for SlotDto {
    fn from(interval: &Interval) -> Self {
        Self {
            start: clock_time(interval.start()),
            end: clock_time(interval.end()),
            duration_minutes: interval.duration(),
        }
    }
}

impl SlotDto {
    pub fn to_line(&self) -> String {
        format!("{}-{} ({} min)", self.start, self.end, self.duration_minutes)
    }
}
