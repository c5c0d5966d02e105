//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    /// An interval bound lies outside the day, or the interval ends before it starts.
    #[error("Invalid range: [{start}, {end}) must satisfy 0 <= start <= end <= 1440")]
    InvalidRange { start: u32, end: u32 },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
