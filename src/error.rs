//! Error types for timetable construction.
//!
//! Malformed input is always reported through [`ScheduleError`]. An
//! infeasible timetable is *not* an error: it is a normal
//! [`ScheduleOutcome`](crate::solver::ScheduleOutcome) variant.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised when input violates the solver's preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// A wall-clock time is not of the form `HH:MM` within 00:00..=23:59.
    #[error("Invalid time '{0}': expected HH:MM between 00:00 and 23:59")]
    InvalidTime(String),

    /// A weekday name does not match Sunday..Saturday.
    #[error("Unknown day '{0}'")]
    UnknownDay(String),

    /// A lecture name is empty after trimming.
    #[error("Lecture name must not be empty")]
    EmptyLectureName,

    /// A session ends at or before its start.
    #[error("Session '{lecture}' ends at {end} which is not after its start {start}")]
    InvalidTimeRange {
        lecture: String,
        start: String,
        end: String,
    },

    /// Structural validation of the lecture groups failed.
    #[error("Invalid schedule input: {} problem(s) found", .0.len())]
    InvalidInput(Vec<ValidationError>),

    /// Solver configuration could not be parsed.
    #[error("Invalid solver configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ScheduleError {
    fn from(err: toml::de::Error) -> Self {
        ScheduleError::Config(err.to_string())
    }
}
