//! Session and lecture group models.
//!
//! A session is one concrete offering of a lecture: a weekday and a
//! time range, plus display metadata (lecturer, room). All sessions that
//! share a [`LectureId`] form a [`LectureGroup`] of mutually exclusive
//! alternatives, exactly one of which ends up in the timetable.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{TimeOfDay, Weekday};
use crate::error::ScheduleError;

/// Normalized lecture key.
///
/// Derived from a free-text lecture name by trimming, collapsing internal
/// whitespace runs to a single space, and lowercasing. "Linear  Algebra"
/// and "linear algebra " map to the same id, so incidental formatting in
/// user input never splits a lecture into two groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureId(String);

impl LectureId {
    /// Derives the key for a lecture name.
    pub fn from_name(name: &str) -> Self {
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self(normalized)
    }

    /// The normalized key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the source name was blank.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LectureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One candidate occurrence of a lecture.
///
/// The wire form uses camelCase keys with `"HH:MM"` times and weekday
/// names, e.g. `{"lectureName": "Math", "day": "Monday", "startTime":
/// "09:00", "endTime": "10:00", "lecturerName": "Kim", "roomNumber": "B12"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Lecture name as entered (display form).
    pub lecture_name: String,
    /// Day of the week.
    pub day: Weekday,
    /// Start time (inclusive).
    pub start_time: TimeOfDay,
    /// End time (exclusive).
    pub end_time: TimeOfDay,
    /// Lecturer, display only.
    #[serde(default)]
    pub lecturer_name: String,
    /// Room, display only.
    #[serde(default)]
    pub room_number: String,
}

impl Session {
    /// Creates a session without lecturer or room.
    pub fn new(
        lecture_name: impl Into<String>,
        day: Weekday,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
    ) -> Self {
        Self {
            lecture_name: lecture_name.into(),
            day,
            start_time,
            end_time,
            lecturer_name: String::new(),
            room_number: String::new(),
        }
    }

    /// Creates a session from raw strings, as captured by a form.
    ///
    /// Fails on an unknown day name or a malformed time. The time range
    /// itself is not checked here; see [`Session::has_valid_range`].
    pub fn parse(lecture_name: &str, day: &str, start: &str, end: &str) -> Result<Self, ScheduleError> {
        Ok(Self::new(
            lecture_name,
            day.parse()?,
            start.parse()?,
            end.parse()?,
        ))
    }

    /// Sets the lecturer name.
    pub fn with_lecturer(mut self, lecturer_name: impl Into<String>) -> Self {
        self.lecturer_name = lecturer_name.into();
        self
    }

    /// Sets the room number.
    pub fn with_room(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Grouping key for this session.
    pub fn lecture_id(&self) -> LectureId {
        LectureId::from_name(&self.lecture_name)
    }

    /// Whether `start_time < end_time`.
    #[inline]
    pub fn has_valid_range(&self) -> bool {
        self.start_time < self.end_time
    }

    /// Length in minutes (zero for an invalid range).
    pub fn duration_minutes(&self) -> u16 {
        self.end_time
            .minutes()
            .saturating_sub(self.start_time.minutes())
    }

    /// Checks the range invariant, naming the session on failure.
    pub(crate) fn check_range(&self) -> Result<(), ScheduleError> {
        if self.has_valid_range() {
            Ok(())
        } else {
            Err(ScheduleError::InvalidTimeRange {
                lecture: self.lecture_name.clone(),
                start: self.start_time.to_string(),
                end: self.end_time.to_string(),
            })
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}-{}",
            self.lecture_name, self.day, self.start_time, self.end_time
        )
    }
}

/// The alternative offerings of one lecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LectureGroup {
    /// Grouping key.
    pub id: LectureId,
    /// Display name (first name registered for this id).
    pub name: String,
    /// Alternative sessions, in registration order.
    pub sessions: Vec<Session>,
}

impl LectureGroup {
    /// Creates an empty group for a lecture name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: LectureId::from_name(&name),
            name,
            sessions: Vec::new(),
        }
    }

    /// Adds an alternative session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the group has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
