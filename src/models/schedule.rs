//! Schedule (solution) model.
//!
//! A schedule holds exactly one chosen session per lecture group, pairwise
//! non-overlapping. Sessions are kept in group processing order.

use serde::{Deserialize, Serialize};

use super::{LectureId, Session, Weekday};

/// A complete weekly timetable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    sessions: Vec<Session>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_sessions(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    /// Chosen sessions, one per lecture group, in group order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Consumes the schedule, returning the flat session list.
    pub fn into_sessions(self) -> Vec<Session> {
        self.sessions
    }

    /// Number of scheduled sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions held on `day`, earliest first.
    pub fn sessions_on(&self, day: Weekday) -> Vec<&Session> {
        let mut on_day: Vec<&Session> = self.sessions.iter().filter(|s| s.day == day).collect();
        on_day.sort_by_key(|s| s.start_time);
        on_day
    }

    /// The session chosen for a lecture.
    pub fn session_for(&self, id: &LectureId) -> Option<&Session> {
        self.sessions.iter().find(|s| &s.lecture_id() == id)
    }

    /// Total scheduled minutes across the week.
    pub fn busy_minutes(&self) -> u32 {
        self.sessions
            .iter()
            .map(|s| u32::from(s.duration_minutes()))
            .sum()
    }
}
