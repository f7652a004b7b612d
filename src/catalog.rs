//! Lecture catalog: the registry of candidate sessions.
//!
//! Sessions are grouped by [`LectureId`] in first-registration order.
//! A group disappears as soon as its last session is removed, so the
//! catalog never hands an empty group to the solver.

use tracing::debug;

use crate::error::ScheduleError;
use crate::models::{LectureGroup, LectureId, Session, TimeOfDay, Weekday};
use crate::solver::{BacktrackingSolver, SolveReport};

/// Registered lecture sessions, grouped by lecture.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::LectureCatalog;
/// use u_timetable::models::Session;
/// use u_timetable::solver::BacktrackingSolver;
///
/// let mut catalog = LectureCatalog::new();
/// catalog.add_session(Session::parse("Math", "Monday", "09:00", "10:00").unwrap()).unwrap();
/// catalog.add_session(Session::parse("math", "Tuesday", "09:00", "10:00").unwrap()).unwrap();
/// assert_eq!(catalog.len(), 1);
///
/// let report = catalog.compute_schedule(&BacktrackingSolver::new()).unwrap();
/// assert!(report.outcome.is_feasible());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LectureCatalog {
    groups: Vec<LectureGroup>,
}

impl LectureCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a session under its lecture.
    ///
    /// # Errors
    /// - [`ScheduleError::EmptyLectureName`] for a blank lecture name.
    /// - [`ScheduleError::InvalidTimeRange`] if the session does not end
    ///   after it starts.
    pub fn add_session(&mut self, session: Session) -> Result<LectureId, ScheduleError> {
        let id = session.lecture_id();
        if id.is_empty() {
            return Err(ScheduleError::EmptyLectureName);
        }
        session.check_range()?;

        debug!(lecture = %id, session = %session, "registering session");
        Ok(file_session(&mut self.groups, session))
    }

    /// Removes the session at `index` within a lecture's group.
    ///
    /// Returns `None` if the lecture or index does not exist.
    pub fn remove_session(&mut self, id: &LectureId, index: usize) -> Option<Session> {
        let pos = self.position(id)?;
        let group = &mut self.groups[pos];
        if index >= group.sessions.len() {
            return None;
        }
        let removed = group.sessions.remove(index);
        self.drop_if_empty(pos);
        Some(removed)
    }

    /// Removes every session of a lecture held on `day` from `start` to
    /// `end`. Returns the number removed.
    pub fn remove_matching(
        &mut self,
        id: &LectureId,
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> usize {
        let Some(pos) = self.position(id) else {
            return 0;
        };
        let group = &mut self.groups[pos];
        let before = group.sessions.len();
        group
            .sessions
            .retain(|s| !(s.day == day && s.start_time == start && s.end_time == end));
        let removed = before - group.sessions.len();
        self.drop_if_empty(pos);
        removed
    }

    /// Lecture groups in first-registration order.
    pub fn groups(&self) -> &[LectureGroup] {
        &self.groups
    }

    /// The group for a lecture.
    pub fn group(&self, id: &LectureId) -> Option<&LectureGroup> {
        self.groups.iter().find(|g| &g.id == id)
    }

    /// Number of distinct lectures.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no sessions are registered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total registered sessions across all lectures.
    pub fn session_count(&self) -> usize {
        self.groups.iter().map(LectureGroup::len).sum()
    }

    /// Runs `solver` over the registered lectures.
    pub fn compute_schedule(&self, solver: &BacktrackingSolver) -> Result<SolveReport, ScheduleError> {
        solver.solve(&self.groups)
    }

    fn position(&self, id: &LectureId) -> Option<usize> {
        self.groups.iter().position(|g| &g.id == id)
    }

    fn drop_if_empty(&mut self, pos: usize) {
        if self.groups[pos].is_empty() {
            let group = self.groups.remove(pos);
            debug!(lecture = %group.id, "lecture has no sessions left, removing");
        }
    }
}

/// Groups a flat session list by lecture, in first-appearance order.
///
/// Sessions are not validated here; the solver rejects blank names and
/// bad time ranges.
pub fn group_sessions(sessions: impl IntoIterator<Item = Session>) -> Vec<LectureGroup> {
    sessions.into_iter().fold(Vec::new(), |mut groups, session| {
        file_session(&mut groups, session);
        groups
    })
}

/// Appends `session` to its lecture's group, opening a new group at the
/// end if needed. A new group is named after the trimmed lecture name.
fn file_session(groups: &mut Vec<LectureGroup>, session: Session) -> LectureId {
    let id = session.lecture_id();
    match groups.iter_mut().find(|g| g.id == id) {
        Some(group) => group.sessions.push(session),
        None => groups.push(LectureGroup {
            id: id.clone(),
            name: session.lecture_name.trim().to_string(),
            sessions: vec![session],
        }),
    }
    id
}
