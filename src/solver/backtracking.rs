//! Backtracking search over lecture groups.
//!
//! # Algorithm
//!
//! 1. Stable-sort each group's sessions by start time (optional heuristic).
//! 2. Walk the groups in input order, deciding one group per level.
//! 3. At each level, try the group's sessions in order. A session that
//!    overlaps anything already picked is skipped without recursing.
//! 4. A compatible session is picked and the search descends. The first
//!    complete pick set wins; a failed subtree releases its pick and the
//!    next session is tried.
//! 5. When a group runs out of sessions, the parent level backtracks.
//!
//! Levels are kept on an explicit cursor stack rather than the call
//! stack, so thousands of groups are handled without recursion.
//!
//! # Complexity
//! O(s_1 * s_2 * ... * s_g * g) in the worst case, where `s_i` is the size
//! of group `i` and `g` the number of groups. Overlap pruning is the only
//! reduction. Use [`SolverConfig::max_steps`] when inputs are untrusted.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6.3: Backtracking Search for CSPs

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{overlaps, SolverConfig};
use crate::error::ScheduleError;
use crate::models::{LectureGroup, Schedule, Session};
use crate::validation::validate_groups;

/// Result of a timetable search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScheduleOutcome {
    /// One session per group, pairwise non-overlapping.
    Feasible(Schedule),
    /// No combination of sessions avoids every overlap.
    Infeasible,
    /// The step budget ran out before the search could decide.
    Aborted {
        /// Tentative picks made before giving up.
        steps: u64,
    },
}

impl ScheduleOutcome {
    /// Whether a schedule was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self, ScheduleOutcome::Feasible(_))
    }

    /// The schedule, if one was found.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            ScheduleOutcome::Feasible(schedule) => Some(schedule),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the schedule if one was found.
    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            ScheduleOutcome::Feasible(schedule) => Some(schedule),
            _ => None,
        }
    }
}

/// Search effort counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Sessions tentatively picked.
    pub nodes: u64,
    /// Sessions skipped because they overlap an earlier pick.
    pub pruned: u64,
    /// Picks released after their subtree failed.
    pub backtracks: u64,
}

/// Outcome plus the effort spent reaching it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub outcome: ScheduleOutcome,
    pub stats: SearchStats,
}

/// Depth-first backtracking timetable solver.
///
/// Finds a valid timetable if and only if one exists (unless a step
/// budget is configured and exhausted first). Which valid timetable is
/// returned depends on group order and session order.
///
/// # Example
///
/// ```
/// use u_timetable::models::{LectureGroup, Session};
/// use u_timetable::solver::BacktrackingSolver;
///
/// let math = LectureGroup::new("Math")
///     .with_session(Session::parse("Math", "Monday", "09:00", "10:00").unwrap())
///     .with_session(Session::parse("Math", "Tuesday", "09:00", "10:00").unwrap());
/// let physics = LectureGroup::new("Physics")
///     .with_session(Session::parse("Physics", "Monday", "09:00", "10:00").unwrap());
///
/// let report = BacktrackingSolver::new().solve(&[math, physics]).unwrap();
/// let schedule = report.outcome.schedule().unwrap();
/// assert_eq!(schedule.sessions()[0].day.name(), "Tuesday");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingSolver {
    config: SolverConfig,
}

impl BacktrackingSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches for one non-overlapping session per group.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] if the groups fail validation.
    /// Infeasibility is reported through [`ScheduleOutcome::Infeasible`],
    /// never as an error.
    pub fn solve(&self, groups: &[LectureGroup]) -> Result<SolveReport, ScheduleError> {
        validate_groups(groups).map_err(ScheduleError::InvalidInput)?;

        let options: Vec<Vec<&Session>> = groups
            .iter()
            .map(|group| {
                let mut sessions: Vec<&Session> = group.sessions.iter().collect();
                if self.config.sort_by_start {
                    sessions.sort_by_key(|s| s.start_time);
                }
                sessions
            })
            .collect();

        debug!(
            groups = groups.len(),
            sessions = options.iter().map(Vec::len).sum::<usize>(),
            max_steps = ?self.config.max_steps,
            "starting timetable search"
        );

        let mut search = Search {
            assignment: Vec::with_capacity(groups.len()),
            stats: SearchStats::default(),
            max_steps: self.config.max_steps,
        };

        let outcome = match search.run(&options) {
            Step::Found(sessions) => ScheduleOutcome::Feasible(Schedule::from_sessions(sessions)),
            Step::Exhausted => ScheduleOutcome::Infeasible,
            Step::OutOfBudget => {
                warn!(steps = search.stats.nodes, "timetable search aborted: step budget exhausted");
                ScheduleOutcome::Aborted {
                    steps: search.stats.nodes,
                }
            }
        };

        debug!(
            feasible = outcome.is_feasible(),
            nodes = search.stats.nodes,
            pruned = search.stats.pruned,
            backtracks = search.stats.backtracks,
            "timetable search finished"
        );

        Ok(SolveReport {
            outcome,
            stats: search.stats,
        })
    }
}

/// Computes a timetable with the default solver configuration.
pub fn compute_schedule(groups: &[LectureGroup]) -> Result<ScheduleOutcome, ScheduleError> {
    BacktrackingSolver::new()
        .solve(groups)
        .map(|report| report.outcome)
}

enum Step {
    Found(Vec<Session>),
    Exhausted,
    OutOfBudget,
}

struct Search<'a> {
    assignment: Vec<&'a Session>,
    stats: SearchStats,
    max_steps: Option<u64>,
}

impl<'a> Search<'a> {
    /// Runs the search with an explicit stack of candidate cursors.
    ///
    /// `cursors[d]` is the next candidate to try for group `d`. Invariant:
    /// `cursors.len() == assignment.len() + 1` at the top of every
    /// iteration, so opening a level always pairs with one pick and
    /// closing a level always releases the parent's pick. Depth lives on
    /// the heap, so the group count never threatens the thread stack.
    fn run(&mut self, groups: &[Vec<&'a Session>]) -> Step {
        let mut cursors: Vec<usize> = Vec::with_capacity(groups.len() + 1);
        cursors.push(0);

        while let Some(&cursor) = cursors.last() {
            debug_assert_eq!(cursors.len(), self.assignment.len() + 1);
            let depth = cursors.len() - 1;
            let Some(candidates) = groups.get(depth) else {
                return Step::Found(self.assignment.iter().map(|&s| s.clone()).collect());
            };

            match self.next_compatible(candidates, cursor) {
                Some(index) => {
                    if self.max_steps.is_some_and(|max| self.stats.nodes >= max) {
                        return Step::OutOfBudget;
                    }
                    self.stats.nodes += 1;
                    let candidate = candidates[index];
                    trace!(depth, session = %candidate, "pick");

                    self.assignment.push(candidate);
                    cursors[depth] = index + 1;
                    cursors.push(0);
                }
                None => {
                    cursors.pop();
                    if self.assignment.pop().is_some() {
                        self.stats.backtracks += 1;
                    }
                }
            }
        }

        Step::Exhausted
    }

    /// First candidate at or after `from` that fits the current picks.
    fn next_compatible(&mut self, candidates: &[&'a Session], from: usize) -> Option<usize> {
        for (index, &candidate) in candidates.iter().enumerate().skip(from) {
            if self.assignment.iter().any(|picked| overlaps(candidate, picked)) {
                self.stats.pruned += 1;
                continue;
            }
            return Some(index);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LectureId, TimeOfDay, Weekday};

    fn session(name: &str, day: &str, start: &str, end: &str) -> Session {
        Session::parse(name, day, start, end).unwrap()
    }

    fn group(name: &str, slots: &[(&str, &str, &str)]) -> LectureGroup {
        slots
            .iter()
            .fold(LectureGroup::new(name), |g, &(day, start, end)| {
                g.with_session(session(name, day, start, end))
            })
    }

    #[test]
    fn test_adjacent_sessions_are_both_scheduled() {
        let groups = vec![
            group("Math", &[("Monday", "09:00", "10:00")]),
            group("Physics", &[("Monday", "10:00", "11:00")]),
        ];
        let schedule = compute_schedule(&groups).unwrap().into_schedule().unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.sessions()[0].lecture_name, "Math");
        assert_eq!(schedule.sessions()[1].lecture_name, "Physics");
    }

    #[test]
    fn test_sole_overlapping_options_are_infeasible() {
        let groups = vec![
            group("Math", &[("Monday", "09:00", "10:00")]),
            group("Physics", &[("Monday", "09:30", "10:30")]),
        ];
        assert_eq!(compute_schedule(&groups).unwrap(), ScheduleOutcome::Infeasible);
    }

    #[test]
    fn test_conflict_forces_alternative() {
        let groups = vec![
            group("Math", &[("Monday", "09:00", "10:00"), ("Tuesday", "09:00", "10:00")]),
            group("Physics", &[("Monday", "09:00", "10:00")]),
        ];
        let schedule = compute_schedule(&groups).unwrap().into_schedule().unwrap();
        let math = schedule.session_for(&LectureId::from_name("Math")).unwrap();
        let physics = schedule.session_for(&LectureId::from_name("Physics")).unwrap();
        assert_eq!(math.day, Weekday::Tuesday);
        assert_eq!(physics.day, Weekday::Monday);
    }

    #[test]
    fn test_empty_input_is_feasible_and_empty() {
        let outcome = compute_schedule(&[]).unwrap();
        assert_eq!(outcome, ScheduleOutcome::Feasible(Schedule::new()));
    }

    #[test]
    fn test_cross_day_identical_times_do_not_conflict() {
        let groups = vec![
            group("Math", &[("Monday", "09:00", "10:00")]),
            group("Physics", &[("Wednesday", "09:00", "10:00")]),
            group("Chemistry", &[("Friday", "09:00", "10:00")]),
        ];
        assert!(compute_schedule(&groups).unwrap().is_feasible());
    }

    #[test]
    fn test_earliest_start_tried_first() {
        let groups = vec![group(
            "Math",
            &[
                ("Monday", "14:00", "15:00"),
                ("Monday", "08:00", "09:00"),
                ("Monday", "11:00", "12:00"),
            ],
        )];
        let schedule = compute_schedule(&groups).unwrap().into_schedule().unwrap();
        assert_eq!(schedule.sessions()[0].start_time.to_string(), "08:00");
    }

    #[test]
    fn test_equal_starts_keep_input_order() {
        let groups = vec![group(
            "Math",
            &[("Thursday", "09:00", "10:00"), ("Monday", "09:00", "10:00")],
        )];
        let schedule = compute_schedule(&groups).unwrap().into_schedule().unwrap();
        assert_eq!(schedule.sessions()[0].day, Weekday::Thursday);
    }

    #[test]
    fn test_unsorted_search_uses_input_order() {
        let groups = vec![group(
            "Math",
            &[("Monday", "14:00", "15:00"), ("Monday", "08:00", "09:00")],
        )];
        let solver = BacktrackingSolver::with_config(SolverConfig::new().with_sort_by_start(false));
        let report = solver.solve(&groups).unwrap();
        let schedule = report.outcome.into_schedule().unwrap();
        assert_eq!(schedule.sessions()[0].start_time.to_string(), "14:00");
    }

    #[test]
    fn test_deep_backtracking() {
        // C can only go Monday 09:00, which forces A and B off their
        // first options.
        let groups = vec![
            group("A", &[("Monday", "09:00", "10:00"), ("Monday", "10:00", "11:00")]),
            group("B", &[("Monday", "10:00", "11:00"), ("Monday", "11:00", "12:00")]),
            group("C", &[("Monday", "09:00", "10:00")]),
        ];
        let report = BacktrackingSolver::new().solve(&groups).unwrap();
        let schedule = report.outcome.schedule().unwrap();
        let starts: Vec<String> = schedule
            .sessions()
            .iter()
            .map(|s| s.start_time.to_string())
            .collect();
        assert_eq!(starts, ["10:00", "11:00", "09:00"]);
        assert!(report.stats.backtracks > 0);
        assert!(report.stats.pruned > 0);
    }

    #[test]
    fn test_step_budget_aborts() {
        let slots = [
            ("Monday", "09:00", "10:00"),
            ("Monday", "09:00", "10:00"),
            ("Monday", "09:00", "10:00"),
        ];
        let groups: Vec<LectureGroup> = (0..5).map(|i| group(&format!("L{i}"), &slots)).collect();

        let limited = BacktrackingSolver::with_config(SolverConfig::new().with_max_steps(2));
        let report = limited.solve(&groups).unwrap();
        assert_eq!(report.outcome, ScheduleOutcome::Aborted { steps: 2 });

        let unlimited = BacktrackingSolver::new().solve(&groups).unwrap();
        assert_eq!(unlimited.outcome, ScheduleOutcome::Infeasible);
        assert_eq!(unlimited.stats.nodes, 3);
    }

    #[test]
    fn test_zero_budget_still_solves_empty_input() {
        let solver = BacktrackingSolver::with_config(SolverConfig::new().with_max_steps(0));
        assert!(solver.solve(&[]).unwrap().outcome.is_feasible());
    }

    #[test]
    fn test_invalid_input_is_an_error_not_infeasible() {
        let groups = vec![LectureGroup::new("Math")];
        let err = compute_schedule(&groups).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(ref problems) if problems.len() == 1));
    }

    #[test]
    fn test_many_disjoint_groups_do_not_exhaust_stack() {
        // One-minute singleton sessions spread over the week, all disjoint.
        let groups: Vec<LectureGroup> = (0..10_000u16)
            .map(|i| {
                let day = Weekday::ALL[usize::from(i / 1439)];
                let minute = i % 1439;
                let name = format!("L{}-{minute}", day.index());
                LectureGroup::new(&name).with_session(Session::new(
                    &name,
                    day,
                    TimeOfDay::from_minutes(minute).unwrap(),
                    TimeOfDay::from_minutes(minute + 1).unwrap(),
                ))
            })
            .collect();

        let report = BacktrackingSolver::new().solve(&groups).unwrap();
        let schedule = report.outcome.into_schedule().unwrap();
        assert_eq!(schedule.len(), 10_000);
        assert_eq!(report.stats.nodes, 10_000);
        assert_eq!(report.stats.backtracks, 0);
    }

    #[test]
    fn test_solver_is_reusable() {
        let solver = BacktrackingSolver::new();
        let groups = vec![group("Math", &[("Monday", "09:00", "10:00")])];
        let first = solver.solve(&groups).unwrap();
        let second = solver.solve(&groups).unwrap();
        assert_eq!(first, second);
    }
}
