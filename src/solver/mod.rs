//! Timetable search.
//!
//! Picks exactly one session from every lecture group such that no two
//! picked sessions overlap on the same day.
//!
//! # Components
//!
//! - [`overlaps`]: the pairwise conflict test (same day, intersecting
//!   half-open time ranges).
//! - [`BacktrackingSolver`]: depth-first search with overlap pruning.
//!   Returns the first valid timetable, not a "best" one.
//! - [`SolverConfig`]: step budget and ordering heuristic.

mod backtracking;
mod config;
mod overlap;

#[cfg(test)]
mod proptests;

pub use backtracking::{
    compute_schedule, BacktrackingSolver, ScheduleOutcome, SearchStats, SolveReport,
};
pub use config::SolverConfig;
pub use overlap::overlaps;
