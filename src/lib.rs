//! Weekly lecture timetabling for the U-Engine ecosystem.
//!
//! Given candidate sessions for each lecture, picks exactly one session per
//! lecture such that no two picked sessions overlap on the same day, or
//! reports that no such timetable exists.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Session`, `LectureGroup`, `LectureId`,
//!   `Weekday`, `TimeOfDay`, `Schedule`
//! - **`solver`**: Overlap test and backtracking search (`compute_schedule`)
//! - **`catalog`**: Session registry that maintains lecture groups
//! - **`validation`**: Input integrity checks (empty/duplicate groups, bad ranges)
//! - **`error`**: `ScheduleError` for malformed input
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{LectureGroup, Session};
//! use u_timetable::solver::{compute_schedule, ScheduleOutcome};
//!
//! let groups = vec![
//!     LectureGroup::new("Math")
//!         .with_session(Session::parse("Math", "Monday", "09:00", "10:00").unwrap()),
//!     LectureGroup::new("Physics")
//!         .with_session(Session::parse("Physics", "Monday", "10:00", "11:00").unwrap()),
//! ];
//!
//! match compute_schedule(&groups).unwrap() {
//!     ScheduleOutcome::Feasible(schedule) => assert_eq!(schedule.len(), 2),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod catalog;
pub mod error;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::{Result, ScheduleError};
