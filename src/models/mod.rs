//! Timetabling domain models.
//!
//! Provides the data types for lecture timetabling problems and their
//! solutions.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training Center | Sports Club |
//! |-------------|------------|-----------------|-------------|
//! | Session | Lecture slot | Course run | Practice slot |
//! | LectureGroup | Course | Workshop | Team |
//! | Schedule | Student timetable | Trainee plan | Weekly roster |

mod schedule;
mod session;
mod time;
mod weekday;

pub use schedule::Schedule;
pub use session::{LectureGroup, LectureId, Session};
pub use time::{to_minutes, TimeOfDay, MINUTES_PER_DAY};
pub use weekday::Weekday;
