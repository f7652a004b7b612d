//! Solver configuration.
//!
//! Loadable from TOML:
//!
//! ```
//! use u_timetable::solver::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str("max_steps = 10000").unwrap();
//! assert_eq!(config.max_steps, Some(10_000));
//! assert!(config.sort_by_start);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Backtracking search settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Maximum number of tentative picks before the search gives up.
    /// `None` = unbounded.
    pub max_steps: Option<u64>,
    /// Try earlier-starting sessions first within each group.
    /// Ties keep input order.
    pub sort_by_start: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_steps: None,
            sort_by_start: true,
        }
    }
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the step budget.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Enables or disables the start-time ordering heuristic.
    pub fn with_sort_by_start(mut self, sort_by_start: bool) -> Self {
        self.sort_by_start = sort_by_start;
        self
    }

    /// Parses a configuration from TOML. Missing keys take defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ScheduleError> {
        Ok(toml::from_str(input)?)
    }
}
