//! Input validation for timetabling problems.
//!
//! Checks structural integrity of lecture groups before searching.
//! Detects:
//! - Blank lecture names
//! - Empty groups
//! - Two groups for the same lecture
//! - Sessions filed under the wrong group
//! - Sessions whose end time is not after their start time
//!
//! Malformed times and day names never reach this point: they are
//! rejected when a [`Session`](crate::models::Session) is parsed.

use crate::models::{LectureGroup, LectureId};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A group or session has a blank lecture name.
    EmptyLectureName,
    /// A group has no sessions.
    EmptyGroup,
    /// Two groups share the same lecture id.
    DuplicateGroup,
    /// A session's or the group name's lecture id differs from the group's.
    MismatchedLecture,
    /// A session does not end after it starts.
    InvalidTimeRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the lecture groups of a timetabling problem.
///
/// Checks:
/// 1. Every group has a non-blank lecture name
/// 2. Every group has at least one session
/// 3. No two groups share a lecture id
/// 4. Every group's display name normalizes to its id
/// 5. Every session belongs to its group's lecture
/// 6. Every session has `start_time < end_time`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_groups(groups: &[LectureGroup]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for group in groups {
        if group.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyLectureName,
                "Lecture group has a blank name",
            ));
        }

        if LectureId::from_name(&group.name) != group.id {
            errors.push(ValidationError::new(
                ValidationErrorKind::MismatchedLecture,
                format!(
                    "Lecture group '{}' is keyed as '{}'",
                    group.name, group.id
                ),
            ));
        }

        if group.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyGroup,
                format!("Lecture '{}' has no sessions", group.name),
            ));
        }

        if !seen.insert(&group.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateGroup,
                format!("Lecture '{}' appears in more than one group", group.name),
            ));
        }

        for session in &group.sessions {
            if session.lecture_id() != group.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MismatchedLecture,
                    format!(
                        "Session '{}' is filed under lecture '{}'",
                        session, group.name
                    ),
                ));
            }

            if !session.has_valid_range() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidTimeRange,
                    format!("Session '{session}' does not end after it starts"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
