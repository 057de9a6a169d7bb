//! Engine error types.
//!
//! Only rejected input and stale edits are errors. An infeasible search is
//! a normal outcome carried in `GenerationOutcome::unmet`, and the conflict
//! detector never fails at all.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced at the engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Requirements failed validation; generation did not start.
    #[error("requirements failed validation with {} error(s)", .0.len())]
    InvalidRequirements(Vec<ValidationError>),

    /// An edit referenced an id missing from the supplied master data.
    #[error("unknown {entity} id '{id}'")]
    UnknownReference {
        /// Entity kind ("room", "time slot", ...).
        entity: &'static str,
        /// The unresolved id.
        id: String,
    },

    /// An edit targeted a schedule revision that has since changed.
    /// The caller must refetch the schedule and retry.
    #[error("schedule '{schedule_id}' is at revision {actual}, edit expected {expected}")]
    ConcurrentEdit {
        /// The schedule being edited.
        schedule_id: String,
        /// Revision the caller based the edit on.
        expected: u64,
        /// Revision the schedule is actually at.
        actual: u64,
    },

    /// An edit targeted an assignment not present in the schedule.
    #[error("assignment '{0}' not found in schedule")]
    AssignmentNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display() {
        let err = EngineError::InvalidRequirements(vec![ValidationError {
            kind: ValidationErrorKind::UnknownReference,
            message: "x".into(),
        }]);
        assert_eq!(
            err.to_string(),
            "requirements failed validation with 1 error(s)"
        );

        let err = EngineError::ConcurrentEdit {
            schedule_id: "s1".into(),
            expected: 1,
            actual: 3,
        };
        assert!(err.to_string().contains("revision 3"));
    }
}
