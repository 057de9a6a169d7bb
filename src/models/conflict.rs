//! Conflict model.
//!
//! Conflicts are derived report artifacts, recomputed on demand from the
//! current assignments. They are never persisted as a source of truth.

use serde::{Deserialize, Serialize};

/// A detected violation between assignments, or on a single assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// What rule was violated.
    pub kind: ConflictKind,
    /// Whether the violation blocks the schedule or is operator-accepted.
    pub severity: Severity,
    /// Lower offending assignment id.
    pub first_assignment: String,
    /// Higher offending assignment id. Absent for single-assignment
    /// conflicts (room mismatch, availability, dangling reference).
    pub second_assignment: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of conflicts.
///
/// Variant order defines the report order of the detector output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Same teacher placed twice in one slot.
    TeacherDoubleBooked,
    /// Same room placed twice in one slot.
    RoomDoubleBooked,
    /// Same class group placed twice in one slot.
    ClassDoubleBooked,
    /// Room type does not satisfy the subject's requirement.
    RoomTypeMismatch,
    /// Class group larger than the room's capacity.
    RoomCapacityExceeded,
    /// Teacher is not available in the assigned slot.
    TeacherUnavailable,
    /// An id on the assignment does not resolve in the supplied master data.
    UnknownReference,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Violates a hard rule; the schedule is not acceptable as-is.
    Blocking,
    /// Operator has accepted the violation via an override flag.
    Warning,
}

impl Conflict {
    /// Creates a pairwise conflict. The two ids are stored lower-first so
    /// that detection output is order-independent.
    pub fn pair(
        kind: ConflictKind,
        severity: Severity,
        a: impl Into<String>,
        b: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let (a, b) = (a.into(), b.into());
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            kind,
            severity,
            first_assignment: first,
            second_assignment: Some(second),
            message: message.into(),
        }
    }

    /// Creates a single-assignment conflict.
    pub fn single(
        kind: ConflictKind,
        severity: Severity,
        assignment_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity,
            first_assignment: assignment_id.into(),
            second_assignment: None,
            message: message.into(),
        }
    }

    /// Whether the conflict names the given assignment.
    pub fn involves(&self, assignment_id: &str) -> bool {
        self.first_assignment == assignment_id
            || self.second_assignment.as_deref() == Some(assignment_id)
    }

    /// Whether the conflict blocks the schedule.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Blocking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_normalizes_id_order() {
        let c = Conflict::pair(
            ConflictKind::TeacherDoubleBooked,
            Severity::Blocking,
            "a2",
            "a1",
            "teacher double-booked",
        );
        assert_eq!(c.first_assignment, "a1");
        assert_eq!(c.second_assignment.as_deref(), Some("a2"));
    }

    #[test]
    fn test_involves() {
        let c = Conflict::pair(
            ConflictKind::RoomDoubleBooked,
            Severity::Warning,
            "a1",
            "a2",
            "",
        );
        assert!(c.involves("a1"));
        assert!(c.involves("a2"));
        assert!(!c.involves("a3"));

        let s = Conflict::single(
            ConflictKind::TeacherUnavailable,
            Severity::Blocking,
            "a9",
            "",
        );
        assert!(s.involves("a9"));
        assert!(s.second_assignment.is_none());
    }

    #[test]
    fn test_kind_report_order() {
        assert!(ConflictKind::TeacherDoubleBooked < ConflictKind::RoomDoubleBooked);
        assert!(ConflictKind::RoomCapacityExceeded < ConflictKind::UnknownReference);
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Blocking).unwrap();
        assert_eq!(json, "\"Blocking\"");
    }
}
