//! Input validation for timetable generation.
//!
//! Checks structural integrity of requirements against master data before
//! generation. Detects:
//! - Duplicate IDs in master data and requirements
//! - Dangling references (class, subject, teacher)
//! - Inactive teachers
//! - Period counts that are zero or exceed the weekly grid
//! - Subjects whose required room type no room satisfies
//! - (class, subject) pairs claimed by more than one requirement
//!
//! Successful validation is the precondition the generator assumes.

use std::collections::{HashMap, HashSet};

use crate::models::{MasterData, Requirement};

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
    /// Two entities share the same ID.
    DuplicateId,
    /// A requirement references an id not present in master data.
    UnknownReference,
    /// A requirement references an inactive teacher.
    InactiveTeacher,
    /// Periods per week is zero or exceeds the weekly grid.
    InvalidPeriodCount,
    /// A subject requires a room type no room provides.
    UnsatisfiableRoomType,
    /// Two requirements claim the same (class, subject) pair.
    ConflictingRequirement,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates requirements against the supplied master data.
///
/// All violations are collected; the caller gets the complete picture in
/// one pass rather than fixing errors one at a time.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate(requirements: &[Requirement], master: &MasterData) -> ValidationResult {
    let mut errors = Vec::new();

    check_master_duplicates(master, &mut errors);

    let slot_count = master.time_slots.len();

    let mut requirement_ids = HashSet::new();
    let mut pair_owner: HashMap<(&str, &str), &str> = HashMap::new();

    for req in requirements {
        if !requirement_ids.insert(req.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate requirement ID: {}", req.id),
            ));
        }

        if master.class_group(&req.class_id).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownReference,
                format!("Requirement '{}' references unknown class '{}'", req.id, req.class_id),
            ));
        }

        match master.teacher(&req.teacher_id) {
            None => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!(
                        "Requirement '{}' references unknown teacher '{}'",
                        req.id, req.teacher_id
                    ),
                ));
            }
            Some(teacher) if !teacher.active => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InactiveTeacher,
                    format!(
                        "Requirement '{}' references inactive teacher '{}'",
                        req.id, req.teacher_id
                    ),
                ));
            }
            Some(_) => {}
        }

        match master.subject(&req.subject_id) {
            None => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!(
                        "Requirement '{}' references unknown subject '{}'",
                        req.id, req.subject_id
                    ),
                ));
            }
            Some(subject) => {
                if let Some(required) = &subject.required_room_type {
                    let satisfiable = master.rooms.iter().any(|r| r.room_type == *required);
                    if !satisfiable {
                        errors.push(ValidationError::new(
                            ValidationErrorKind::UnsatisfiableRoomType,
                            format!(
                                "Subject '{}' requires a room type no room provides",
                                subject.id
                            ),
                        ));
                    }
                }
            }
        }

        if req.periods_per_week == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPeriodCount,
                format!("Requirement '{}' has zero periods per week", req.id),
            ));
        } else if req.periods_per_week as usize > slot_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPeriodCount,
                format!(
                    "Requirement '{}' needs {} periods but the week has only {} slots",
                    req.id, req.periods_per_week, slot_count
                ),
            ));
        }

        // One teacher per (class, subject) pair. A second requirement for
        // the same pair is rejected whether or not the teacher matches.
        let pair = (req.class_id.as_str(), req.subject_id.as_str());
        if let Some(other) = pair_owner.insert(pair, req.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ConflictingRequirement,
                format!(
                    "Requirements '{}' and '{}' both cover class '{}' subject '{}'",
                    other, req.id, req.class_id, req.subject_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_master_duplicates(master: &MasterData, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for t in &master.teachers {
        if !seen.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for r in &master.rooms {
        if !seen.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for s in &master.subjects {
        if !seen.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for c in &master.classes {
        if !seen.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate class ID: {}", c.id),
            ));
        }
    }

    let mut seen = HashSet::new();
    for s in &master.time_slots {
        if !seen.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate time slot ID: {}", s.id),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassGroup, DayOfWeek, Room, RoomType, Subject, Teacher, TimeSlot};

    fn sample_master() -> MasterData {
        MasterData::new()
            .with_teacher(Teacher::new("t1", "MAT01"))
            .with_teacher(Teacher::new("t2", "ENG01"))
            .with_room(Room::regular("r1").with_capacity(30))
            .with_room(Room::lab("lab1").with_capacity(24))
            .with_subject(Subject::new("math"))
            .with_subject(Subject::new("chem").with_required_room_type(RoomType::Lab))
            .with_class(ClassGroup::new("7b").with_size(28))
            .with_time_slot(TimeSlot::new("mon-0", DayOfWeek::Monday, 0))
            .with_time_slot(TimeSlot::new("mon-1", DayOfWeek::Monday, 1))
            .with_time_slot(TimeSlot::new("tue-0", DayOfWeek::Tuesday, 0))
    }

    #[test]
    fn test_valid_input() {
        let reqs = vec![
            Requirement::new("req1", "7b", "math", "t1").with_periods_per_week(2),
            Requirement::new("req2", "7b", "chem", "t2"),
        ];
        assert!(validate(&reqs, &sample_master()).is_ok());
    }

    #[test]
    fn test_unknown_references() {
        let reqs = vec![Requirement::new("req1", "9z", "latin", "t9")];
        let errors = validate(&reqs, &sample_master()).unwrap_err();
        let unknown = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::UnknownReference)
            .count();
        assert_eq!(unknown, 3); // class, subject, teacher
    }

    #[test]
    fn test_inactive_teacher() {
        let master = sample_master().with_teacher(Teacher::new("t3", "OLD01").inactive());
        let reqs = vec![Requirement::new("req1", "7b", "math", "t3")];
        let errors = validate(&reqs, &master).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InactiveTeacher));
    }

    #[test]
    fn test_zero_periods() {
        let reqs = vec![Requirement::new("req1", "7b", "math", "t1").with_periods_per_week(0)];
        let errors = validate(&reqs, &sample_master()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPeriodCount));
    }

    #[test]
    fn test_periods_exceed_week() {
        let reqs = vec![Requirement::new("req1", "7b", "math", "t1").with_periods_per_week(4)];
        // Week has only 3 slots
        let errors = validate(&reqs, &sample_master()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPeriodCount));
    }

    #[test]
    fn test_unsatisfiable_room_type() {
        let master = MasterData::new()
            .with_teacher(Teacher::new("t1", "PE01"))
            .with_room(Room::regular("r1"))
            .with_subject(Subject::new("pe").with_required_room_type(RoomType::Gym))
            .with_class(ClassGroup::new("7b"))
            .with_time_slot(TimeSlot::new("mon-0", DayOfWeek::Monday, 0));
        let reqs = vec![Requirement::new("req1", "7b", "pe", "t1")];
        let errors = validate(&reqs, &master).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnsatisfiableRoomType));
    }

    #[test]
    fn test_conflicting_class_subject_pair() {
        let reqs = vec![
            Requirement::new("req1", "7b", "math", "t1"),
            Requirement::new("req2", "7b", "math", "t2"),
        ];
        let errors = validate(&reqs, &sample_master()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ConflictingRequirement));
    }

    #[test]
    fn test_duplicate_master_ids() {
        let master = sample_master().with_room(Room::regular("r1"));
        let errors = validate(&[], &master).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let reqs = vec![
            Requirement::new("req1", "7b", "math", "t1").with_periods_per_week(0),
            Requirement::new("req1", "9z", "math", "t1"),
        ];
        let errors = validate(&reqs, &sample_master()).unwrap_err();
        assert!(errors.len() >= 3); // zero periods, duplicate id, unknown class
    }
}
