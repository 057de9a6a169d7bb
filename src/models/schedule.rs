//! Schedule and assignment models.
//!
//! An assignment is one placed teaching period: (class, subject, teacher,
//! room, time slot). A schedule is the identified collection of assignments
//! for one academic period. Schedules are generated wholesale or mutated
//! one cell at a time by the editor; they are never partially regenerated.

use serde::{Deserialize, Serialize};

/// One placed teaching period.
///
/// The uniqueness rules (no two assignments share a class, teacher, or room
/// in the same slot) are not enforced by this type. The conflict detector
/// reports violations; an assignment carrying `override_conflict` downgrades
/// its collisions instead of being rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment identifier.
    pub id: String,
    /// Owning schedule.
    pub schedule_id: String,
    /// Class group attending.
    pub class_id: String,
    /// Subject taught.
    pub subject_id: String,
    /// Teacher delivering the period.
    pub teacher_id: String,
    /// Room the period takes place in.
    pub room_id: String,
    /// Weekly time slot.
    pub time_slot_id: String,
    /// Set once an operator has touched this cell.
    pub manually_edited: bool,
    /// Operator explicitly accepted a conflict on this cell.
    pub override_conflict: bool,
}

impl Assignment {
    /// Creates a new assignment.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        schedule_id: impl Into<String>,
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
        room_id: impl Into<String>,
        time_slot_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            schedule_id: schedule_id.into(),
            class_id: class_id.into(),
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            room_id: room_id.into(),
            time_slot_id: time_slot_id.into(),
            manually_edited: false,
            override_conflict: false,
        }
    }

    /// Marks the cell as operator-accepted despite a known conflict.
    pub fn with_override(mut self) -> Self {
        self.override_conflict = true;
        self
    }
}

/// A weekly timetable for one academic period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique schedule identifier.
    pub id: String,
    /// Optimistic-concurrency token, bumped by every successful edit.
    pub revision: u64,
    /// Placed assignments, in placement order.
    pub assignments: Vec<Assignment>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            revision: 0,
            assignments: Vec::new(),
        }
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Finds an assignment by id.
    pub fn assignment(&self, assignment_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == assignment_id)
    }

    /// Returns all assignments for a class group.
    pub fn assignments_for_class(&self, class_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.class_id == class_id)
            .collect()
    }

    /// Returns all assignments for a teacher.
    pub fn assignments_for_teacher(&self, teacher_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.teacher_id == teacher_id)
            .collect()
    }

    /// Returns all assignments in a time slot.
    pub fn assignments_in_slot(&self, time_slot_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.time_slot_id == time_slot_id)
            .collect()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
