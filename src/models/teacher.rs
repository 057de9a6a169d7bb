//! Teacher model.
//!
//! Teachers are master data owned by the surrounding application and
//! referenced by id from requirements and assignments. The engine only
//! needs identity, the active flag, and the slots a teacher cannot teach.

use serde::{Deserialize, Serialize};

/// A teacher available for weekly requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Short staff code (e.g. "MAT01").
    pub code: String,
    /// Subject area the teacher is qualified for.
    pub specialization: String,
    /// Inactive teachers cannot appear in requirements.
    pub active: bool,
    /// Time slot ids in which this teacher cannot teach.
    pub unavailable_slots: Vec<String>,
}

impl Teacher {
    /// Creates a new active teacher.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            specialization: String::new(),
            active: true,
            unavailable_slots: Vec::new(),
        }
    }

    /// Sets the specialization.
    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    /// Marks the teacher inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Marks a slot as unavailable for this teacher.
    pub fn with_unavailable_slot(mut self, slot_id: impl Into<String>) -> Self {
        self.unavailable_slots.push(slot_id.into());
        self
    }

    /// Whether the teacher can teach in the given slot.
    pub fn is_available_in(&self, slot_id: &str) -> bool {
        !self.unavailable_slots.iter().any(|s| s == slot_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("t1", "MAT01")
            .with_specialization("Mathematics")
            .with_unavailable_slot("fri-5");

        assert_eq!(t.id, "t1");
        assert_eq!(t.code, "MAT01");
        assert_eq!(t.specialization, "Mathematics");
        assert!(t.active);
        assert!(t.is_available_in("mon-1"));
        assert!(!t.is_available_in("fri-5"));
    }

    #[test]
    fn test_inactive() {
        let t = Teacher::new("t1", "MAT01").inactive();
        assert!(!t.active);
    }
}
