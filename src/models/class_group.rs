//! Class group (student group) model.

use serde::{Deserialize, Serialize};

/// A group of students that attends lessons together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassGroup {
    /// Unique class identifier.
    pub id: String,
    /// Display name (e.g. "7B").
    pub name: String,
    /// Grade or year level.
    pub grade: u32,
    /// Head count. 0 means unknown and disables room capacity checks.
    pub size: u32,
}

impl ClassGroup {
    /// Creates a new class group.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            grade: 0,
            size: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the grade level.
    pub fn with_grade(mut self, grade: u32) -> Self {
        self.grade = grade;
        self
    }

    /// Sets the head count.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_group_builder() {
        let c = ClassGroup::new("7b").with_name("7B").with_grade(7).with_size(28);
        assert_eq!(c.id, "7b");
        assert_eq!(c.name, "7B");
        assert_eq!(c.grade, 7);
        assert_eq!(c.size, 28);
    }
}
