//! Subject model.

use serde::{Deserialize, Serialize};

use super::RoomType;

/// A taught subject.
///
/// A subject may require a specific room type (chemistry needs a lab,
/// physical education needs a gym). `None` means any room is acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Required room type, if any.
    pub required_room_type: Option<RoomType>,
}

impl Subject {
    /// Creates a new subject with no room requirement.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            required_room_type: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Requires a specific room type.
    pub fn with_required_room_type(mut self, room_type: RoomType) -> Self {
        self.required_room_type = Some(room_type);
        self
    }

    /// Whether the given room type satisfies this subject.
    pub fn accepts_room_type(&self, room_type: &RoomType) -> bool {
        match &self.required_room_type {
            None => true,
            Some(required) => required == room_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_without_requirement_accepts_any_room() {
        let s = Subject::new("math").with_name("Mathematics");
        assert!(s.accepts_room_type(&RoomType::Regular));
        assert!(s.accepts_room_type(&RoomType::Lab));
    }

    #[test]
    fn test_subject_with_requirement() {
        let s = Subject::new("chem").with_required_room_type(RoomType::Lab);
        assert!(s.accepts_room_type(&RoomType::Lab));
        assert!(!s.accepts_room_type(&RoomType::Regular));
    }
}
