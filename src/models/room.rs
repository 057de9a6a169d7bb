//! Room model.
//!
//! Rooms are master data referenced by id. The room type gates which
//! subjects may be placed in a room; capacity gates which class groups fit.

use serde::{Deserialize, Serialize};

/// A room that teaching periods can be placed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Room classification.
    pub room_type: RoomType,
    /// Seat count. 0 means unknown and disables capacity checks.
    pub capacity: u32,
}

/// Room type classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// Ordinary classroom.
    Regular,
    /// Science or computer laboratory.
    Lab,
    /// Gymnasium or sports hall.
    Gym,
    /// Domain-specific type (e.g. "music", "workshop").
    Custom(String),
}

impl Room {
    /// Creates a new room of the given type.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            room_type,
            capacity: 0,
        }
    }

    /// Creates a regular classroom.
    pub fn regular(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Regular)
    }

    /// Creates a laboratory.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Lab)
    }

    /// Creates a gymnasium.
    pub fn gym(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Gym)
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether a class group of the given size fits.
    ///
    /// Unknown capacity (0) or unknown class size (0) always fits.
    pub fn fits(&self, class_size: u32) -> bool {
        self.capacity == 0 || class_size == 0 || class_size <= self.capacity
    }
}
