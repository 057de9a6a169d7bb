//! Slot occupancy index.
//!
//! Derived, queryable occupancy maps (teacher, room, class → busy slots)
//! over a set of assignments. The generator mutates one incrementally while
//! searching (insert on tentative placement, remove on backtrack); the
//! editor rebuilds one per editing session. Conflict checks against it are
//! O(1) map lookups, never linear scans.

use std::collections::HashMap;

use crate::models::Assignment;

/// The resource dimensions the index tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Teacher,
    Room,
    Class,
}

/// Occupancy of (resource, slot) cells by assignment id.
///
/// Each cell tracks at most one occupant. Callers that may legally collide
/// (override assignments) read ground truth from the conflict detector, not
/// from the index.
#[derive(Debug, Clone, Default)]
pub struct SlotIndex {
    teachers: HashMap<String, HashMap<String, String>>,
    rooms: HashMap<String, HashMap<String, String>>,
    classes: HashMap<String, HashMap<String, String>>,
}

impl SlotIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from existing assignments.
    ///
    /// Later assignments win a cell when the input already collides; the
    /// conflict detector reports such collisions independently.
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        let mut index = Self::new();
        for a in assignments {
            index.insert(a);
        }
        index
    }

    /// Records an assignment in all three dimensions.
    pub fn insert(&mut self, assignment: &Assignment) {
        self.teachers
            .entry(assignment.teacher_id.clone())
            .or_default()
            .insert(assignment.time_slot_id.clone(), assignment.id.clone());
        self.rooms
            .entry(assignment.room_id.clone())
            .or_default()
            .insert(assignment.time_slot_id.clone(), assignment.id.clone());
        self.classes
            .entry(assignment.class_id.clone())
            .or_default()
            .insert(assignment.time_slot_id.clone(), assignment.id.clone());
    }

    /// Removes an assignment's entries.
    ///
    /// A cell is only cleared while it is still owned by this assignment's
    /// id, so removing a stale record cannot evict a newer occupant.
    pub fn remove(&mut self, assignment: &Assignment) {
        Self::remove_entry(
            &mut self.teachers,
            &assignment.teacher_id,
            &assignment.time_slot_id,
            &assignment.id,
        );
        Self::remove_entry(
            &mut self.rooms,
            &assignment.room_id,
            &assignment.time_slot_id,
            &assignment.id,
        );
        Self::remove_entry(
            &mut self.classes,
            &assignment.class_id,
            &assignment.time_slot_id,
            &assignment.id,
        );
    }

    /// Whether the (resource, slot) cell is unoccupied.
    #[inline]
    pub fn is_free(&self, kind: ResourceKind, resource_id: &str, slot_id: &str) -> bool {
        self.occupied_by(kind, resource_id, slot_id).is_none()
    }

    /// The assignment occupying the (resource, slot) cell, if any.
    #[inline]
    pub fn occupied_by(
        &self,
        kind: ResourceKind,
        resource_id: &str,
        slot_id: &str,
    ) -> Option<&str> {
        self.map(kind)
            .get(resource_id)
            .and_then(|slots| slots.get(slot_id))
            .map(String::as_str)
    }

    /// Total number of occupied cells across all dimensions.
    pub fn len(&self) -> usize {
        [&self.teachers, &self.rooms, &self.classes]
            .iter()
            .flat_map(|m| m.values())
            .map(HashMap::len)
            .sum()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn map(&self, kind: ResourceKind) -> &HashMap<String, HashMap<String, String>> {
        match kind {
            ResourceKind::Teacher => &self.teachers,
            ResourceKind::Room => &self.rooms,
            ResourceKind::Class => &self.classes,
        }
    }

    fn remove_entry(
        map: &mut HashMap<String, HashMap<String, String>>,
        resource_id: &str,
        slot_id: &str,
        assignment_id: &str,
    ) {
        if let Some(slots) = map.get_mut(resource_id) {
            if slots.get(slot_id).map(String::as_str) == Some(assignment_id) {
                slots.remove(slot_id);
            }
        }
    }
}
