//! Master data container.
//!
//! The surrounding application owns teachers, rooms, subjects, class groups,
//! and the weekly slot grid; it hands them to the engine in full on every
//! call. The engine never stores them between calls.

use serde::{Deserialize, Serialize};

use super::{ClassGroup, Room, Subject, Teacher, TimeSlot};

/// The reference-data universe for one engine call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MasterData {
    /// Teaching staff.
    pub teachers: Vec<Teacher>,
    /// Available rooms.
    pub rooms: Vec<Room>,
    /// Taught subjects.
    pub subjects: Vec<Subject>,
    /// Student groups.
    pub classes: Vec<ClassGroup>,
    /// The fixed weekly slot grid.
    pub time_slots: Vec<TimeSlot>,
}

impl MasterData {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Adds a class group.
    pub fn with_class(mut self, class: ClassGroup) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds a time slot.
    pub fn with_time_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Finds a teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Finds a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Finds a subject by id.
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Finds a class group by id.
    pub fn class_group(&self, id: &str) -> Option<&ClassGroup> {
        self.classes.iter().find(|c| c.id == id)
    }

    /// Finds a time slot by id.
    pub fn time_slot(&self, id: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.id == id)
    }

    /// Time slots in canonical week order: (day, period) ascending.
    pub fn time_slots_in_week_order(&self) -> Vec<&TimeSlot> {
        let mut slots: Vec<&TimeSlot> = self.time_slots.iter().collect();
        slots.sort_by_key(|s| (s.week_position(), s.id.clone()));
        slots
    }

    /// Rooms in ascending id order.
    pub fn rooms_in_id_order(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.iter().collect();
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayOfWeek;

    fn sample_master() -> MasterData {
        MasterData::new()
            .with_teacher(Teacher::new("t1", "MAT01"))
            .with_room(Room::regular("r2"))
            .with_room(Room::regular("r1"))
            .with_subject(Subject::new("math"))
            .with_class(ClassGroup::new("7b"))
            .with_time_slot(TimeSlot::new("tue-1", DayOfWeek::Tuesday, 1))
            .with_time_slot(TimeSlot::new("mon-1", DayOfWeek::Monday, 1))
            .with_time_slot(TimeSlot::new("mon-0", DayOfWeek::Monday, 0))
    }

    #[test]
    fn test_lookups() {
        let m = sample_master();
        assert!(m.teacher("t1").is_some());
        assert!(m.teacher("t9").is_none());
        assert!(m.room("r1").is_some());
        assert!(m.subject("math").is_some());
        assert!(m.class_group("7b").is_some());
        assert!(m.time_slot("mon-1").is_some());
    }

    #[test]
    fn test_week_order() {
        let m = sample_master();
        let slots: Vec<&str> = m
            .time_slots_in_week_order()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(slots, vec!["mon-0", "mon-1", "tue-1"]);
    }

    #[test]
    fn test_room_id_order() {
        let m = sample_master();
        let rooms: Vec<&str> = m.rooms_in_id_order().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(rooms, vec!["r1", "r2"]);
    }
}
