//! Manual schedule editing.
//!
//! Operators adjust a generated timetable one cell at a time: move an
//! assignment to another room or slot, or accept a known conflict via the
//! override flag. An edit touches exactly one assignment; everything else
//! in the schedule is left alone, and the full conflict list is recomputed
//! so the caller always sees ground truth.
//!
//! Edits to one schedule are serialized by the `&mut Schedule` borrow.
//! Stale edits (based on an outdated revision) are rejected with
//! `EngineError::ConcurrentEdit`; the caller refetches and retries.

use log::debug;

use crate::conflicts;
use crate::error::EngineError;
use crate::index::{ResourceKind, SlotIndex};
use crate::models::{Assignment, Conflict, MasterData, Room, RoomType, Schedule};

/// One operator-directed change to one assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRequest {
    /// Target assignment.
    pub assignment_id: String,
    /// New room, if the cell is moving.
    pub new_room: Option<String>,
    /// New time slot, if the cell is moving.
    pub new_slot: Option<String>,
    /// New override flag, if the operator is changing it.
    pub override_conflict: Option<bool>,
    /// Schedule revision the edit is based on.
    pub expected_revision: u64,
}

impl EditRequest {
    /// Creates an edit for the given assignment, based on the schedule
    /// revision the caller last saw.
    pub fn new(assignment_id: impl Into<String>, expected_revision: u64) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            new_room: None,
            new_slot: None,
            override_conflict: None,
            expected_revision,
        }
    }

    /// Moves the assignment to another room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.new_room = Some(room_id.into());
        self
    }

    /// Moves the assignment to another time slot.
    pub fn with_slot(mut self, slot_id: impl Into<String>) -> Self {
        self.new_slot = Some(slot_id.into());
        self
    }

    /// Sets or clears the override flag.
    pub fn with_override(mut self, accept: bool) -> Self {
        self.override_conflict = Some(accept);
        self
    }
}

/// Result of a successful edit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// The updated assignment.
    pub assignment: Assignment,
    /// The full recomputed conflict list for the schedule.
    pub conflicts: Vec<Conflict>,
}

/// An editing session over one schedule.
///
/// Rebuilds the slot index once at construction and keeps it current
/// across edits, so repeated edits do not rescan the schedule.
#[derive(Debug)]
pub struct ScheduleEditor<'a> {
    schedule: &'a mut Schedule,
    master: &'a MasterData,
    index: SlotIndex,
}

impl<'a> ScheduleEditor<'a> {
    /// Opens an editing session.
    pub fn new(schedule: &'a mut Schedule, master: &'a MasterData) -> Self {
        let index = SlotIndex::from_assignments(&schedule.assignments);
        Self {
            schedule,
            master,
            index,
        }
    }

    /// Applies one edit to one assignment.
    ///
    /// On success the target's `manually_edited` flag is set, the schedule
    /// revision is bumped, and the full conflict list is returned. If the
    /// edited cell ends up conflict-free, its override flag is cleared:
    /// an override tolerates a specific known conflict, it is not a
    /// permanent pin.
    ///
    /// # Errors
    /// `ConcurrentEdit` on a stale revision, `UnknownReference` on an
    /// unresolvable room or slot id, `AssignmentNotFound` on a missing
    /// target. Nothing is mutated on any error.
    pub fn apply(&mut self, request: &EditRequest) -> Result<EditOutcome, EngineError> {
        if request.expected_revision != self.schedule.revision {
            return Err(EngineError::ConcurrentEdit {
                schedule_id: self.schedule.id.clone(),
                expected: request.expected_revision,
                actual: self.schedule.revision,
            });
        }
        if let Some(room_id) = &request.new_room {
            if self.master.room(room_id).is_none() {
                return Err(EngineError::UnknownReference {
                    entity: "room",
                    id: room_id.clone(),
                });
            }
        }
        if let Some(slot_id) = &request.new_slot {
            if self.master.time_slot(slot_id).is_none() {
                return Err(EngineError::UnknownReference {
                    entity: "time slot",
                    id: slot_id.clone(),
                });
            }
        }
        let pos = self
            .schedule
            .assignments
            .iter()
            .position(|a| a.id == request.assignment_id)
            .ok_or_else(|| EngineError::AssignmentNotFound(request.assignment_id.clone()))?;

        let old = self.schedule.assignments[pos].clone();
        self.index.remove(&old);

        {
            let target = &mut self.schedule.assignments[pos];
            if let Some(room_id) = &request.new_room {
                target.room_id = room_id.clone();
            }
            if let Some(slot_id) = &request.new_slot {
                target.time_slot_id = slot_id.clone();
            }
            if let Some(accept) = request.override_conflict {
                target.override_conflict = accept;
            }
            target.manually_edited = true;
        }
        self.index.insert(&self.schedule.assignments[pos]);
        self.schedule.revision += 1;

        debug!(
            "edited assignment '{}' in schedule '{}' (revision {})",
            request.assignment_id, self.schedule.id, self.schedule.revision
        );

        let conflicts = conflicts::detect(&self.schedule.assignments, self.master);
        if !conflicts.iter().any(|c| c.involves(&request.assignment_id)) {
            self.schedule.assignments[pos].override_conflict = false;
        }

        Ok(EditOutcome {
            assignment: self.schedule.assignments[pos].clone(),
            conflicts,
        })
    }

    /// Rooms still free in the given slot, in id order, optionally
    /// filtered by room type. The edit UI uses this to offer move targets.
    pub fn free_rooms_at(&self, slot_id: &str, required_type: Option<&RoomType>) -> Vec<&Room> {
        self.master
            .rooms_in_id_order()
            .into_iter()
            .filter(|room| match required_type {
                Some(required) => room.room_type == *required,
                None => true,
            })
            .filter(|room| self.index.is_free(ResourceKind::Room, &room.id, slot_id))
            .collect()
    }

    /// Current schedule revision.
    pub fn revision(&self) -> u64 {
        self.schedule.revision
    }
}
