//! Timetabling domain models.
//!
//! Plain value types for the school timetabling problem: reference data
//! (teachers, rooms, subjects, class groups, the weekly slot grid), the
//! weekly requirements to be placed, and the placed result (schedules,
//! assignments) with its derived conflict records.
//!
//! All types serialize with `serde`; the surrounding CRUD layer moves them
//! in and out as records, by id reference only.

mod class_group;
mod conflict;
mod master_data;
mod requirement;
mod room;
mod schedule;
mod subject;
mod teacher;
mod time_slot;

pub use class_group::ClassGroup;
pub use conflict::{Conflict, ConflictKind, Severity};
pub use master_data::MasterData;
pub use requirement::Requirement;
pub use room::{Room, RoomType};
pub use schedule::{Assignment, Schedule};
pub use subject::Subject;
pub use teacher::Teacher;
pub use time_slot::{DayOfWeek, TimeSlot};
