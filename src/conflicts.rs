//! Conflict detection.
//!
//! `detect` is a pure function over an assignment list and master data. It
//! never fails: a malformed assignment (dangling id) becomes an
//! `UnknownReference` conflict entry instead of aborting the pass, so one
//! bad record cannot hide the real conflicts.
//!
//! Output order is deterministic: sorted by (kind, lower assignment id,
//! higher assignment id, message). Two calls on identical input produce
//! identical output, which the editor relies on for change diffs.

use std::collections::HashMap;

use crate::models::{Assignment, Conflict, ConflictKind, MasterData, Severity};

/// Detects every conflict in the given assignments.
///
/// Double bookings are reported per colliding pair. A pair where both sides
/// carry `override_conflict` is exempt; a pair where exactly one side does
/// is downgraded to `Warning`. Single-assignment conflicts (room mismatch,
/// capacity, availability) are downgraded by that assignment's own flag.
pub fn detect(assignments: &[Assignment], master: &MasterData) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    let teachers: HashMap<&str, _> = master.teachers.iter().map(|t| (t.id.as_str(), t)).collect();
    let rooms: HashMap<&str, _> = master.rooms.iter().map(|r| (r.id.as_str(), r)).collect();
    let subjects: HashMap<&str, _> = master.subjects.iter().map(|s| (s.id.as_str(), s)).collect();
    let classes: HashMap<&str, _> = master.classes.iter().map(|c| (c.id.as_str(), c)).collect();
    let slots: HashMap<&str, _> = master.time_slots.iter().map(|s| (s.id.as_str(), s)).collect();

    for a in assignments {
        let teacher = teachers.get(a.teacher_id.as_str()).copied();
        let room = rooms.get(a.room_id.as_str()).copied();
        let subject = subjects.get(a.subject_id.as_str()).copied();
        let class = classes.get(a.class_id.as_str()).copied();

        for (entity, id, resolved) in [
            ("teacher", &a.teacher_id, teacher.is_some()),
            ("room", &a.room_id, room.is_some()),
            ("subject", &a.subject_id, subject.is_some()),
            ("class", &a.class_id, class.is_some()),
            ("time slot", &a.time_slot_id, slots.contains_key(a.time_slot_id.as_str())),
        ] {
            if !resolved {
                conflicts.push(Conflict::single(
                    ConflictKind::UnknownReference,
                    Severity::Blocking,
                    &a.id,
                    format!("Assignment '{}' references unknown {} '{}'", a.id, entity, id),
                ));
            }
        }

        let severity = if a.override_conflict {
            Severity::Warning
        } else {
            Severity::Blocking
        };

        if let (Some(subject), Some(room)) = (subject, room) {
            if !subject.accepts_room_type(&room.room_type) {
                conflicts.push(Conflict::single(
                    ConflictKind::RoomTypeMismatch,
                    severity,
                    &a.id,
                    format!(
                        "Subject '{}' requires a different room type than room '{}' provides",
                        subject.id, room.id
                    ),
                ));
            }
        }

        if let (Some(class), Some(room)) = (class, room) {
            if !room.fits(class.size) {
                conflicts.push(Conflict::single(
                    ConflictKind::RoomCapacityExceeded,
                    severity,
                    &a.id,
                    format!(
                        "Class '{}' ({} students) exceeds capacity {} of room '{}'",
                        class.id, class.size, room.capacity, room.id
                    ),
                ));
            }
        }

        if let Some(teacher) = teacher {
            if !teacher.is_available_in(&a.time_slot_id) {
                conflicts.push(Conflict::single(
                    ConflictKind::TeacherUnavailable,
                    severity,
                    &a.id,
                    format!(
                        "Teacher '{}' is not available in slot '{}'",
                        teacher.id, a.time_slot_id
                    ),
                ));
            }
        }
    }

    collect_double_bookings(
        assignments,
        |a| a.teacher_id.as_str(),
        ConflictKind::TeacherDoubleBooked,
        "Teacher",
        &mut conflicts,
    );
    collect_double_bookings(
        assignments,
        |a| a.room_id.as_str(),
        ConflictKind::RoomDoubleBooked,
        "Room",
        &mut conflicts,
    );
    collect_double_bookings(
        assignments,
        |a| a.class_id.as_str(),
        ConflictKind::ClassDoubleBooked,
        "Class",
        &mut conflicts,
    );

    conflicts.sort_by(|x, y| {
        (x.kind, &x.first_assignment, &x.second_assignment, &x.message).cmp(&(
            y.kind,
            &y.first_assignment,
            &y.second_assignment,
            &y.message,
        ))
    });
    conflicts
}

/// Groups assignments by (resource, slot) and reports each colliding pair.
fn collect_double_bookings<'a>(
    assignments: &'a [Assignment],
    resource: impl Fn(&Assignment) -> &str,
    kind: ConflictKind,
    label: &str,
    out: &mut Vec<Conflict>,
) {
    let mut groups: HashMap<(&str, &str), Vec<&'a Assignment>> = HashMap::new();
    for a in assignments {
        groups
            .entry((resource(a), a.time_slot_id.as_str()))
            .or_default()
            .push(a);
    }

    for ((resource_id, slot_id), group) in groups {
        if group.len() < 2 {
            continue;
        }
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                let (a, b) = (group[i], group[j]);
                if a.override_conflict && b.override_conflict {
                    continue; // operator accepted both sides
                }
                let severity = if a.override_conflict || b.override_conflict {
                    Severity::Warning
                } else {
                    Severity::Blocking
                };
                out.push(Conflict::pair(
                    kind,
                    severity,
                    &a.id,
                    &b.id,
                    format!("{label} '{resource_id}' double-booked in slot '{slot_id}'"),
                ));
            }
        }
    }
}
