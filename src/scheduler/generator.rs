//! Constraint-satisfaction timetable generator.
//!
//! # Algorithm
//!
//! 1. Validate requirements against master data; bad input never searches.
//! 2. Expand each requirement into periods-per-week placement tasks.
//! 3. Order requirements most-constrained-first: ascending ratio of
//!    statically valid (slot, room) pairs to periods needed.
//! 4. For each task, enumerate candidates through the slot index in the
//!    fixed order (day, period, room id) and place the first one.
//! 5. On a dead end, undo the most recent placement and advance its
//!    candidate cursor. The decision stack is explicit, so budget
//!    accounting and cancellation are plain counters over it.
//! 6. A task whose alternatives are exhausted is reported unmet; the rest
//!    of the schedule is still produced.
//!
//! The search is deterministic: identical input and budget produce
//! identical placements. Timetabling subsumes graph coloring, so the solver
//! is a bounded heuristic, not an optimality guarantee.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use std::collections::{HashMap, HashSet};

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::conflicts;
use crate::error::EngineError;
use crate::index::{ResourceKind, SlotIndex};
use crate::models::{
    Assignment, ClassGroup, Conflict, MasterData, Requirement, Room, Schedule, Subject, Teacher,
    TimeSlot,
};
use crate::validation;

use super::{CancelToken, SearchBudget};

/// One slot unit the search could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmetTask {
    /// The requirement the task belongs to.
    pub requirement_id: String,
    /// Which of the requirement's weekly periods (0-based).
    pub ordinal: u32,
}

/// Result of a generation run.
///
/// A non-empty `unmet` list is a normal outcome signaling infeasible input
/// or an exhausted budget, not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// The generated schedule (complete or partial).
    pub schedule: Schedule,
    /// Slot units that could not be placed.
    pub unmet: Vec<UnmetTask>,
    /// Conflicts detected over the generated assignments.
    pub conflicts: Vec<Conflict>,
}

/// Timetable generator.
///
/// Stateless per call: all input is passed in, all output is returned, and
/// nothing is retained between runs.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{
///     ClassGroup, DayOfWeek, MasterData, Requirement, Room, Subject, Teacher, TimeSlot,
/// };
/// use timetable_engine::scheduler::Generator;
///
/// let master = MasterData::new()
///     .with_teacher(Teacher::new("t1", "MAT01"))
///     .with_room(Room::regular("r1"))
///     .with_subject(Subject::new("math"))
///     .with_class(ClassGroup::new("7b"))
///     .with_time_slot(TimeSlot::new("mon-0", DayOfWeek::Monday, 0))
///     .with_time_slot(TimeSlot::new("mon-1", DayOfWeek::Monday, 1));
/// let requirements = vec![Requirement::new("req1", "7b", "math", "t1").with_periods_per_week(2)];
///
/// let outcome = Generator::new()
///     .generate(&requirements, &master, "2026-spring")
///     .unwrap();
/// assert_eq!(outcome.schedule.assignment_count(), 2);
/// assert!(outcome.unmet.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    budget: SearchBudget,
    cancel: Option<CancelToken>,
}

/// A slot unit to place: one weekly period of one requirement.
struct Task<'a> {
    req: &'a Requirement,
    ordinal: u32,
}

/// One decision on the backtracking stack.
struct Frame {
    task: usize,
    candidates: Vec<(usize, usize)>,
    cursor: usize,
    retries: u32,
    placed: Option<Assignment>,
}

/// Requirement references resolved once before the search.
struct Resolved<'a> {
    teacher: &'a Teacher,
    subject: &'a Subject,
    class: &'a ClassGroup,
}

impl Generator {
    /// Creates a generator with the default budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search budget.
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Sets a cancellation token, checked once per task iteration.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Generates a schedule satisfying the requirements, or the best
    /// attainable partial schedule within the budget.
    ///
    /// # Errors
    /// `EngineError::InvalidRequirements` if validation fails; the search
    /// does not start.
    pub fn generate(
        &self,
        requirements: &[Requirement],
        master: &MasterData,
        schedule_id: impl Into<String>,
    ) -> Result<GenerationOutcome, EngineError> {
        let schedule_id = schedule_id.into();
        validation::validate(requirements, master).map_err(EngineError::InvalidRequirements)?;

        let slots = master.time_slots_in_week_order();
        let rooms = master.rooms_in_id_order();
        let resolved = resolve_requirements(requirements, master);

        info!(
            "generating schedule '{}': {} requirements over {} slots and {} rooms",
            schedule_id,
            requirements.len(),
            slots.len(),
            rooms.len()
        );

        // Most constrained first, so infeasibility shows up early instead
        // of after the flexible requirements have taken the good cells.
        let empty = SlotIndex::new();
        let mut ordered: Vec<&Requirement> = requirements.iter().collect();
        let options: HashMap<&str, u64> = ordered
            .iter()
            .map(|r| {
                let n = enumerate_candidates(r, &resolved[r.id.as_str()], &slots, &rooms, &empty)
                    .len() as u64;
                (r.id.as_str(), n)
            })
            .collect();
        ordered.sort_by(|a, b| {
            let lhs = options[a.id.as_str()] * u64::from(b.periods_per_week);
            let rhs = options[b.id.as_str()] * u64::from(a.periods_per_week);
            lhs.cmp(&rhs).then_with(|| a.id.cmp(&b.id))
        });

        let tasks: Vec<Task> = ordered
            .iter()
            .copied()
            .flat_map(|r| (0..r.periods_per_week).map(move |k| Task { req: r, ordinal: k }))
            .collect();

        let mut index = SlotIndex::new();
        let mut stack: Vec<Frame> = Vec::new();
        let mut pending: Option<Frame> = None;
        let mut backtracks = 0usize;
        let mut i = 0usize;

        while i < tasks.len() {
            if self.is_cancelled() {
                warn!(
                    "generation of '{}' cancelled with {} of {} tasks placed",
                    schedule_id,
                    stack.len(),
                    tasks.len()
                );
                break;
            }

            let task = &tasks[i];
            let mut frame = match pending.take() {
                Some(frame) => frame,
                None => {
                    let candidates = enumerate_candidates(
                        task.req,
                        &resolved[task.req.id.as_str()],
                        &slots,
                        &rooms,
                        &index,
                    );
                    trace!(
                        "task {} ('{}' period {}) has {} candidates",
                        i,
                        task.req.id,
                        task.ordinal,
                        candidates.len()
                    );
                    Frame {
                        task: i,
                        candidates,
                        cursor: 0,
                        retries: 0,
                        placed: None,
                    }
                }
            };

            if let Some(&(slot_idx, room_idx)) = frame.candidates.get(frame.cursor) {
                let assignment = Assignment::new(
                    format!("{}-a{:04}", schedule_id, i),
                    &schedule_id,
                    &task.req.class_id,
                    &task.req.subject_id,
                    &task.req.teacher_id,
                    &rooms[room_idx].id,
                    &slots[slot_idx].id,
                );
                debug!(
                    "placing {} in slot '{}' room '{}'",
                    assignment.id, assignment.time_slot_id, assignment.room_id
                );
                index.insert(&assignment);
                frame.placed = Some(assignment);
                stack.push(frame);
                i += 1;
                continue;
            }

            // Dead end for task i.
            if stack.is_empty() {
                debug!(
                    "task {} ('{}' period {}) is unplaceable, skipping",
                    i, task.req.id, task.ordinal
                );
                i += 1;
                continue;
            }
            if backtracks >= self.budget.max_backtracks {
                warn!(
                    "backtrack budget ({}) exhausted for '{}', stopping search",
                    self.budget.max_backtracks, schedule_id
                );
                break;
            }
            if let Some(mut top) = stack.pop() {
                backtracks += 1;
                top.retries += 1;
                if let Some(placed) = top.placed.take() {
                    debug!("backtracking over {}", placed.id);
                    index.remove(&placed);
                }
                if top.retries > self.budget.retries_per_task {
                    warn!(
                        "task {} exceeded its retry bound ({}), stopping search",
                        top.task, self.budget.retries_per_task
                    );
                    break;
                }
                top.cursor += 1;
                i = top.task;
                pending = Some(top);
            }
        }

        let mut schedule = Schedule::new(schedule_id.clone());
        let mut placed_tasks = HashSet::new();
        for frame in stack {
            if let Some(assignment) = frame.placed {
                placed_tasks.insert(frame.task);
                schedule.add_assignment(assignment);
            }
        }

        let unmet: Vec<UnmetTask> = tasks
            .iter()
            .enumerate()
            .filter(|(t, _)| !placed_tasks.contains(t))
            .map(|(_, task)| UnmetTask {
                requirement_id: task.req.id.clone(),
                ordinal: task.ordinal,
            })
            .collect();

        let conflicts = conflicts::detect(&schedule.assignments, master);

        if unmet.is_empty() {
            info!(
                "schedule '{}' complete: {} assignments",
                schedule_id,
                schedule.assignment_count()
            );
        } else {
            warn!(
                "schedule '{}' partial: {} assignments placed, {} tasks unmet",
                schedule_id,
                schedule.assignment_count(),
                unmet.len()
            );
        }

        Ok(GenerationOutcome {
            schedule,
            unmet,
            conflicts,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

/// Resolves each requirement's references. Validation has already run, so
/// every id resolves; requirements are dropped here only if it did not.
fn resolve_requirements<'a>(
    requirements: &'a [Requirement],
    master: &'a MasterData,
) -> HashMap<&'a str, Resolved<'a>> {
    requirements
        .iter()
        .filter_map(|r| {
            let teacher = master.teacher(&r.teacher_id)?;
            let subject = master.subject(&r.subject_id)?;
            let class = master.class_group(&r.class_id)?;
            Some((
                r.id.as_str(),
                Resolved {
                    teacher,
                    subject,
                    class,
                },
            ))
        })
        .collect()
}

/// Enumerates valid (slot, room) index pairs for one period of the
/// requirement, in the fixed order (day, period, room id). Every check is
/// an O(1) index lookup or a field comparison.
fn enumerate_candidates(
    req: &Requirement,
    resolved: &Resolved<'_>,
    slots: &[&TimeSlot],
    rooms: &[&Room],
    index: &SlotIndex,
) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (slot_idx, slot) in slots.iter().enumerate() {
        if !resolved.teacher.is_available_in(&slot.id) {
            continue;
        }
        if !index.is_free(ResourceKind::Teacher, &req.teacher_id, &slot.id) {
            continue;
        }
        if !index.is_free(ResourceKind::Class, &req.class_id, &slot.id) {
            continue;
        }
        for (room_idx, room) in rooms.iter().enumerate() {
            if !resolved.subject.accepts_room_type(&room.room_type) {
                continue;
            }
            if !room.fits(resolved.class.size) {
                continue;
            }
            if !index.is_free(ResourceKind::Room, &room.id, &slot.id) {
                continue;
            }
            out.push((slot_idx, room_idx));
        }
    }
    out
}
