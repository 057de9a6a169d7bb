//! Weekly teaching requirement model.
//!
//! A requirement links one class group, one subject, and one teacher and
//! states how many periods per week must be placed. Co-teaching is out of
//! scope: a (class, subject) pair maps to exactly one teacher.

use serde::{Deserialize, Serialize};

/// A weekly teaching obligation to be placed by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Unique requirement identifier.
    pub id: String,
    /// Class group being taught.
    pub class_id: String,
    /// Subject being taught.
    pub subject_id: String,
    /// Teacher delivering the lessons.
    pub teacher_id: String,
    /// Periods per week to place. Must be positive.
    pub periods_per_week: u32,
}

impl Requirement {
    /// Creates a new requirement for one period per week.
    pub fn new(
        id: impl Into<String>,
        class_id: impl Into<String>,
        subject_id: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            class_id: class_id.into(),
            subject_id: subject_id.into(),
            teacher_id: teacher_id.into(),
            periods_per_week: 1,
        }
    }

    /// Sets the periods-per-week count.
    pub fn with_periods_per_week(mut self, periods: u32) -> Self {
        self.periods_per_week = periods;
        self
    }
}
