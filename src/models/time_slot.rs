//! Weekly time grid model.
//!
//! A school week is a fixed, finite grid of teaching periods. The full
//! ordered set of time slots is input data, never generated by the engine.

use serde::{Deserialize, Serialize};

/// Day of the school week.
///
/// Ordering follows the calendar (Monday first), which also defines the
/// canonical placement order used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Zero-based index within the week (Monday = 0).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// One teaching period in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Unique slot identifier.
    pub id: String,
    /// Day of the week this slot falls on.
    pub day: DayOfWeek,
    /// Ordinal period index within the day (0 = first period).
    pub period: u32,
    /// Period length in minutes.
    pub duration_min: u32,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(id: impl Into<String>, day: DayOfWeek, period: u32) -> Self {
        Self {
            id: id.into(),
            day,
            period,
            duration_min: 45,
        }
    }

    /// Sets the period length in minutes.
    pub fn with_duration(mut self, duration_min: u32) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Position in the canonical week order: (day, period) ascending.
    #[inline]
    pub fn week_position(&self) -> (u8, u32) {
        (self.day.index(), self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_ordering() {
        assert!(DayOfWeek::Monday < DayOfWeek::Friday);
        assert_eq!(DayOfWeek::Monday.index(), 0);
        assert_eq!(DayOfWeek::Sunday.index(), 6);
    }

    #[test]
    fn test_slot_builder() {
        let s = TimeSlot::new("mon-1", DayOfWeek::Monday, 1).with_duration(50);
        assert_eq!(s.id, "mon-1");
        assert_eq!(s.day, DayOfWeek::Monday);
        assert_eq!(s.period, 1);
        assert_eq!(s.duration_min, 50);
    }

    #[test]
    fn test_week_position_orders_by_day_then_period() {
        let mon_2 = TimeSlot::new("mon-2", DayOfWeek::Monday, 2);
        let tue_0 = TimeSlot::new("tue-0", DayOfWeek::Tuesday, 0);
        assert!(mon_2.week_position() < tue_0.week_position());
    }
}
