//! Employee model.
//!
//! An employee is identified by name and carries at most one preferred
//! shift per day plus a running count of days assigned this week.

use serde::{Deserialize, Serialize};

use super::{Day, ShiftKind};

/// A stated preference: the shift an employee wants on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    /// Day the preference applies to.
    pub day: Day,
    /// Desired shift.
    pub shift: ShiftKind,
}

/// An employee and their weekly state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee name.
    pub name: String,
    /// Preferences in the order they were recorded. At most one per day.
    pub preferences: Vec<Preference>,
    /// Number of days currently assigned.
    pub days_worked: u8,
}

impl Employee {
    /// Creates an employee with no preferences and no assigned days.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: Vec::new(),
            days_worked: 0,
        }
    }

    /// The preferred shift for `day`, if one was recorded.
    pub fn preference_for(&self, day: Day) -> Option<ShiftKind> {
        self.preferences
            .iter()
            .find(|p| p.day == day)
            .map(|p| p.shift)
    }

    /// Records a preference unless one already exists for the day.
    ///
    /// Returns the existing shift on conflict; the stored value is kept.
    pub(crate) fn add_preference(&mut self, day: Day, shift: ShiftKind) -> Result<(), ShiftKind> {
        if let Some(existing) = self.preference_for(day) {
            return Err(existing);
        }
        self.preferences.push(Preference { day, shift });
        Ok(())
    }

    /// Whether the employee has reached `max_days`.
    #[inline]
    pub fn at_day_cap(&self, max_days: u8) -> bool {
        self.days_worked >= max_days
    }
}
