//! Scheduler configuration.
//!
//! Staffing limits are fixed for the lifetime of a scheduler. The
//! defaults are two employees per shift and five workdays per week.

use serde::{Deserialize, Serialize};

/// Minimum number of employees each shift should have.
pub const MIN_EMPLOYEES_PER_SHIFT: usize = 2;

/// Maximum number of days an employee works per week.
pub const MAX_DAYS_PER_WEEK: u8 = 5;

/// Staffing limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Fill target for every shift slot.
    pub min_employees_per_shift: usize,
    /// Day cap per employee (at most 7).
    pub max_days_per_week: u8,
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-shift minimum.
    pub fn with_min_employees_per_shift(mut self, min: usize) -> Self {
        self.min_employees_per_shift = min;
        self
    }

    /// Sets the weekly day cap, clamped to the 7-day week.
    pub fn with_max_days_per_week(mut self, max: u8) -> Self {
        self.max_days_per_week = max.min(7);
        self
    }

    /// Returns the config with the day cap clamped to the 7-day week.
    ///
    /// Deserialized or hand-built configs bypass the builder clamp.
    pub fn clamped(mut self) -> Self {
        self.max_days_per_week = self.max_days_per_week.min(7);
        self
    }

    /// Total seats the week needs to be fully staffed.
    ///
    /// Saturates at `usize::MAX` for very large minimums.
    pub fn required_seats(&self) -> usize {
        self.min_employees_per_shift.saturating_mul(21)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_employees_per_shift: MIN_EMPLOYEES_PER_SHIFT,
            max_days_per_week: MAX_DAYS_PER_WEEK,
        }
    }
}
