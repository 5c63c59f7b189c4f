//! Record of what a scheduling run did.
//!
//! The same events are logged through `tracing` while the run happens;
//! `ScheduleOutcome` keeps them as data so callers and tests can inspect
//! shortfalls without scraping logs.

use serde::{Deserialize, Serialize};

use crate::models::ShiftSlot;

/// How an assignment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentSource {
    /// Employee's own preference (pass 1).
    Preference,
    /// Random pick to reach minimum staffing (pass 2).
    Fill,
}

/// One employee placed on one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub employee: String,
    pub slot: ShiftSlot,
    pub source: AssignmentSource,
}

/// Why a preference was not honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Employee already reached the weekly day cap.
    DayCapReached,
    /// Employee already works another shift that day.
    AlreadyScheduled,
}

/// A preference passed over in pass 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPreference {
    pub employee: String,
    pub slot: ShiftSlot,
    pub reason: SkipReason,
}

/// A slot left below minimum staffing because nobody was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub slot: ShiftSlot,
    /// Roster size when filling gave up.
    pub staffed: usize,
    /// Configured minimum.
    pub required: usize,
}

/// Result of `ShiftScheduler::create_schedule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Assignments in the order they were made, both passes.
    pub assignments: Vec<AssignmentRecord>,
    /// Preferences that could not be honored.
    pub skipped: Vec<SkippedPreference>,
    /// Slots the fill pass could not bring up to the minimum.
    pub shortfalls: Vec<Shortfall>,
}

impl ScheduleOutcome {
    /// Assignments made from a given source.
    pub fn assignments_from(&self, source: AssignmentSource) -> impl Iterator<Item = &AssignmentRecord> {
        self.assignments.iter().filter(move |a| a.source == source)
    }

    /// Whether every slot reached the minimum.
    pub fn is_fully_staffed(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Missing seats summed over all shortfalls.
    pub fn missing_seats(&self) -> usize {
        self.shortfalls.iter().map(|s| s.required - s.staffed).sum()
    }
}
