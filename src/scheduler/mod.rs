//! Weekly shift scheduler and staffing KPIs.
//!
//! # Algorithm
//!
//! `ShiftScheduler` is a two-pass greedy heuristic: honor preferences
//! first, then randomly fill slots below the minimum. It is not optimal
//! and makes no fairness promise beyond uniform random picks.
//!
//! # KPI
//!
//! `StaffingKpi` computes coverage, understaffing and preference
//! satisfaction for a finished week.

mod kpi;
mod outcome;
mod shift;

pub use kpi::StaffingKpi;
pub use outcome::{
    AssignmentRecord, AssignmentSource, ScheduleOutcome, Shortfall, SkipReason, SkippedPreference,
};
pub use shift::ShiftScheduler;
