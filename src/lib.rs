//! Weekly employee shift scheduling.
//!
//! Assigns employees to Morning, Afternoon and Evening shifts across a
//! seven-day week. Stated preferences are honored first; shifts still
//! below the minimum headcount are then filled with randomly chosen
//! available employees. Two limits are enforced throughout: no employee
//! works twice on the same day, and nobody exceeds the weekly day cap.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `ShiftKind`, `ShiftSlot`,
//!   `Employee`, `Roster`, `WeekSchedule`
//! - **`scheduler`**: `ShiftScheduler`, run outcome records, `StaffingKpi`
//! - **`config`**: Staffing limits
//! - **`validation`**: Post-run integrity checks
//! - **`error`**: Preference and parse errors
//!
//! # Diagnostics
//!
//! Rejected preferences, skipped preferences and unfillable shifts are
//! reported through `tracing`. Install a subscriber to see them.

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::{ParseError, PreferenceError};
pub use scheduler::{ScheduleOutcome, ShiftScheduler};
