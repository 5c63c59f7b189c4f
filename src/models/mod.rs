//! Shift scheduling domain models.
//!
//! Provides the data types for a weekly rostering problem and its
//! solution.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Day` | One of the seven days, in week order |
//! | `ShiftKind` | Morning, Afternoon or Evening |
//! | `ShiftSlot` | A `(Day, ShiftKind)` cell |
//! | `Employee` | Name, per-day preferences, days worked |
//! | `Roster` | Employees assigned to one slot |
//! | `WeekSchedule` | Rosters for all 21 slots |

mod employee;
mod schedule;
mod week;

pub use employee::{Employee, Preference};
pub use schedule::{Roster, WeekSchedule};
pub use week::{Day, ShiftKind, ShiftSlot};
