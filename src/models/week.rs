//! Week calendar model.
//!
//! The scheduling horizon is one fixed week of seven days, each split
//! into three shifts. A `(Day, ShiftKind)` pair identifies a shift slot.
//!
//! # Parsing
//! Both enums parse from their English names with an exact, case-sensitive
//! match (`"Monday"`, `"Morning"`), and display the same way.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A day of the week, ordered by week position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A shift within a day.
///
/// Shifts carry no ordering among themselves; `ShiftKind::ALL` is only
/// the order the fill pass visits them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    Morning,
    Afternoon,
    Evening,
}

/// One `(day, shift)` cell of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftSlot {
    /// Day of the slot.
    pub day: Day,
    /// Shift of the slot.
    pub shift: ShiftKind,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Zero-based position in the week (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name of the day.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl ShiftKind {
    /// All shifts in fill order.
    pub const ALL: [ShiftKind; 3] = [ShiftKind::Morning, ShiftKind::Afternoon, ShiftKind::Evening];

    /// Position within `ShiftKind::ALL`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name of the shift.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftKind::Morning => "Morning",
            ShiftKind::Afternoon => "Afternoon",
            ShiftKind::Evening => "Evening",
        }
    }
}

impl ShiftSlot {
    /// Creates a slot.
    pub fn new(day: Day, shift: ShiftKind) -> Self {
        Self { day, shift }
    }

    /// Iterates all 21 slots, days in week order, shifts in fill order.
    pub fn all() -> impl Iterator<Item = ShiftSlot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| ShiftKind::ALL.into_iter().map(move |shift| Self::new(day, shift)))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ShiftSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.shift)
    }
}

impl FromStr for Day {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseError::InvalidDay(s.to_string()))
    }
}

impl FromStr for ShiftKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseError::InvalidShift(s.to_string()))
    }
}
