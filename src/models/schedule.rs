//! Week schedule (solution) model.
//!
//! A week schedule maps each of the 21 shift slots to a roster of
//! employee names. Every slot exists from construction, possibly empty.
//! Rosters keep insertion order and never hold the same name twice.

use serde::{Deserialize, Serialize};

use super::{Day, ShiftKind, ShiftSlot};

/// Ordered, duplicate-free list of employees assigned to one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<String>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee. Returns false if already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.members.push(name);
        true
    }

    /// Whether the roster contains `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Number of assigned employees.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nobody is assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Assigned names in insertion order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Iterates assigned names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }
}

/// Rosters for the full week.
///
/// Indexed `[day][shift]` using `Day::index` and `ShiftKind::index`,
/// so the slot set is fixed by the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    days: [[Roster; 3]; 7],
}

impl WeekSchedule {
    /// Creates a schedule with all 21 slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster for a slot.
    pub fn roster(&self, day: Day, shift: ShiftKind) -> &Roster {
        &self.days[day.index()][shift.index()]
    }

    pub(crate) fn roster_mut(&mut self, day: Day, shift: ShiftKind) -> &mut Roster {
        &mut self.days[day.index()][shift.index()]
    }

    /// Assigns an employee to a slot. Returns false if already on that roster.
    pub fn assign(&mut self, day: Day, shift: ShiftKind, name: impl Into<String>) -> bool {
        self.roster_mut(day, shift).insert(name)
    }

    /// The shift `name` works on `day`, if any.
    pub fn shift_on(&self, day: Day, name: &str) -> Option<ShiftKind> {
        ShiftKind::ALL
            .into_iter()
            .find(|&shift| self.roster(day, shift).contains(name))
    }

    /// Whether `name` is assigned to any shift on `day`.
    pub fn is_scheduled_on(&self, day: Day, name: &str) -> bool {
        self.shift_on(day, name).is_some()
    }

    /// Iterates every slot with its roster, days in week order.
    pub fn slots(&self) -> impl Iterator<Item = (ShiftSlot, &Roster)> {
        ShiftSlot::all().map(move |slot| (slot, self.roster(slot.day, slot.shift)))
    }

    /// Number of slots whose roster is below `min`.
    pub fn understaffed_count(&self, min: usize) -> usize {
        self.slots().filter(|(_, r)| r.len() < min).count()
    }

    /// Total number of (employee, slot) assignments.
    pub fn assignment_count(&self) -> usize {
        self.slots().map(|(_, r)| r.len()).sum()
    }

    /// Number of days `name` appears on any roster.
    pub fn days_assigned(&self, name: &str) -> usize {
        Day::ALL
            .into_iter()
            .filter(|&day| self.is_scheduled_on(day, name))
            .count()
    }
}
