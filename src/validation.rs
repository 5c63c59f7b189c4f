//! Schedule validation.
//!
//! Checks the state of a scheduler after scheduling and collects every
//! problem found rather than stopping at the first. Detects:
//! - Employees working more than one shift on a day
//! - Employees over the weekly day cap
//! - Day counters that disagree with the rosters
//! - Roster entries for names that were never recorded
//! - Slots below minimum staffing
//!
//! Understaffing is a normal outcome when there are too few employees;
//! callers that accept it can filter on `ValidationErrorKind::Understaffed`.

use crate::models::{Day, ShiftKind};
use crate::scheduler::ShiftScheduler;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Employee appears in more than one shift on the same day.
    DoubleBooking,
    /// Employee works more days than the configured maximum.
    DayCapExceeded,
    /// Recorded days worked differs from roster appearances.
    CounterMismatch,
    /// A roster names someone who never recorded a preference.
    UnknownEmployee,
    /// A slot has fewer employees than the configured minimum.
    Understaffed,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduler's week schedule against its configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_schedule(scheduler: &ShiftScheduler) -> ValidationResult {
    let mut errors = Vec::new();
    let schedule = scheduler.schedule();
    let config = scheduler.config();

    for employee in scheduler.employees() {
        let name = employee.name.as_str();

        for day in Day::ALL {
            let shifts: Vec<ShiftKind> = ShiftKind::ALL
                .into_iter()
                .filter(|&shift| schedule.roster(day, shift).contains(name))
                .collect();
            if shifts.len() > 1 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DoubleBooking,
                    format!("{name} works {} shifts on {day}", shifts.len()),
                ));
            }
        }

        let assigned = schedule.days_assigned(name);
        if assigned > usize::from(config.max_days_per_week) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayCapExceeded,
                format!(
                    "{name} works {assigned} days, maximum is {}",
                    config.max_days_per_week
                ),
            ));
        }
        if assigned != usize::from(employee.days_worked) {
            errors.push(ValidationError::new(
                ValidationErrorKind::CounterMismatch,
                format!(
                    "{name} is counted for {} days but rostered on {assigned}",
                    employee.days_worked
                ),
            ));
        }
    }

    for (slot, roster) in schedule.slots() {
        for name in roster.iter() {
            if scheduler.employee(name).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownEmployee,
                    format!("{slot} lists unknown employee {name}"),
                ));
            }
        }
        if roster.len() < config.min_employees_per_shift {
            errors.push(ValidationError::new(
                ValidationErrorKind::Understaffed,
                format!(
                    "{slot} has {} of {} employees",
                    roster.len(),
                    config.min_employees_per_shift
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
