//! Error types for preference recording.

use thiserror::Error;

use crate::models::{Day, ShiftKind};

/// Errors from parsing day or shift literals.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not one of the seven day names.
    #[error("{0} is not a valid day")]
    InvalidDay(String),

    /// Not one of the three shift names.
    #[error("{0} is not a valid shift")]
    InvalidShift(String),
}

/// Reasons a preference is rejected.
///
/// A rejection never changes scheduler state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// The day literal was not recognized.
    #[error("{0} is not a valid day")]
    InvalidDay(String),

    /// The shift literal was not recognized.
    #[error("{0} is not a valid shift")]
    InvalidShift(String),

    /// The employee already stated a preference for this day.
    #[error("{employee} already has a preference for {day} ({existing})")]
    Duplicate {
        employee: String,
        day: Day,
        existing: ShiftKind,
    },
}

impl PreferenceError {
    /// Returns true if the input literals were rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PreferenceError::InvalidDay(_) | PreferenceError::InvalidShift(_)
        )
    }

    /// Returns true if a preference already existed for the day.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, PreferenceError::Duplicate { .. })
    }
}

impl From<ParseError> for PreferenceError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::InvalidDay(s) => PreferenceError::InvalidDay(s),
            ParseError::InvalidShift(s) => PreferenceError::InvalidShift(s),
        }
    }
}
