// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or validating roster data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date key is not a `YYYY-MM-DD` calendar date.
    InvalidDateKey(String),
    /// A date key is a real date but lies outside the schedule's month.
    DateOutsideMonth {
        /// The offending date key.
        date_key: String,
        /// The schedule year.
        year: i32,
        /// The schedule month (0-based).
        month: u8,
    },
    /// A 0-based month index is not in `0..=11`.
    InvalidMonth {
        /// The invalid month index.
        month: u8,
    },
    /// A day of month does not exist in the given month.
    InvalidDay {
        /// The year.
        year: i32,
        /// The month (0-based).
        month: u8,
        /// The invalid day.
        day: u8,
    },
    /// A rules configuration value is out of range.
    InvalidRules(String),
    /// A shift pattern code could not be interpreted.
    UnknownShiftPattern(String),
    /// A time of day is not in `HH:MM` form.
    InvalidTime(String),
    /// A shift category name is not one of work, dayoff, absence, leave.
    InvalidShiftCategory(String),
    /// An employee field update was rejected.
    InvalidEmployeeField {
        /// The field being updated.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateKey(key) => {
                write!(f, "Invalid date key '{key}': expected YYYY-MM-DD")
            }
            Self::DateOutsideMonth {
                date_key,
                year,
                month,
            } => {
                write!(
                    f,
                    "Date {date_key} is outside schedule month {year}-{:02}",
                    u16::from(*month) + 1
                )
            }
            Self::InvalidMonth { month } => {
                write!(f, "Invalid month index: {month}. Must be between 0 and 11")
            }
            Self::InvalidDay { year, month, day } => {
                write!(
                    f,
                    "Day {day} does not exist in {year}-{:02}",
                    u16::from(*month) + 1
                )
            }
            Self::InvalidRules(msg) => write!(f, "Invalid rules: {msg}"),
            Self::UnknownShiftPattern(pattern) => {
                write!(f, "Unknown shift pattern '{pattern}'")
            }
            Self::InvalidTime(value) => {
                write!(f, "Invalid time '{value}': expected HH:MM")
            }
            Self::InvalidShiftCategory(value) => {
                write!(f, "Invalid shift category '{value}'")
            }
            Self::InvalidEmployeeField { field, reason } => {
                write!(f, "Invalid value for employee field '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
