// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar utilities for monthly rosters.
//!
//! Months are addressed the way the schedule stores them: a calendar year plus
//! a 0-based month index (`0` = January). Every cell of the roster is keyed by
//! a [`DateKey`], the canonical `YYYY-MM-DD` rendering of one date.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month, Weekday};

/// Canonical `YYYY-MM-DD` key identifying one calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(Date);

impl DateKey {
    /// Wraps a calendar date.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Builds the key for a day of a 0-based month.
    ///
    /// # Errors
    ///
    /// Returns an error if the month index or the day is out of range.
    pub fn for_day(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        date_for_day(year, month, day).map(Self)
    }

    /// Returns the wrapped date.
    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }

    /// Returns the day of month (1-based).
    #[must_use]
    pub const fn day(self) -> u8 {
        self.0.day()
    }

    /// Returns the weekday of this date.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns whether this date lies within the given 0-based month.
    #[must_use]
    pub fn is_in_month(self, year: i32, month: u8) -> bool {
        self.0.year() == year && u8::from(self.0.month()) == month.saturating_add(1)
    }

    /// Parses a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateKey` if the string is malformed or
    /// does not name a real date.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDateKey(value.to_string());

        let bytes: &[u8] = value.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits_ok: bool = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return Err(invalid());
        }

        let year: i32 = value[0..4].parse().map_err(|_| invalid())?;
        let month_number: u8 = value[5..7].parse().map_err(|_| invalid())?;
        let day: u8 = value[8..10].parse().map_err(|_| invalid())?;
        let month: Month = Month::try_from(month_number).map_err(|_| invalid())?;
        let date: Date = Date::from_calendar_date(year, month, day).map_err(|_| invalid())?;
        Ok(Self(date))
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

/// Converts a 0-based month index into a calendar month.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if `month` is greater than 11.
pub fn month_from_index(month: u8) -> Result<Month, DomainError> {
    if month > 11 {
        return Err(DomainError::InvalidMonth { month });
    }
    Month::try_from(month + 1).map_err(|_| DomainError::InvalidMonth { month })
}

/// Returns the number of days in a 0-based month.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if `month` is greater than 11.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, DomainError> {
    let days: u8 = match month_from_index(month)? {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
    };
    Ok(days)
}

/// Returns the date for a 1-based day of a 0-based month.
///
/// # Errors
///
/// Returns an error if the month index or the day is out of range.
pub fn date_for_day(year: i32, month: u8, day: u8) -> Result<Date, DomainError> {
    let calendar_month: Month = month_from_index(month)?;
    Date::from_calendar_date(year, calendar_month, day)
        .map_err(|_| DomainError::InvalidDay { year, month, day })
}

/// Returns the keys of every day of a 0-based month, in calendar order.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if `month` is greater than 11.
pub fn month_date_keys(year: i32, month: u8) -> Result<Vec<DateKey>, DomainError> {
    let days: u8 = days_in_month(year, month)?;
    (1..=days)
        .map(|day| DateKey::for_day(year, month, day))
        .collect()
}

/// Returns the weekday of a 1-based day of a 0-based month.
///
/// # Errors
///
/// Returns an error if the month index or the day is out of range.
pub fn weekday_of(year: i32, month: u8, day: u8) -> Result<Weekday, DomainError> {
    date_for_day(year, month, day).map(Date::weekday)
}

/// Short upper-case label shown in the grid's day header.
#[must_use]
pub const fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "SUN",
        Weekday::Monday => "MON",
        Weekday::Tuesday => "TUE",
        Weekday::Wednesday => "WED",
        Weekday::Thursday => "THU",
        Weekday::Friday => "FRI",
        Weekday::Saturday => "SAT",
    }
}

/// Fixed-date national holidays as `(day, month, name)`.
const HOLIDAYS: &[(u8, Month, &str)] = &[
    (1, Month::January, "New Year's Day"),
    (21, Month::April, "Tiradentes"),
    (1, Month::May, "Labour Day"),
    (7, Month::September, "Independence Day"),
    (12, Month::October, "Our Lady of Aparecida"),
    (2, Month::November, "All Souls' Day"),
    (15, Month::November, "Republic Proclamation Day"),
    (20, Month::November, "Black Consciousness Day"),
    (25, Month::December, "Christmas Day"),
];

/// Returns the holiday name for a date, if it is a fixed national holiday.
#[must_use]
pub fn holiday_name(date: Date) -> Option<&'static str> {
    HOLIDAYS
        .iter()
        .find(|(day, month, _)| *day == date.day() && *month == date.month())
        .map(|(_, _, name)| *name)
}

/// Returns whether a date falls on a weekend or a fixed national holiday.
#[must_use]
pub fn is_weekend_or_holiday(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday) || holiday_name(date).is_some()
}

/// Returns the number of days off a shift pattern entitles an employee to in
/// a 0-based month.
///
/// Patterns are written `NxM`. When `N + M` is a whole number of days
/// expressed in hours (`12x36`, `24x72`) the pattern is a shift cycle: one
/// worked day per cycle, every other day is off. Otherwise `N` and `M` are
/// worked and rest days per cycle (`5x2`, `6x1`) and the entitlement is
/// `floor(days * M / (N + M))`.
///
/// # Errors
///
/// Returns `DomainError::UnknownShiftPattern` if the pattern cannot be read,
/// or `DomainError::InvalidMonth` if the month index is out of range.
pub fn required_days_off(pattern: &str, year: i32, month: u8) -> Result<u8, DomainError> {
    let unknown = || DomainError::UnknownShiftPattern(pattern.to_string());

    let normalized: String = pattern.trim().to_ascii_lowercase();
    let (work, rest) = normalized.split_once('x').ok_or_else(unknown)?;
    let work: u32 = work.trim().parse().map_err(|_| unknown())?;
    let rest: u32 = rest.trim().parse().map_err(|_| unknown())?;
    if work == 0 {
        return Err(unknown());
    }
    let cycle: u32 = work.checked_add(rest).ok_or_else(unknown)?;

    let days: u32 = u32::from(days_in_month(year, month)?);

    let off: u32 = if cycle >= 24 && cycle % 24 == 0 && work <= 24 {
        let cycle_days: u32 = cycle / 24;
        days - days.div_ceil(cycle_days)
    } else if cycle <= 14 {
        days * rest / cycle
    } else {
        return Err(unknown());
    };

    u8::try_from(off).map_err(|_| unknown())
}
