// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-employee compliance checks.
//!
//! ## Invariants
//!
//! - Unassigned cells count as worked days. A roster that has not been filled
//!   in yet must never look compliant.
//! - A reported violation resets the run, so one long stretch is reported once
//!   per `max + 1` days rather than on every following day.
//! - All checks are pure and deterministic.

use crate::catalog::ShiftCatalog;
use crate::config::{DEFAULT_MAX_CONSECUTIVE_DAYS, RulesConfig};
use crate::error::DomainError;
use crate::schedule::MonthlySchedule;
use crate::types::{EmployeeId, ShiftCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Weekday;

/// Outcome of the consecutive-workday check for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `true` when no message was produced.
    pub valid: bool,
    /// Violation messages in calendar order.
    pub messages: Vec<String>,
}

impl ValidationResult {
    fn from_messages(messages: Vec<String>) -> Self {
        Self {
            valid: messages.is_empty(),
            messages,
        }
    }
}

/// Scans an employee's month for runs of consecutive worked days.
///
/// A day-off shift resets the run. Any other shift, an unknown shift id, or
/// an unassigned cell extends it. When the run exceeds the limit a message
/// naming that day is emitted and the run restarts at zero.
///
/// # Arguments
///
/// * `employee_id` - The employee whose row is checked
/// * `schedule` - The month being edited
/// * `catalog` - The shift catalog
/// * `rules` - Compliance rules; the limit defaults to 6 when absent
///
/// # Errors
///
/// Returns an error if the schedule's month index is invalid.
pub fn validate_schedule(
    employee_id: &EmployeeId,
    schedule: &MonthlySchedule,
    catalog: &ShiftCatalog,
    rules: Option<&RulesConfig>,
) -> Result<ValidationResult, DomainError> {
    let max_consecutive: u32 = rules
        .map(|r| r.max_consecutive_days)
        .filter(|max| *max > 0)
        .unwrap_or(DEFAULT_MAX_CONSECUTIVE_DAYS);

    let assignments = schedule.assignments.get(employee_id);
    let mut run: u32 = 0;
    let mut messages: Vec<String> = Vec::new();

    for date in schedule.date_keys()? {
        let category: Option<ShiftCategory> =
            catalog.category_of(assignments.and_then(|cells| cells.get(&date)));

        if category == Some(ShiftCategory::DayOff) {
            run = 0;
        } else {
            run += 1;
        }

        if run > max_consecutive {
            messages.push(format!(
                "More than {max_consecutive} consecutive days (day {}).",
                date.day()
            ));
            run = 0;
        }
    }

    Ok(ValidationResult::from_messages(messages))
}

/// Counts the day-off cells of an employee within the schedule's month.
#[must_use]
pub fn count_days_off(
    employee_id: &EmployeeId,
    schedule: &MonthlySchedule,
    catalog: &ShiftCatalog,
) -> usize {
    schedule
        .assignments
        .get(employee_id)
        .map_or(0, |cells: &BTreeMap<_, _>| {
            cells
                .iter()
                .filter(|(date, shift_id)| {
                    date.is_in_month(schedule.year, schedule.month) && catalog.is_day_off(shift_id)
                })
                .count()
        })
}

/// Returns the Sundays on which an employee completes a streak of
/// `sunday_off_frequency` worked Sundays.
///
/// The streak restarts after each reported Sunday and after every Sunday off.
///
/// # Errors
///
/// Returns an error if the schedule's month index is invalid.
pub fn sunday_rotation_gaps(
    employee_id: &EmployeeId,
    schedule: &MonthlySchedule,
    catalog: &ShiftCatalog,
    rules: &RulesConfig,
) -> Result<Vec<u8>, DomainError> {
    let frequency: u32 = rules.sunday_off_frequency.max(1);
    let mut worked_sundays: u32 = 0;
    let mut gaps: Vec<u8> = Vec::new();

    for date in schedule
        .date_keys()?
        .into_iter()
        .filter(|date| date.weekday() == Weekday::Sunday)
    {
        if catalog.category_of(schedule.shift_at(employee_id, date)) == Some(ShiftCategory::DayOff)
        {
            worked_sundays = 0;
            continue;
        }
        worked_sundays += 1;
        if worked_sundays >= frequency {
            gaps.push(date.day());
            worked_sundays = 0;
        }
    }

    Ok(gaps)
}
