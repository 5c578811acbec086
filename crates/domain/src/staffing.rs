// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-day staffing aggregation against configured targets.

use crate::catalog::ShiftCatalog;
use crate::config::StaffingConfig;
use crate::error::DomainError;
use crate::schedule::MonthlySchedule;
use crate::types::Employee;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Weekday;

/// Staffing figures for one day of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    /// Day of month (1-based).
    pub day: u8,
    /// Weekday of the day.
    pub weekday: Weekday,
    /// Employees counted as working.
    pub total_active: u32,
    /// Working employees per role.
    pub role_counts: BTreeMap<String, u32>,
    /// Ideal headcount per configured role.
    pub role_ideals: BTreeMap<String, u32>,
}

impl DailyStat {
    /// Sum of all role ideals for the day.
    #[must_use]
    pub fn ideal_total(&self) -> u32 {
        self.role_ideals.values().sum()
    }

    /// Returns whether fewer employees work than the ideals require.
    #[must_use]
    pub fn is_deficit(&self) -> bool {
        self.total_active < self.ideal_total()
    }
}

/// Aggregates active headcount for every day of the schedule's month.
///
/// An employee is active on a day unless the assigned shift is a day off,
/// an absence or leave. Unassigned cells count as active.
///
/// # Errors
///
/// Returns an error if the schedule's month index is invalid.
pub fn compute_daily_stats(
    employees: &[Employee],
    schedule: &MonthlySchedule,
    catalog: &ShiftCatalog,
    staffing: &StaffingConfig,
) -> Result<Vec<DailyStat>, DomainError> {
    let stats: Vec<DailyStat> = schedule
        .date_keys()?
        .into_iter()
        .map(|date| {
            let weekday: Weekday = date.weekday();
            let mut total_active: u32 = 0;
            let mut role_counts: BTreeMap<String, u32> = BTreeMap::new();

            for employee in employees {
                let active: bool = catalog
                    .category_of(schedule.shift_at(&employee.id, date))
                    .is_none_or(|category| category.is_active());
                if active {
                    total_active += 1;
                    *role_counts.entry(employee.role.clone()).or_insert(0) += 1;
                }
            }

            let role_ideals: BTreeMap<String, u32> = staffing
                .iter()
                .map(|(role, target)| (role.to_string(), target.ideal_for(weekday)))
                .collect();

            DailyStat {
                day: date.day(),
                weekday,
                total_active,
                role_counts,
                role_ideals,
            }
        })
        .collect();

    Ok(stats)
}
