// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{
    DailyStat, DomainError, Employee, EmployeeId, MonthlySchedule, RulesConfig, ShiftCatalog,
    StaffingConfig, ValidationResult, compute_daily_stats, validate_schedule,
};
use std::collections::BTreeMap;

/// Memoizes row validation and day statistics per schedule version.
///
/// The host bumps the version whenever any input changes (a patch, a reorder,
/// an employee edit, new rules). Results computed for another version are
/// discarded on first access.
#[derive(Debug, Clone, Default)]
pub struct ValidationCache {
    version: Option<u64>,
    rows: BTreeMap<EmployeeId, ValidationResult>,
    daily: Option<Vec<DailyStat>>,
}

impl ValidationCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: None,
            rows: BTreeMap::new(),
            daily: None,
        }
    }

    fn sync(&mut self, version: u64) {
        if self.version != Some(version) {
            self.version = Some(version);
            self.rows.clear();
            self.daily = None;
        }
    }

    /// Returns the number of memoized rows.
    #[must_use]
    pub fn cached_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the consecutive-day result of one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule's month index is invalid.
    pub fn validation(
        &mut self,
        version: u64,
        employee: &EmployeeId,
        schedule: &MonthlySchedule,
        catalog: &ShiftCatalog,
        rules: &RulesConfig,
    ) -> Result<ValidationResult, DomainError> {
        self.sync(version);
        if let Some(cached) = self.rows.get(employee) {
            return Ok(cached.clone());
        }
        let result: ValidationResult = validate_schedule(employee, schedule, catalog, Some(rules))?;
        self.rows.insert(employee.clone(), result.clone());
        Ok(result)
    }

    /// Returns the staffing figures of every day.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule's month index is invalid.
    pub fn daily_stats(
        &mut self,
        version: u64,
        employees: &[Employee],
        schedule: &MonthlySchedule,
        catalog: &ShiftCatalog,
        staffing: &StaffingConfig,
    ) -> Result<Vec<DailyStat>, DomainError> {
        self.sync(version);
        if let Some(cached) = &self.daily {
            return Ok(cached.clone());
        }
        let stats: Vec<DailyStat> = compute_daily_stats(employees, schedule, catalog, staffing)?;
        self.daily = Some(stats.clone());
        Ok(stats)
    }
}
