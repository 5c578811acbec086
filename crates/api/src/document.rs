// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ApiError, ApiResult};
use crate::suggestions::SuggestionRequest;
use roster_domain::{
    Employee, EmployeeId, MonthlySchedule, RulesConfig, ShiftCatalog, ShiftId, StaffingConfig,
};
use roster_grid::GridContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// A roster as the host stores it: one month and everything needed to edit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterDocument {
    /// Employees in roster order.
    pub employees: Vec<Employee>,
    /// The shift catalog in picker order.
    pub shifts: ShiftCatalog,
    /// The month being edited.
    pub schedule: MonthlySchedule,
    /// Compliance rules.
    #[serde(default)]
    pub rules: RulesConfig,
    /// Staffing targets per role.
    #[serde(default)]
    pub staffing: StaffingConfig,
}

impl RosterDocument {
    /// Parses and validates a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid roster document.
    pub fn from_json(text: &str) -> ApiResult<Self> {
        let document: Self = serde_json::from_str(text)?;
        document.validate()?;
        Ok(document)
    }

    /// Reads, parses and validates a document file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid roster
    /// document.
    pub async fn load(path: impl AsRef<Path>) -> ApiResult<Self> {
        let text: String = tokio::fs::read_to_string(path.as_ref()).await?;
        let document: Self = Self::from_json(&text)?;
        debug!(
            path = %path.as_ref().display(),
            employees = document.employees.len(),
            shifts = document.shifts.len(),
            "Roster loaded"
        );
        Ok(document)
    }

    /// Checks the document's internal consistency.
    ///
    /// Assignments naming unknown employees or shifts are tolerated and
    /// logged; they render as empty cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the month or rules are invalid, a stored date is
    /// outside the month, or an employee or shift id is duplicated.
    pub fn validate(&self) -> ApiResult<()> {
        self.schedule.validate()?;
        self.rules.validate()?;

        let mut employee_ids: BTreeSet<&EmployeeId> = BTreeSet::new();
        for employee in &self.employees {
            if !employee_ids.insert(&employee.id) {
                return Err(ApiError::InvalidDocument(format!(
                    "duplicate employee id '{}'",
                    employee.id.value()
                )));
            }
        }

        let mut shift_ids: BTreeSet<&ShiftId> = BTreeSet::new();
        for shift in &self.shifts {
            if !shift_ids.insert(&shift.id) {
                return Err(ApiError::InvalidDocument(format!(
                    "duplicate shift id '{}'",
                    shift.id.value()
                )));
            }
        }

        for (employee, days) in &self.schedule.assignments {
            if !employee_ids.contains(employee) {
                warn!(employee = employee.value(), "Assignments for unknown employee");
            }
            for shift in days.values() {
                if !shift_ids.contains(shift) {
                    warn!(shift = shift.value(), "Assignment names an unknown shift");
                }
            }
        }
        Ok(())
    }

    /// Borrows the document as grid input.
    #[must_use]
    pub fn context(&self, read_only: bool) -> GridContext<'_> {
        GridContext::new(
            &self.employees,
            &self.shifts,
            &self.schedule,
            &self.rules,
            &self.staffing,
        )
        .with_read_only(read_only)
    }

    /// Builds the payload sent to a suggestion service.
    #[must_use]
    pub fn suggestion_request(&self) -> SuggestionRequest {
        SuggestionRequest {
            employees: self.employees.clone(),
            shifts: self.shifts.clone(),
            schedule: self.schedule.clone(),
            rules: self.rules.clone(),
        }
    }

    /// Moves `dragged` to the position `target` held.
    ///
    /// Returns whether the order changed.
    pub fn reorder(&mut self, dragged: &EmployeeId, target: &EmployeeId) -> bool {
        let from: Option<usize> = self.employees.iter().position(|e| &e.id == dragged);
        let to: Option<usize> = self.employees.iter().position(|e| &e.id == target);
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        if from == to {
            return false;
        }
        let employee: Employee = self.employees.remove(from);
        self.employees.insert(to, employee);
        true
    }
}
