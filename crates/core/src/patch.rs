// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Copy-on-write changes to the assignment store.
//!
//! The grid never mutates the host's schedule. Every edit is described as one
//! `SchedulePatch` and applied with [`apply_patch`], which returns a new
//! schedule, so one patch is one undo step.

use crate::error::CoreError;
use roster_domain::{
    Attachment, CellMap, DateKey, EmployeeId, MonthlySchedule, ShiftCatalog, ShiftId,
    SuggestionMap,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What kind of edit produced a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatchKind {
    /// A shift picked from the cell menu.
    SetShift,
    /// A cell cycled to the next catalog shift.
    CycleShift,
    /// Clipboard paste over the selection.
    Paste,
    /// Assignment, attachment and comment removed from one cell.
    ClearCell,
    /// Assignments removed from every selected cell.
    ClearSelection,
    /// An attachment stored on a cell.
    Attachment,
    /// An observation written on a cell.
    Observation,
    /// Day-off suggestions merged into the month.
    Suggestions,
}

impl PatchKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SetShift => "SetShift",
            Self::CycleShift => "CycleShift",
            Self::Paste => "Paste",
            Self::ClearCell => "ClearCell",
            Self::ClearSelection => "ClearSelection",
            Self::Attachment => "Attachment",
            Self::Observation => "Observation",
            Self::Suggestions => "Suggestions",
        }
    }
}

impl std::fmt::Display for PatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One cell-level change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PatchOp {
    /// Assigns a shift, creating the entry if absent.
    SetShift {
        /// The employee.
        employee: EmployeeId,
        /// The cell date.
        date: DateKey,
        /// The shift to assign.
        shift: ShiftId,
    },
    /// Removes only the assignment.
    ClearAssignment {
        /// The employee.
        employee: EmployeeId,
        /// The cell date.
        date: DateKey,
    },
    /// Removes assignment, attachment and comment together.
    ClearCell {
        /// The employee.
        employee: EmployeeId,
        /// The cell date.
        date: DateKey,
    },
    /// Stores an attachment.
    SetAttachment {
        /// The employee.
        employee: EmployeeId,
        /// The cell date.
        date: DateKey,
        /// The encoded document.
        attachment: Attachment,
    },
    /// Stores an observation.
    SetComment {
        /// The employee.
        employee: EmployeeId,
        /// The cell date.
        date: DateKey,
        /// The observation text.
        text: String,
    },
}

impl PatchOp {
    /// Returns the date the op touches.
    #[must_use]
    pub const fn date(&self) -> DateKey {
        match self {
            Self::SetShift { date, .. }
            | Self::ClearAssignment { date, .. }
            | Self::ClearCell { date, .. }
            | Self::SetAttachment { date, .. }
            | Self::SetComment { date, .. } => *date,
        }
    }

    /// Returns the employee the op touches.
    #[must_use]
    pub const fn employee(&self) -> &EmployeeId {
        match self {
            Self::SetShift { employee, .. }
            | Self::ClearAssignment { employee, .. }
            | Self::ClearCell { employee, .. }
            | Self::SetAttachment { employee, .. }
            | Self::SetComment { employee, .. } => employee,
        }
    }
}

/// A set of cell changes applied as one logical step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePatch {
    /// The edit that produced this patch.
    pub kind: PatchKind,
    /// Changes in application order.
    pub ops: Vec<PatchOp>,
}

impl SchedulePatch {
    /// Creates a new `SchedulePatch`.
    #[must_use]
    pub const fn new(kind: PatchKind, ops: Vec<PatchOp>) -> Self {
        Self { kind, ops }
    }

    /// Returns whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of cell changes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

/// Applies a patch to a copy of `schedule`.
///
/// Either every op is applied or, when any op names a date outside the
/// schedule's month, none is. Inner maps emptied by the patch are removed so
/// that clearing a never-set cell leaves the schedule equal to its input.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if an op's date is outside the month.
pub fn apply_patch(
    schedule: &MonthlySchedule,
    patch: &SchedulePatch,
) -> Result<MonthlySchedule, CoreError> {
    for op in &patch.ops {
        schedule.ensure_in_month(op.date())?;
    }

    let mut next: MonthlySchedule = schedule.clone();
    for op in &patch.ops {
        match op {
            PatchOp::SetShift {
                employee,
                date,
                shift,
            } => {
                next.assignments
                    .entry(employee.clone())
                    .or_default()
                    .insert(*date, shift.clone());
            }
            PatchOp::ClearAssignment { employee, date } => {
                remove_cell(&mut next.assignments, employee, *date);
            }
            PatchOp::ClearCell { employee, date } => {
                remove_cell(&mut next.assignments, employee, *date);
                remove_cell(&mut next.attachments, employee, *date);
                remove_cell(&mut next.comments, employee, *date);
            }
            PatchOp::SetAttachment {
                employee,
                date,
                attachment,
            } => {
                next.attachments
                    .entry(employee.clone())
                    .or_default()
                    .insert(*date, attachment.clone());
            }
            PatchOp::SetComment {
                employee,
                date,
                text,
            } => {
                next.comments
                    .entry(employee.clone())
                    .or_default()
                    .insert(*date, text.clone());
            }
        }
    }
    Ok(next)
}

fn remove_cell<T>(cells: &mut CellMap<T>, employee: &EmployeeId, date: DateKey) {
    if let Some(row) = cells.get_mut(employee) {
        row.remove(&date);
        if row.is_empty() {
            cells.remove(employee);
        }
    }
}

/// Builds the patch that merges a suggestion map into the month.
///
/// Only day-off shifts on dates inside the schedule's month are taken;
/// everything else in the map is ignored.
#[must_use]
pub fn merge_suggestions(
    schedule: &MonthlySchedule,
    suggestions: &SuggestionMap,
    catalog: &ShiftCatalog,
) -> SchedulePatch {
    let ops: Vec<PatchOp> = suggestions
        .iter()
        .flat_map(|(employee, days): (&EmployeeId, &BTreeMap<DateKey, ShiftId>)| {
            days.iter()
                .filter(|(date, shift)| {
                    date.is_in_month(schedule.year, schedule.month) && catalog.is_day_off(shift)
                })
                .map(|(date, shift)| PatchOp::SetShift {
                    employee: employee.clone(),
                    date: *date,
                    shift: shift.clone(),
                })
        })
        .collect();
    SchedulePatch::new(PatchKind::Suggestions, ops)
}
