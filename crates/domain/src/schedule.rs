// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{self, DateKey};
use crate::error::DomainError;
use crate::types::{EmployeeId, ShiftId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse per-cell storage: employee → date → value.
pub type CellMap<T> = BTreeMap<EmployeeId, BTreeMap<DateKey, T>>;

/// Day-off assignments proposed by the suggestion service.
pub type SuggestionMap = CellMap<ShiftId>;

/// A document attached to one roster cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Original file name.
    pub file_name: String,
    /// File content as a `data:` URI.
    pub content: String,
}

impl Attachment {
    /// Creates a new `Attachment`.
    #[must_use]
    pub fn new(file_name: &str, content: String) -> Self {
        Self {
            file_name: file_name.to_string(),
            content,
        }
    }
}

/// The roster for one month.
///
/// A missing assignment means the cell is unassigned. The host owns this
/// value; the grid only ever produces a new copy through a patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySchedule {
    /// Calendar year.
    pub year: i32,
    /// Month index, 0-based.
    pub month: u8,
    /// Shift assignments.
    #[serde(default)]
    pub assignments: CellMap<ShiftId>,
    /// Attached documents.
    #[serde(default)]
    pub attachments: CellMap<Attachment>,
    /// Free-text observations.
    #[serde(default)]
    pub comments: CellMap<String>,
}

impl MonthlySchedule {
    /// Creates an empty schedule for a 0-based month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if `month` is greater than 11.
    pub fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        calendar::month_from_index(month)?;
        Ok(Self {
            year,
            month,
            assignments: CellMap::new(),
            attachments: CellMap::new(),
            comments: CellMap::new(),
        })
    }

    /// Returns the number of days in the schedule's month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if the month index is corrupt.
    pub fn days_in_month(&self) -> Result<u8, DomainError> {
        calendar::days_in_month(self.year, self.month)
    }

    /// Returns the key of a 1-based day of this month.
    ///
    /// # Errors
    ///
    /// Returns an error if the day does not exist in this month.
    pub fn date_key(&self, day: u8) -> Result<DateKey, DomainError> {
        DateKey::for_day(self.year, self.month, day)
    }

    /// Returns every date key of this month in calendar order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if the month index is corrupt.
    pub fn date_keys(&self) -> Result<Vec<DateKey>, DomainError> {
        calendar::month_date_keys(self.year, self.month)
    }

    /// Checks that a date key belongs to this month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateOutsideMonth` if it does not.
    pub fn ensure_in_month(&self, date: DateKey) -> Result<(), DomainError> {
        if date.is_in_month(self.year, self.month) {
            Ok(())
        } else {
            Err(DomainError::DateOutsideMonth {
                date_key: date.to_string(),
                year: self.year,
                month: self.month,
            })
        }
    }

    /// Validates the month index and every stored date key.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), DomainError> {
        calendar::month_from_index(self.month)?;
        let assignment_keys = self.assignments.values().flat_map(BTreeMap::keys);
        let attachment_keys = self.attachments.values().flat_map(BTreeMap::keys);
        let comment_keys = self.comments.values().flat_map(BTreeMap::keys);
        for date in assignment_keys.chain(attachment_keys).chain(comment_keys) {
            self.ensure_in_month(*date)?;
        }
        Ok(())
    }

    /// Returns the shift assigned to a cell, if any.
    #[must_use]
    pub fn shift_at(&self, employee_id: &EmployeeId, date: DateKey) -> Option<&ShiftId> {
        self.assignments.get(employee_id)?.get(&date)
    }

    /// Returns the attachment stored on a cell, if any.
    #[must_use]
    pub fn attachment_at(&self, employee_id: &EmployeeId, date: DateKey) -> Option<&Attachment> {
        self.attachments.get(employee_id)?.get(&date)
    }

    /// Returns the observation stored on a cell, if any.
    #[must_use]
    pub fn comment_at(&self, employee_id: &EmployeeId, date: DateKey) -> Option<&str> {
        self.comments
            .get(employee_id)?
            .get(&date)
            .map(String::as_str)
    }
}
