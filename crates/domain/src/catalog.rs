// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Shift, ShiftCategory, ShiftId};
use serde::{Deserialize, Serialize};

/// The ordered shift catalog.
///
/// Order is significant: it is the order of the cell picker and of the
/// click-to-cycle sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftCatalog {
    shifts: Vec<Shift>,
}

impl ShiftCatalog {
    /// Creates a catalog from shifts in picker order.
    #[must_use]
    pub const fn new(shifts: Vec<Shift>) -> Self {
        Self { shifts }
    }

    /// Looks up a shift by id.
    #[must_use]
    pub fn get(&self, id: &ShiftId) -> Option<&Shift> {
        self.shifts.iter().find(|shift| &shift.id == id)
    }

    /// Returns the category of an optional assignment.
    ///
    /// Unassigned cells and ids missing from the catalog have no category.
    #[must_use]
    pub fn category_of(&self, id: Option<&ShiftId>) -> Option<ShiftCategory> {
        id.and_then(|id| self.get(id)).map(|shift| shift.category)
    }

    /// Returns whether an id names a day-off shift.
    #[must_use]
    pub fn is_day_off(&self, id: &ShiftId) -> bool {
        self.category_of(Some(id)) == Some(ShiftCategory::DayOff)
    }

    /// Returns the shift that follows `current` in catalog order, wrapping
    /// around. An unassigned cell (or an unknown id) starts at the first shift.
    #[must_use]
    pub fn next_after(&self, current: Option<&ShiftId>) -> Option<&Shift> {
        let position: Option<usize> =
            current.and_then(|id| self.shifts.iter().position(|shift| &shift.id == id));
        match position {
            Some(index) => self.shifts.get((index + 1) % self.shifts.len()),
            None => self.shifts.first(),
        }
    }

    /// Iterates over the shifts in picker order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shift> {
        self.shifts.iter()
    }

    /// Returns the number of shifts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}

impl<'a> IntoIterator for &'a ShiftCatalog {
    type Item = &'a Shift;
    type IntoIter = std::slice::Iter<'a, Shift>;

    fn into_iter(self) -> Self::IntoIter {
        self.shifts.iter()
    }
}
