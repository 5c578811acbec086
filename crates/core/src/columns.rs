// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The employee information columns to the left of the day cells.
//!
//! ## Invariants
//!
//! - Every `ColumnKey` appears exactly once in a `ColumnLayout`, in display order.
//! - Widths never drop below `MIN_COLUMN_WIDTH`.
//! - Sorting is stable: rows with equal keys keep their relative order.

use roster_domain::{Employee, decimal_to_time, parse_decimal_hours};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Narrowest width a column can be resized to, in pixels.
pub const MIN_COLUMN_WIDTH: u32 = 40;

/// Identifies an information column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    /// Employee name.
    Name,
    /// Employee identifier.
    Id,
    /// Role.
    Role,
    /// Civil registration number.
    Cpf,
    /// Shift pattern ("scale").
    Scale,
    /// Position number.
    Position,
    /// Professional council code.
    Council,
    /// Bank-hours balance.
    BankHours,
}

/// A comparable value extracted from an employee for sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Compared case-insensitively.
    Text(String),
    /// Compared numerically; unparsable values sort first.
    Number(Option<f64>),
}

impl SortValue {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => match (a, b) {
                (Some(a), Some(b)) => a.total_cmp(b),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            (Self::Text(_), Self::Number(_)) => Ordering::Less,
            (Self::Number(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

impl ColumnKey {
    /// All columns in their default display order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Id,
        Self::Role,
        Self::Cpf,
        Self::Scale,
        Self::Position,
        Self::Council,
        Self::BankHours,
    ];

    /// Header label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Id => "ID",
            Self::Role => "Role",
            Self::Cpf => "CPF",
            Self::Scale => "Scale",
            Self::Position => "Position",
            Self::Council => "Council",
            Self::BankHours => "BH",
        }
    }

    /// Initial width in pixels.
    #[must_use]
    pub const fn default_width(&self) -> u32 {
        match self {
            Self::Name => 220,
            Self::Role => 120,
            Self::Cpf | Self::Council => 100,
            Self::Id | Self::Scale | Self::Position => 80,
            Self::BankHours => 60,
        }
    }

    /// Returns the raw field this column shows.
    #[must_use]
    pub fn field<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            Self::Name => &employee.name,
            Self::Id => employee.id.value(),
            Self::Role => &employee.role,
            Self::Cpf => &employee.cpf,
            Self::Scale => &employee.shift_pattern,
            Self::Position => &employee.position_number,
            Self::Council => &employee.category_code,
            Self::BankHours => &employee.bank_hours_balance,
        }
    }

    /// Returns the text rendered in the cell.
    ///
    /// The bank-hours balance is shown as `HH:MM`.
    #[must_use]
    pub fn display(&self, employee: &Employee) -> String {
        match self {
            Self::BankHours => decimal_to_time(&employee.bank_hours_balance),
            _ => self.field(employee).to_string(),
        }
    }

    /// Returns the value this column sorts by.
    #[must_use]
    pub fn sort_value(&self, employee: &Employee) -> SortValue {
        match self {
            Self::BankHours => SortValue::Number(parse_decimal_hours(&employee.bank_hours_balance)),
            _ => SortValue::Text(self.field(employee).to_string()),
        }
    }
}

impl std::fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Width and visibility of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// The column.
    pub key: ColumnKey,
    /// Width in pixels.
    pub width: u32,
    /// Whether the column sticks to the left edge.
    pub frozen: bool,
    /// Whether the column is hidden.
    pub hidden: bool,
}

impl ColumnSpec {
    const fn new(key: ColumnKey) -> Self {
        Self {
            key,
            width: key.default_width(),
            frozen: false,
            hidden: false,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// The active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    /// The column sorted by.
    pub key: ColumnKey,
    /// The direction.
    pub direction: SortDirection,
}

/// Widths, frozen and hidden flags and the sort of the information columns.
///
/// This is pure UI state. The host may persist it per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    columns: Vec<ColumnSpec>,
    #[serde(default)]
    sort: Option<SortState>,
}

impl ColumnLayout {
    /// Creates the default layout: every column visible, unfrozen, unsorted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: ColumnKey::ALL.iter().copied().map(ColumnSpec::new).collect(),
            sort: None,
        }
    }

    /// Repairs a layout loaded from storage.
    ///
    /// Duplicate entries are dropped, missing columns are appended with their
    /// defaults and widths are clamped.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let mut seen: Vec<ColumnKey> = Vec::new();
        self.columns.retain(|spec| {
            if seen.contains(&spec.key) {
                false
            } else {
                seen.push(spec.key);
                true
            }
        });
        for key in ColumnKey::ALL {
            if !seen.contains(&key) {
                self.columns.push(ColumnSpec::new(key));
            }
        }
        for spec in &mut self.columns {
            spec.width = spec.width.max(MIN_COLUMN_WIDTH);
        }
        self
    }

    fn spec(&self, key: ColumnKey) -> Option<&ColumnSpec> {
        self.columns.iter().find(|spec| spec.key == key)
    }

    fn spec_mut(&mut self, key: ColumnKey) -> Option<&mut ColumnSpec> {
        self.columns.iter_mut().find(|spec| spec.key == key)
    }

    /// Returns all columns in display order, hidden ones included.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Returns the width of a column.
    #[must_use]
    pub fn width(&self, key: ColumnKey) -> u32 {
        self.spec(key)
            .map_or_else(|| key.default_width(), |spec| spec.width)
    }

    /// Sets a column's width, clamped to `MIN_COLUMN_WIDTH`.
    pub fn resize(&mut self, key: ColumnKey, width: u32) {
        if let Some(spec) = self.spec_mut(key) {
            spec.width = width.max(MIN_COLUMN_WIDTH);
        }
    }

    /// Freezes or unfreezes a column.
    pub fn toggle_frozen(&mut self, key: ColumnKey) {
        if let Some(spec) = self.spec_mut(key) {
            spec.frozen = !spec.frozen;
        }
    }

    /// Returns whether a column is frozen.
    #[must_use]
    pub fn is_frozen(&self, key: ColumnKey) -> bool {
        self.spec(key).is_some_and(|spec| spec.frozen)
    }

    /// Returns whether a column is hidden.
    #[must_use]
    pub fn is_hidden(&self, key: ColumnKey) -> bool {
        self.spec(key).is_some_and(|spec| spec.hidden)
    }

    /// Returns the sticky left offset of a column: the summed widths of the
    /// visible frozen columns displayed before it.
    #[must_use]
    pub fn freeze_left_offset(&self, key: ColumnKey) -> u32 {
        self.columns
            .iter()
            .take_while(|spec| spec.key != key)
            .filter(|spec| spec.frozen && !spec.hidden)
            .map(|spec| spec.width)
            .sum()
    }

    /// Hides a column.
    pub fn hide(&mut self, key: ColumnKey) {
        if let Some(spec) = self.spec_mut(key) {
            spec.hidden = true;
        }
    }

    /// Shows every hidden column again. Widths and frozen flags are kept.
    pub fn restore_all(&mut self) {
        for spec in &mut self.columns {
            spec.hidden = false;
        }
    }

    /// Returns whether any column is hidden.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.columns.iter().any(|spec| spec.hidden)
    }

    /// Returns the visible columns in display order.
    #[must_use]
    pub fn visible_columns(&self) -> Vec<ColumnSpec> {
        self.columns
            .iter()
            .filter(|spec| !spec.hidden)
            .copied()
            .collect()
    }

    /// Returns the summed width of the visible columns.
    #[must_use]
    pub fn total_width(&self) -> u32 {
        self.columns
            .iter()
            .filter(|spec| !spec.hidden)
            .map(|spec| spec.width)
            .sum()
    }

    /// Returns the active sort.
    #[must_use]
    pub const fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Sorts by a column. Clicking the sorted column again flips the
    /// direction; a different column starts ascending.
    pub fn sort_by(&mut self, key: ColumnKey) {
        let direction: SortDirection = match self.sort {
            Some(SortState {
                key: current,
                direction: SortDirection::Ascending,
            }) if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortState { key, direction });
    }

    /// Returns the row order as indices into `employees`.
    ///
    /// Without an active sort this is the host order.
    #[must_use]
    pub fn sorted_order(&self, employees: &[Employee]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..employees.len()).collect();
        let Some(sort) = self.sort else {
            return order;
        };
        let values: Vec<SortValue> = employees
            .iter()
            .map(|employee| sort.key.sort_value(employee))
            .collect();
        order.sort_by(|a, b| {
            let ordering: Ordering = values[*a].compare(&values[*b]);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        order
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new()
    }
}
