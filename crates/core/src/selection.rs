// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rectangular cell selection and keyboard navigation.
//!
//! Rows are positions in the sorted employee list; columns are 1-based days.
//! The raw anchor/cursor pair is stored as given and only normalized when a
//! rectangle is requested.

use serde::{Deserialize, Serialize};

/// One day cell, addressed by sorted row and day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    /// Row index in the sorted employee list.
    pub row: usize,
    /// Day of month, 1-based.
    pub day: u8,
}

impl CellPosition {
    /// Creates a new `CellPosition`.
    #[must_use]
    pub const fn new(row: usize, day: u8) -> Self {
        Self { row, day }
    }
}

/// Size of the day-cell area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    /// Number of employee rows.
    pub rows: usize,
    /// Number of days in the month.
    pub days: u8,
}

impl GridBounds {
    /// Creates a new `GridBounds`.
    #[must_use]
    pub const fn new(rows: usize, days: u8) -> Self {
        Self { rows, days }
    }

    /// Returns whether the grid has no cell at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.days == 0
    }

    /// Returns whether a position lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellPosition) -> bool {
        cell.row < self.rows && cell.day >= 1 && cell.day <= self.days
    }
}

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Previous employee.
    Up,
    /// Next employee.
    Down,
    /// Previous day.
    Left,
    /// Next day.
    Right,
}

impl Direction {
    /// Moves one step from `cell`, clamped to `bounds`.
    #[must_use]
    pub fn step(self, cell: CellPosition, bounds: GridBounds) -> CellPosition {
        let last_row: usize = bounds.rows.saturating_sub(1);
        let (row, day): (usize, u8) = match self {
            Self::Up => (cell.row.saturating_sub(1), cell.day),
            Self::Down => (cell.row.saturating_add(1), cell.day),
            Self::Left => (cell.row, cell.day.saturating_sub(1)),
            Self::Right => (cell.row, cell.day.saturating_add(1)),
        };
        CellPosition {
            row: row.min(last_row),
            day: day.clamp(1, bounds.days.max(1)),
        }
    }
}

/// A normalized selection rectangle, inclusive on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRect {
    /// Top row.
    pub start_row: usize,
    /// Bottom row.
    pub end_row: usize,
    /// First day.
    pub start_col: u8,
    /// Last day.
    pub end_col: u8,
}

impl SelectionRect {
    /// Builds the rectangle spanning two corners in any order.
    #[must_use]
    pub fn spanning(a: CellPosition, b: CellPosition) -> Self {
        Self {
            start_row: a.row.min(b.row),
            end_row: a.row.max(b.row),
            start_col: a.day.min(b.day),
            end_col: a.day.max(b.day),
        }
    }

    /// Returns whether a cell lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, row: usize, day: u8) -> bool {
        row >= self.start_row && row <= self.end_row && day >= self.start_col && day <= self.end_col
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = CellPosition> + '_ {
        (self.start_row..=self.end_row).flat_map(move |row| {
            (self.start_col..=self.end_col).map(move |day| CellPosition { row, day })
        })
    }

    /// Number of cells covered.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        (self.end_row - self.start_row + 1) * usize::from(self.end_col - self.start_col + 1)
    }
}

/// Selection, anchor and keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    corners: Option<(CellPosition, CellPosition)>,
    anchor: Option<CellPosition>,
    focus: Option<CellPosition>,
    dragging: bool,
}

impl SelectionState {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            corners: None,
            anchor: None,
            focus: None,
            dragging: false,
        }
    }

    /// Returns the anchor corner.
    #[must_use]
    pub const fn anchor(&self) -> Option<CellPosition> {
        self.anchor
    }

    /// Returns the focused cell.
    #[must_use]
    pub const fn focus(&self) -> Option<CellPosition> {
        self.focus
    }

    /// Returns whether a pointer drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts a selection at `cell` and begins dragging.
    pub const fn pointer_down(&mut self, cell: CellPosition) {
        self.anchor = Some(cell);
        self.focus = Some(cell);
        self.corners = Some((cell, cell));
        self.dragging = true;
    }

    /// Extends the selection to `cell` while dragging. The anchor stays put.
    pub const fn pointer_enter(&mut self, cell: CellPosition) {
        if !self.dragging {
            return;
        }
        if let Some(anchor) = self.anchor {
            self.corners = Some((anchor, cell));
        }
    }

    /// Ends a drag. Selection and focus persist.
    pub const fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Moves the focus one step.
    ///
    /// Without `extend` the selection collapses onto the new focus and the
    /// anchor follows it. With `extend` the selection spans the existing
    /// anchor (or the old focus if there was none) and the new focus. With no
    /// focus yet, the top-left cell receives it.
    pub fn navigate(&mut self, direction: Direction, extend: bool, bounds: GridBounds) {
        if bounds.is_empty() {
            return;
        }
        let Some(current) = self.focus else {
            let origin: CellPosition = CellPosition::new(0, 1);
            self.anchor = Some(origin);
            self.focus = Some(origin);
            self.corners = Some((origin, origin));
            return;
        };

        let next: CellPosition = direction.step(current, bounds);
        self.focus = Some(next);
        if extend {
            let anchor: CellPosition = *self.anchor.get_or_insert(current);
            self.corners = Some((anchor, next));
        } else {
            self.anchor = Some(next);
            self.corners = Some((next, next));
        }
    }

    /// Forgets selection, anchor and focus.
    pub const fn clear(&mut self) {
        *self = Self::new();
    }

    /// Drops any part of the state that no longer fits `bounds`, e.g. after
    /// the employee list shrank.
    pub fn retain_within(&mut self, bounds: GridBounds) {
        let corners_fit: bool = self
            .corners
            .is_none_or(|(a, b)| bounds.contains(a) && bounds.contains(b));
        let focus_fits: bool = self.focus.is_none_or(|cell| bounds.contains(cell));
        if !corners_fit || !focus_fits {
            self.clear();
        }
    }

    /// Returns the normalized selection rectangle.
    #[must_use]
    pub fn normalized(&self) -> Option<SelectionRect> {
        self.corners
            .map(|(a, b)| SelectionRect::spanning(a, b))
    }

    /// Returns whether a cell is inside the selection.
    #[must_use]
    pub fn is_cell_selected(&self, row: usize, day: u8) -> bool {
        self.normalized()
            .is_some_and(|rect| rect.contains(row, day))
    }
}
