// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row windowing for the employee list.
//!
//! Only the rows intersecting the viewport, plus a buffer above and below,
//! are materialized. Two spacer heights keep the scrollable height equal to
//! the full list.

use serde::{Deserialize, Serialize};

/// Height of one employee row in pixels.
pub const DEFAULT_ROW_HEIGHT: u32 = 30;

/// Rows rendered beyond each edge of the viewport.
pub const DEFAULT_BUFFER_ROWS: usize = 15;

/// Viewport height used before the host reports one.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

/// Scroll geometry of the grid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Vertical scroll offset in pixels.
    pub scroll_offset: u32,
    /// Visible height in pixels.
    pub height: u32,
    /// Fixed row height in pixels.
    pub row_height: u32,
    /// Extra rows above and below the visible range.
    pub buffer_rows: usize,
}

impl Viewport {
    /// Computes the window for a list of `total_rows` rows.
    #[must_use]
    pub fn window(&self, total_rows: usize) -> VirtualWindow {
        compute_window(self, total_rows)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            height: DEFAULT_VIEWPORT_HEIGHT,
            row_height: DEFAULT_ROW_HEIGHT,
            buffer_rows: DEFAULT_BUFFER_ROWS,
        }
    }
}

/// The half-open range `[start, end)` of rows to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualWindow {
    /// First rendered row.
    pub start: usize,
    /// One past the last rendered row.
    pub end: usize,
    /// Height of the spacer above the first rendered row.
    pub padding_top: usize,
    /// Height of the spacer below the last rendered row.
    pub padding_bottom: usize,
}

impl VirtualWindow {
    /// Returns whether no row is rendered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the number of rendered rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns whether a row index is rendered.
    #[must_use]
    pub const fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.end
    }
}

/// Maps a scroll position onto the slice of rows that must be rendered.
///
/// Every row intersecting `[scroll_offset, scroll_offset + height)` is
/// included, widened by `buffer_rows` on both sides and clamped to
/// `[0, total_rows]`. A zero row height renders the whole list.
///
/// # Arguments
///
/// * `viewport` - The scroll geometry
/// * `total_rows` - Number of rows in the sorted list
#[must_use]
pub fn compute_window(viewport: &Viewport, total_rows: usize) -> VirtualWindow {
    if total_rows == 0 {
        return VirtualWindow::default();
    }
    let row_height: usize = viewport.row_height as usize;
    if row_height == 0 {
        return VirtualWindow {
            start: 0,
            end: total_rows,
            padding_top: 0,
            padding_bottom: 0,
        };
    }

    let top: usize = viewport.scroll_offset as usize;
    let bottom: usize = top.saturating_add(viewport.height as usize);

    let first_visible: usize = top / row_height;
    let last_visible: usize = bottom.div_ceil(row_height);

    let start: usize = first_visible
        .saturating_sub(viewport.buffer_rows)
        .min(total_rows);
    let end: usize = last_visible
        .saturating_add(viewport.buffer_rows)
        .min(total_rows)
        .max(start);

    VirtualWindow {
        start,
        end,
        padding_top: start * row_height,
        padding_bottom: (total_rows - end) * row_height,
    }
}
