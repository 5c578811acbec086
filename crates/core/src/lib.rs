// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod clipboard;
mod columns;
mod command;
mod context_menu;
mod error;
mod generation;
mod memo;
mod patch;
mod selection;
mod state;
mod view;
mod virtualization;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use clipboard::Clipboard;
pub use columns::{
    ColumnKey, ColumnLayout, ColumnSpec, MIN_COLUMN_WIDTH, SortDirection, SortState, SortValue,
};
pub use command::{GridEvent, Key, PointerTarget};
pub use context_menu::{
    CellAction, CellSite, ContextMenuState, HeaderAction, MenuView, Observation,
};
pub use error::CoreError;
pub use generation::{Generation, GenerationCounter, RequestKind};
pub use memo::ValidationCache;
pub use patch::{PatchKind, PatchOp, SchedulePatch, apply_patch, merge_suggestions};
pub use selection::{CellPosition, Direction, GridBounds, SelectionRect, SelectionState};
pub use state::{GridContext, GridState, HostIntent, RowOrder, Transition};
pub use view::{CellView, ColumnView, DayHeaderView, GridView, RowView, build_view};
pub use virtualization::{
    DEFAULT_BUFFER_ROWS, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, Viewport, VirtualWindow,
    compute_window,
};
