// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::columns::ColumnKey;
use crate::context_menu::{CellAction, HeaderAction};
use crate::generation::Generation;
use crate::selection::{CellPosition, Direction};
use roster_domain::{Attachment, DateKey, EmployeeField, EmployeeId, SuggestionMap};

/// Where a primary pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A day cell.
    Cell(CellPosition),
    /// Inside the open context menu.
    Menu,
    /// Anywhere outside the grid and the menu.
    Outside,
}

/// A key the grid reacts to.
///
/// The host maps platform shortcuts (Ctrl+C, Cmd+Z, ...) onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An arrow key.
    Arrow(Direction),
    /// Copy the focused cell's shift.
    Copy,
    /// Paste over the selection.
    Paste,
    /// Cycle the focused cell's shift.
    Enter,
    /// Clear the selected assignments.
    Delete,
    /// Close the menu, or drop the selection when no menu is open.
    Escape,
    /// Step back through the patch history.
    Undo,
    /// Step forward through the patch history.
    Redo,
}

/// An input event as data.
///
/// Events are the only way to change the grid's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    /// The body was scrolled.
    Scrolled {
        /// New vertical offset in pixels.
        scroll_offset: u32,
    },
    /// The body was resized.
    ViewportResized {
        /// New visible height in pixels.
        height: u32,
    },
    /// Primary pointer pressed.
    PointerDown(PointerTarget),
    /// Pointer entered a cell.
    PointerEnter(CellPosition),
    /// Primary pointer released anywhere.
    PointerUp,
    /// A key was pressed.
    KeyDown {
        /// The key.
        key: Key,
        /// Whether Shift was held.
        shift: bool,
        /// Whether focus is inside a text input or select.
        in_text_input: bool,
    },
    /// A cell was clicked or activated.
    ActivateCell(CellPosition),
    /// A cell was right-clicked.
    CellContextMenu(CellPosition),
    /// A header was right-clicked.
    HeaderContextMenu(ColumnKey),
    /// An entry of the open cell menu was chosen.
    CellMenuAction(CellAction),
    /// An entry of the open header menu was chosen.
    HeaderMenuAction(HeaderAction),
    /// A column header was clicked.
    HeaderClicked(ColumnKey),
    /// A column was resized.
    ColumnResized {
        /// The column.
        column: ColumnKey,
        /// Requested width in pixels.
        width: u32,
    },
    /// An employee row started being dragged.
    RowDragStart(EmployeeId),
    /// The dragged row was dropped onto another row.
    RowDrop(EmployeeId),
    /// The drag ended without a drop.
    RowDragEnd,
    /// A whitelisted employee field was edited.
    UpdateEmployee {
        /// The employee.
        employee: EmployeeId,
        /// The field.
        field: EmployeeField,
        /// The new value; `None` clears it.
        value: Option<String>,
    },
    /// The file picked for an attachment was read and encoded.
    AttachmentLoaded {
        /// The request token.
        generation: Generation,
        /// The employee of the target cell.
        employee: EmployeeId,
        /// The date of the target cell.
        date: DateKey,
        /// The encoded document.
        attachment: Attachment,
    },
    /// Reading the picked file failed or was cancelled.
    AttachmentFailed {
        /// The request token.
        generation: Generation,
    },
    /// The user asked for day-off suggestions.
    RequestSuggestions,
    /// The suggestion service answered.
    SuggestionsReady {
        /// The request token.
        generation: Generation,
        /// Proposed assignments.
        suggestions: SuggestionMap,
    },
    /// The suggestion service failed.
    SuggestionsFailed {
        /// The request token.
        generation: Generation,
        /// Why the call failed.
        reason: String,
    },
}
