// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clipboard::Clipboard;
use crate::columns::ColumnLayout;
use crate::context_menu::ContextMenuState;
use crate::generation::{Generation, GenerationCounter};
use crate::patch::SchedulePatch;
use crate::selection::{CellPosition, GridBounds, SelectionState};
use crate::virtualization::Viewport;
use roster_domain::{
    Attachment, DateKey, Employee, EmployeeField, EmployeeId, MonthlySchedule, RulesConfig,
    ShiftCatalog, StaffingConfig,
};

/// The read-only inputs of one reducer or render pass.
///
/// Everything here is owned by the host. The grid borrows it for the
/// duration of the call and never keeps it.
#[derive(Debug, Clone, Copy)]
pub struct GridContext<'a> {
    /// Employees in host order.
    pub employees: &'a [Employee],
    /// The shift catalog.
    pub catalog: &'a ShiftCatalog,
    /// The month being edited.
    pub schedule: &'a MonthlySchedule,
    /// Compliance rules.
    pub rules: &'a RulesConfig,
    /// Staffing targets.
    pub staffing: &'a StaffingConfig,
    /// Whether editing is disabled for the current user.
    pub read_only: bool,
}

impl<'a> GridContext<'a> {
    /// Creates a new editable `GridContext`.
    ///
    /// # Arguments
    ///
    /// * `employees` - Employees in host order
    /// * `catalog` - The shift catalog
    /// * `schedule` - The month being edited
    /// * `rules` - Compliance rules
    /// * `staffing` - Staffing targets
    #[must_use]
    pub const fn new(
        employees: &'a [Employee],
        catalog: &'a ShiftCatalog,
        schedule: &'a MonthlySchedule,
        rules: &'a RulesConfig,
        staffing: &'a StaffingConfig,
    ) -> Self {
        Self {
            employees,
            catalog,
            schedule,
            rules,
            staffing,
            read_only: false,
        }
    }

    /// Returns a copy of this context with the read-only flag set.
    #[must_use]
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Looks up an employee by id.
    #[must_use]
    pub fn employee(&self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    /// Returns the size of the day-cell area. A corrupt month has no days.
    #[must_use]
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(
            self.employees.len(),
            self.schedule.days_in_month().unwrap_or(0),
        )
    }
}

/// Maps sorted row positions onto employees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowOrder<'a> {
    employees: &'a [Employee],
    order: Vec<usize>,
}

impl<'a> RowOrder<'a> {
    /// Sorts the context's employees by the layout's active sort.
    #[must_use]
    pub fn new(context: &GridContext<'a>, columns: &ColumnLayout) -> Self {
        Self {
            employees: context.employees,
            order: columns.sorted_order(context.employees),
        }
    }

    /// Returns the employee displayed at a sorted row.
    #[must_use]
    pub fn employee_at(&self, row: usize) -> Option<&'a Employee> {
        self.order
            .get(row)
            .and_then(|index| self.employees.get(*index))
    }

    /// Iterates over the employees in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Employee> + '_ {
        self.order
            .iter()
            .filter_map(|index| self.employees.get(*index))
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolves a cell position to its employee and date.
    #[must_use]
    pub fn resolve(
        &self,
        schedule: &MonthlySchedule,
        cell: CellPosition,
    ) -> Option<(&'a Employee, DateKey)> {
        let employee: &Employee = self.employee_at(cell.row)?;
        let date: DateKey = schedule.date_key(cell.day).ok()?;
        Some((employee, date))
    }
}

/// The grid's own view-model state.
///
/// It holds nothing the host owns: no employees, no schedule. It is only ever
/// replaced through [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridState {
    /// Scroll geometry.
    pub viewport: Viewport,
    /// Information-column layout and sort.
    pub columns: ColumnLayout,
    /// Selection, anchor and focus.
    pub selection: SelectionState,
    /// The copy register.
    pub clipboard: Clipboard,
    /// The open context menu.
    pub menu: ContextMenuState,
    /// The employee row being dragged.
    pub dragged_row: Option<EmployeeId>,
    /// Pending asynchronous request tokens.
    pub generations: GenerationCounter,
}

impl GridState {
    /// Creates the initial state with a stored column layout.
    #[must_use]
    pub fn with_columns(columns: ColumnLayout) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }
}

/// A mutation or side effect the host must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostIntent {
    /// Apply a patch to the schedule as one undo step.
    ApplyPatch(SchedulePatch),
    /// Move `dragged` to the position of `target` in the employee list.
    ReorderEmployees {
        /// The employee dropped.
        dragged: EmployeeId,
        /// The employee dropped onto.
        target: EmployeeId,
    },
    /// Update one whitelisted employee field.
    UpdateEmployee {
        /// The employee.
        employee: EmployeeId,
        /// The field.
        field: EmployeeField,
        /// The new value; `None` clears it.
        value: Option<String>,
    },
    /// Open a file picker and feed the result back as `AttachmentLoaded`.
    PickAttachment {
        /// Token to return with the result.
        generation: Generation,
        /// The employee of the target cell.
        employee: EmployeeId,
        /// The date of the target cell.
        date: DateKey,
    },
    /// Offer a stored attachment for download.
    DownloadAttachment {
        /// The stored document.
        attachment: Attachment,
    },
    /// Call the suggestion service and feed the result back.
    FetchSuggestions {
        /// Token to return with the result.
        generation: Generation,
    },
    /// Store the column layout in the user's preferences.
    PersistColumnLayout(ColumnLayout),
    /// Restore the schedule before the last applied patch.
    Undo,
    /// Re-apply the last undone patch.
    Redo,
}

/// The result of one reducer step.
///
/// Transitions never fail; an event that cannot apply leaves the state as it
/// was and emits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state after the event.
    pub new_state: GridState,
    /// What the host must do, in order.
    pub intents: Vec<HostIntent>,
}

impl Transition {
    /// A transition with no host work.
    #[must_use]
    pub const fn quiet(new_state: GridState) -> Self {
        Self {
            new_state,
            intents: Vec::new(),
        }
    }

    /// A transition with one intent.
    #[must_use]
    pub fn with_intent(new_state: GridState, intent: HostIntent) -> Self {
        Self {
            new_state,
            intents: vec![intent],
        }
    }
}
