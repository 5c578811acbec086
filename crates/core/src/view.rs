// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure derivation of what the presentation layer draws.
//!
//! Nothing here changes state. Only rows inside the virtual window are
//! materialized; the footer covers every day of the month.

use crate::columns::{ColumnKey, ColumnSpec};
use crate::error::CoreError;
use crate::memo::ValidationCache;
use crate::state::{GridContext, GridState, RowOrder};
use crate::virtualization::VirtualWindow;
use roster_domain::{
    DailyStat, DateKey, Employee, MonthlySchedule, Shift, ShiftCategory, ShiftId, ValidationResult,
    count_days_off, holiday_name, is_weekend_or_holiday, required_days_off, sunday_rotation_gaps,
    weekday_label,
};

/// A visible information column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnView {
    /// Width, frozen and hidden flags.
    pub spec: ColumnSpec,
    /// Sticky left offset, for frozen columns only.
    pub left_offset: Option<u32>,
}

/// One day header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeaderView {
    /// Day of month.
    pub day: u8,
    /// Short weekday label.
    pub weekday: &'static str,
    /// Holiday name, if any.
    pub holiday: Option<&'static str>,
    /// Weekend or holiday.
    pub highlighted: bool,
}

/// One day cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Day of month.
    pub day: u8,
    /// The cell's date.
    pub date: DateKey,
    /// Assigned shift id.
    pub shift: Option<ShiftId>,
    /// Glyph of the assigned shift.
    pub code: Option<String>,
    /// Category of the assigned shift.
    pub category: Option<ShiftCategory>,
    /// Whether an attachment is stored.
    pub has_attachment: bool,
    /// Stored observation.
    pub comment: Option<String>,
    /// Inside the selection.
    pub selected: bool,
    /// Has keyboard focus.
    pub focused: bool,
    /// Weekend or holiday.
    pub highlighted: bool,
}

/// One materialized employee row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Sorted row index.
    pub row: usize,
    /// The employee.
    pub employee: Employee,
    /// Text of each visible information column.
    pub info: Vec<(ColumnKey, String)>,
    /// The day cells.
    pub cells: Vec<CellView>,
    /// Consecutive-day check.
    pub validation: ValidationResult,
    /// Day-off cells in the month.
    pub days_off: usize,
    /// Days off the shift pattern entitles the employee to.
    pub required_days_off: Option<u8>,
    /// Sundays completing a run of worked Sundays, when Sundays off are preferred.
    pub sunday_gaps: Vec<u8>,
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    /// The rendered row range and spacer heights.
    pub window: VirtualWindow,
    /// Visible information columns in display order.
    pub columns: Vec<ColumnView>,
    /// Summed width of the visible information columns.
    pub info_width: u32,
    /// One header per day.
    pub day_headers: Vec<DayHeaderView>,
    /// Rows inside the window.
    pub rows: Vec<RowView>,
    /// Staffing figures per day.
    pub footer: Vec<DailyStat>,
    /// Whether editing is disabled.
    pub read_only: bool,
}

impl GridView {
    /// Returns the days whose staffing is below target.
    #[must_use]
    pub fn deficit_days(&self) -> Vec<u8> {
        self.footer
            .iter()
            .filter(|stat| stat.is_deficit())
            .map(|stat| stat.day)
            .collect()
    }
}

/// Derives the frame for the current state.
///
/// # Arguments
///
/// * `context` - The host-owned inputs
/// * `state` - The grid state
/// * `cache` - Memoized validation results
/// * `version` - The host's schedule version, used as the cache key
///
/// # Errors
///
/// Returns an error if the schedule's month index is invalid.
pub fn build_view(
    context: &GridContext<'_>,
    state: &GridState,
    cache: &mut ValidationCache,
    version: u64,
) -> Result<GridView, CoreError> {
    let schedule: &MonthlySchedule = context.schedule;
    let dates: Vec<DateKey> = schedule.date_keys()?;
    let rows: RowOrder<'_> = RowOrder::new(context, &state.columns);
    let window: VirtualWindow = state.viewport.window(rows.len());

    let columns: Vec<ColumnView> = state
        .columns
        .visible_columns()
        .into_iter()
        .map(|spec| ColumnView {
            spec,
            left_offset: spec
                .frozen
                .then(|| state.columns.freeze_left_offset(spec.key)),
        })
        .collect();

    let day_headers: Vec<DayHeaderView> = dates
        .iter()
        .map(|date| DayHeaderView {
            day: date.day(),
            weekday: weekday_label(date.weekday()),
            holiday: holiday_name(date.date()),
            highlighted: is_weekend_or_holiday(date.date()),
        })
        .collect();

    let mut row_views: Vec<RowView> = Vec::with_capacity(window.len());
    for row in window.start..window.end {
        let Some(employee) = rows.employee_at(row) else {
            continue;
        };
        let cells: Vec<CellView> = dates
            .iter()
            .map(|date| {
                let shift: Option<&ShiftId> = schedule.shift_at(&employee.id, *date);
                let catalog_shift: Option<&Shift> = shift.and_then(|id| context.catalog.get(id));
                CellView {
                    day: date.day(),
                    date: *date,
                    shift: shift.cloned(),
                    code: catalog_shift.map(|s| s.code.clone()),
                    category: catalog_shift.map(|s| s.category),
                    has_attachment: schedule.attachment_at(&employee.id, *date).is_some(),
                    comment: schedule.comment_at(&employee.id, *date).map(str::to_string),
                    selected: state.selection.is_cell_selected(row, date.day()),
                    focused: state
                        .selection
                        .focus()
                        .is_some_and(|cell| cell.row == row && cell.day == date.day()),
                    highlighted: is_weekend_or_holiday(date.date()),
                }
            })
            .collect();

        let sunday_gaps: Vec<u8> = if context.rules.prefer_sunday_off {
            sunday_rotation_gaps(&employee.id, schedule, context.catalog, context.rules)?
        } else {
            Vec::new()
        };

        row_views.push(RowView {
            row,
            employee: employee.clone(),
            info: columns
                .iter()
                .map(|column| (column.spec.key, column.spec.key.display(employee)))
                .collect(),
            cells,
            validation: cache.validation(
                version,
                &employee.id,
                schedule,
                context.catalog,
                context.rules,
            )?,
            days_off: count_days_off(&employee.id, schedule, context.catalog),
            required_days_off: required_days_off(
                &employee.shift_pattern,
                schedule.year,
                schedule.month,
            )
            .ok(),
            sunday_gaps,
        });
    }

    let footer: Vec<DailyStat> = cache.daily_stats(
        version,
        context.employees,
        schedule,
        context.catalog,
        context.staffing,
    )?;

    Ok(GridView {
        window,
        columns,
        info_width: state.columns.total_width(),
        day_headers,
        rows: row_views,
        footer,
        read_only: context.read_only,
    })
}
