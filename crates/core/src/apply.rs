// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::columns::ColumnLayout;
use crate::command::{GridEvent, Key, PointerTarget};
use crate::context_menu::{CellAction, CellSite, ContextMenuState, HeaderAction, MenuView};
use crate::generation::{Generation, RequestKind};
use crate::patch::{PatchKind, PatchOp, SchedulePatch, merge_suggestions};
use crate::selection::{CellPosition, GridBounds, SelectionRect};
use crate::state::{GridContext, GridState, HostIntent, RowOrder, Transition};
use roster_domain::{DateKey, Employee, EmployeeId, Shift, ShiftId};
use tracing::{debug, warn};

/// Applies one event to the grid state.
///
/// This is the single mutation surface of the grid. It never fails and never
/// blocks: events that do not apply (navigation on an empty grid, paste
/// without a register, edits while read-only, stale async results) return
/// the state unchanged with no intents.
///
/// # Arguments
///
/// * `context` - The host-owned inputs (immutable)
/// * `state` - The current grid state (immutable)
/// * `event` - The event to apply
///
/// # Returns
///
/// The next state and the intents the host must carry out.
#[allow(clippy::too_many_lines)]
#[must_use]
pub fn apply(context: &GridContext<'_>, state: &GridState, event: GridEvent) -> Transition {
    let mut next: GridState = state.clone();
    next.selection.retain_within(context.bounds());

    match event {
        GridEvent::Scrolled { scroll_offset } => {
            next.viewport.scroll_offset = scroll_offset;
            Transition::quiet(next)
        }
        GridEvent::ViewportResized { height } => {
            next.viewport.height = height;
            Transition::quiet(next)
        }
        GridEvent::PointerDown(target) => {
            match target {
                PointerTarget::Cell(cell) => {
                    if context.bounds().contains(cell) {
                        next.selection.pointer_down(cell);
                    } else {
                        debug!(row = cell.row, day = cell.day, "Pointer down outside bounds");
                    }
                }
                PointerTarget::Menu => {}
                PointerTarget::Outside => {
                    next.menu = ContextMenuState::Closed;
                    next.selection.clear();
                }
            }
            Transition::quiet(next)
        }
        GridEvent::PointerEnter(cell) => {
            if context.bounds().contains(cell) {
                next.selection.pointer_enter(cell);
            }
            Transition::quiet(next)
        }
        GridEvent::PointerUp => {
            next.selection.pointer_up();
            Transition::quiet(next)
        }
        GridEvent::KeyDown {
            key,
            shift,
            in_text_input,
        } => {
            if in_text_input {
                return Transition::quiet(next);
            }
            apply_key(context, next, key, shift)
        }
        GridEvent::ActivateCell(cell) => {
            if !context.bounds().contains(cell) {
                return Transition::quiet(next);
            }
            next.selection.pointer_down(cell);
            next.selection.pointer_up();
            let patch: Option<SchedulePatch> = cycle_patch(context, &next, cell);
            emit_patch(next, patch)
        }
        GridEvent::CellContextMenu(cell) => {
            if context.read_only {
                debug!("Ignoring cell menu in read-only mode");
                return Transition::quiet(next);
            }
            let rows: RowOrder<'_> = RowOrder::new(context, &next.columns);
            if let Some((employee, date)) = rows.resolve(context.schedule, cell) {
                next.menu = ContextMenuState::Cell {
                    site: CellSite {
                        position: cell,
                        employee: employee.id.clone(),
                        date,
                        category: context
                            .catalog
                            .category_of(context.schedule.shift_at(&employee.id, date)),
                        has_attachment: context
                            .schedule
                            .attachment_at(&employee.id, date)
                            .is_some(),
                    },
                    view: MenuView::Default,
                };
            }
            Transition::quiet(next)
        }
        GridEvent::HeaderContextMenu(column) => {
            next.menu = ContextMenuState::Header { column };
            Transition::quiet(next)
        }
        GridEvent::CellMenuAction(action) => apply_cell_action(context, next, action),
        GridEvent::HeaderMenuAction(action) => apply_header_action(next, action),
        GridEvent::HeaderClicked(column) => {
            next.columns.sort_by(column);
            persist_columns(next)
        }
        GridEvent::ColumnResized { column, width } => {
            next.columns.resize(column, width);
            if next.columns == state.columns {
                return Transition::quiet(next);
            }
            persist_columns(next)
        }
        GridEvent::RowDragStart(employee) => {
            if context.read_only || context.employee(&employee).is_none() {
                return Transition::quiet(next);
            }
            next.dragged_row = Some(employee);
            Transition::quiet(next)
        }
        GridEvent::RowDrop(target) => {
            let Some(dragged) = next.dragged_row.take() else {
                return Transition::quiet(next);
            };
            if dragged == target || context.employee(&target).is_none() {
                return Transition::quiet(next);
            }
            Transition::with_intent(next, HostIntent::ReorderEmployees { dragged, target })
        }
        GridEvent::RowDragEnd => {
            next.dragged_row = None;
            Transition::quiet(next)
        }
        GridEvent::UpdateEmployee {
            employee,
            field,
            value,
        } => {
            if context.read_only {
                return Transition::quiet(next);
            }
            let Some(current) = context.employee(&employee) else {
                debug!(employee = %employee, "Update for unknown employee");
                return Transition::quiet(next);
            };
            if let Err(err) = current.with_field(field, value.as_deref()) {
                debug!(employee = %employee, error = %err, "Rejected employee update");
                return Transition::quiet(next);
            }
            Transition::with_intent(
                next,
                HostIntent::UpdateEmployee {
                    employee,
                    field,
                    value,
                },
            )
        }
        GridEvent::AttachmentLoaded {
            generation,
            employee,
            date,
            attachment,
        } => {
            if !accept(context, &mut next, RequestKind::Attachment, generation) {
                return Transition::quiet(next);
            }
            if context.read_only || !date.is_in_month(context.schedule.year, context.schedule.month)
            {
                return Transition::quiet(next);
            }
            let patch: SchedulePatch = SchedulePatch::new(
                PatchKind::Attachment,
                vec![PatchOp::SetAttachment {
                    employee,
                    date,
                    attachment,
                }],
            );
            emit_patch(next, Some(patch))
        }
        GridEvent::AttachmentFailed { generation } => {
            if accept(context, &mut next, RequestKind::Attachment, generation) {
                debug!(generation = %generation, "Attachment read failed; nothing stored");
            }
            Transition::quiet(next)
        }
        GridEvent::RequestSuggestions => {
            if context.read_only {
                return Transition::quiet(next);
            }
            let generation: Generation = next.generations.issue(
                RequestKind::Suggestions,
                context.schedule.year,
                context.schedule.month,
            );
            Transition::with_intent(next, HostIntent::FetchSuggestions { generation })
        }
        GridEvent::SuggestionsReady {
            generation,
            suggestions,
        } => {
            if !accept(context, &mut next, RequestKind::Suggestions, generation)
                || context.read_only
            {
                return Transition::quiet(next);
            }
            let patch: SchedulePatch =
                merge_suggestions(context.schedule, &suggestions, context.catalog);
            emit_patch(next, Some(patch))
        }
        GridEvent::SuggestionsFailed { generation, reason } => {
            if accept(context, &mut next, RequestKind::Suggestions, generation) {
                warn!(generation = %generation, reason = %reason, "Suggestion service failed; schedule unchanged");
            }
            Transition::quiet(next)
        }
    }
}

fn apply_key(context: &GridContext<'_>, mut next: GridState, key: Key, shift: bool) -> Transition {
    let bounds: GridBounds = context.bounds();
    match key {
        Key::Arrow(direction) => {
            next.selection.navigate(direction, shift, bounds);
            Transition::quiet(next)
        }
        Key::Copy => {
            let Some(focus) = next.selection.focus() else {
                return Transition::quiet(next);
            };
            let rows: RowOrder<'_> = RowOrder::new(context, &next.columns);
            if let Some((employee, date)) = rows.resolve(context.schedule, focus) {
                next.clipboard
                    .copy(context.schedule.shift_at(&employee.id, date));
            }
            Transition::quiet(next)
        }
        Key::Paste => {
            if context.read_only {
                return Transition::quiet(next);
            }
            let Some(rect) = next.selection.normalized() else {
                return Transition::quiet(next);
            };
            let targets: Vec<(EmployeeId, DateKey)> = selected_cells(context, &next, rect);
            let patch: Option<SchedulePatch> = next.clipboard.paste(targets);
            if patch.is_none() {
                debug!("Paste without register or target");
            }
            emit_patch(next, patch)
        }
        Key::Enter => {
            let Some(focus) = next.selection.focus() else {
                return Transition::quiet(next);
            };
            let patch: Option<SchedulePatch> = cycle_patch(context, &next, focus);
            emit_patch(next, patch)
        }
        Key::Delete => {
            if context.read_only {
                return Transition::quiet(next);
            }
            let Some(rect) = next.selection.normalized() else {
                return Transition::quiet(next);
            };
            let ops: Vec<PatchOp> = selected_cells(context, &next, rect)
                .into_iter()
                .filter(|(employee, date)| context.schedule.shift_at(employee, *date).is_some())
                .map(|(employee, date)| PatchOp::ClearAssignment { employee, date })
                .collect();
            let patch: Option<SchedulePatch> = (!ops.is_empty())
                .then(|| SchedulePatch::new(PatchKind::ClearSelection, ops));
            emit_patch(next, patch)
        }
        Key::Escape => {
            if next.menu.is_open() {
                next.menu = ContextMenuState::Closed;
            } else {
                next.selection.clear();
            }
            Transition::quiet(next)
        }
        Key::Undo | Key::Redo => {
            if context.read_only {
                return Transition::quiet(next);
            }
            let intent: HostIntent = if key == Key::Undo {
                HostIntent::Undo
            } else {
                HostIntent::Redo
            };
            Transition::with_intent(next, intent)
        }
    }
}

fn apply_cell_action(
    context: &GridContext<'_>,
    mut next: GridState,
    action: CellAction,
) -> Transition {
    if context.read_only || !next.menu.offers_cell_action(&action) {
        debug!(?action, "Cell action not offered");
        return Transition::quiet(next);
    }
    let Some(site) = next.menu.cell_site().cloned() else {
        return Transition::quiet(next);
    };

    match action {
        CellAction::PickShift(shift) => {
            next.menu = ContextMenuState::Closed;
            if context.catalog.get(&shift).is_none() {
                debug!(shift = %shift, "Picked shift is not in the catalog");
                return Transition::quiet(next);
            }
            let patch: SchedulePatch = SchedulePatch::new(
                PatchKind::SetShift,
                vec![PatchOp::SetShift {
                    employee: site.employee,
                    date: site.date,
                    shift,
                }],
            );
            emit_patch(next, Some(patch))
        }
        CellAction::AttachFile => {
            next.menu = ContextMenuState::Closed;
            let generation: Generation = next.generations.issue(
                RequestKind::Attachment,
                context.schedule.year,
                context.schedule.month,
            );
            Transition::with_intent(
                next,
                HostIntent::PickAttachment {
                    generation,
                    employee: site.employee,
                    date: site.date,
                },
            )
        }
        CellAction::DownloadAttachment => {
            next.menu = ContextMenuState::Closed;
            match context.schedule.attachment_at(&site.employee, site.date) {
                Some(attachment) => Transition::with_intent(
                    next,
                    HostIntent::DownloadAttachment {
                        attachment: attachment.clone(),
                    },
                ),
                None => Transition::quiet(next),
            }
        }
        CellAction::ClearCell => {
            next.menu = ContextMenuState::Closed;
            let patch: SchedulePatch = SchedulePatch::new(
                PatchKind::ClearCell,
                vec![PatchOp::ClearCell {
                    employee: site.employee,
                    date: site.date,
                }],
            );
            emit_patch(next, Some(patch))
        }
        CellAction::AddObservation => {
            next.menu = ContextMenuState::Cell {
                site,
                view: MenuView::ObservationPicker,
            };
            Transition::quiet(next)
        }
        CellAction::ChooseObservation(observation) => {
            next.menu = ContextMenuState::Closed;
            let patch: SchedulePatch = SchedulePatch::new(
                PatchKind::Observation,
                vec![PatchOp::SetComment {
                    employee: site.employee,
                    date: site.date,
                    text: observation.label().to_string(),
                }],
            );
            emit_patch(next, Some(patch))
        }
        CellAction::Back => {
            next.menu = ContextMenuState::Cell {
                site,
                view: MenuView::Default,
            };
            Transition::quiet(next)
        }
    }
}

fn apply_header_action(mut next: GridState, action: HeaderAction) -> Transition {
    let ContextMenuState::Header { column } = next.menu else {
        return Transition::quiet(next);
    };
    next.menu = ContextMenuState::Closed;
    match action {
        HeaderAction::ToggleFrozen => next.columns.toggle_frozen(column),
        HeaderAction::Hide => next.columns.hide(column),
        HeaderAction::RestoreHidden => {
            if !next.columns.has_hidden() {
                return Transition::quiet(next);
            }
            next.columns.restore_all();
        }
    }
    persist_columns(next)
}

fn selected_cells(
    context: &GridContext<'_>,
    state: &GridState,
    rect: SelectionRect,
) -> Vec<(EmployeeId, DateKey)> {
    let rows: RowOrder<'_> = RowOrder::new(context, &state.columns);
    rect.cells()
        .filter_map(|cell| rows.resolve(context.schedule, cell))
        .map(|(employee, date)| (employee.id.clone(), date))
        .collect()
}

fn cycle_patch(
    context: &GridContext<'_>,
    state: &GridState,
    cell: CellPosition,
) -> Option<SchedulePatch> {
    if context.read_only || context.catalog.is_empty() {
        return None;
    }
    let rows: RowOrder<'_> = RowOrder::new(context, &state.columns);
    let (employee, date): (&Employee, DateKey) = rows.resolve(context.schedule, cell)?;
    let current: Option<&ShiftId> = context.schedule.shift_at(&employee.id, date);
    let following: &Shift = context.catalog.next_after(current)?;
    Some(SchedulePatch::new(
        PatchKind::CycleShift,
        vec![PatchOp::SetShift {
            employee: employee.id.clone(),
            date,
            shift: following.id.clone(),
        }],
    ))
}

fn accept(
    context: &GridContext<'_>,
    next: &mut GridState,
    kind: RequestKind,
    generation: Generation,
) -> bool {
    let current: bool = next.generations.accept(
        kind,
        generation,
        context.schedule.year,
        context.schedule.month,
    );
    if !current {
        warn!(generation = %generation, ?kind, "Dropping stale completion");
    }
    current
}

fn emit_patch(next: GridState, patch: Option<SchedulePatch>) -> Transition {
    match patch.filter(|patch| !patch.is_empty()) {
        Some(patch) => Transition::with_intent(next, HostIntent::ApplyPatch(patch)),
        None => Transition::quiet(next),
    }
}

fn persist_columns(next: GridState) -> Transition {
    let layout: ColumnLayout = next.columns.clone();
    Transition::with_intent(next, HostIntent::PersistColumnLayout(layout))
}
