// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{Fixture, key, key_down, only_patch};
use crate::{
    CellAction, CellPosition, CellSite, ColumnKey, ContextMenuState, GridEvent, GridState,
    HeaderAction, HostIntent, Key, MenuView, Observation, PatchKind, PointerTarget, SchedulePatch,
    apply_patch,
};
use roster_domain::{Attachment, EmployeeId, MonthlySchedule, ShiftCategory, ShiftId};

fn open_cell_menu(fixture: &Fixture, row: usize, day: u8) -> GridState {
    let (state, intents) = fixture.run(
        &GridState::default(),
        vec![GridEvent::CellContextMenu(CellPosition::new(row, day))],
    );
    assert!(intents.is_empty());
    state
}

fn attach(fixture: &mut Fixture, employee: &str, day: u8) {
    fixture
        .schedule
        .attachments
        .entry(EmployeeId::new(employee))
        .or_default()
        .insert(
            key(day),
            Attachment::new("note.pdf", String::from("data:application/pdf;base64,AAAA")),
        );
}

fn shift_ids(fixture: &Fixture) -> Vec<ShiftId> {
    fixture.catalog.iter().map(|shift| shift.id.clone()).collect()
}

#[test]
fn test_cell_menu_captures_site_state() {
    let mut fixture: Fixture = Fixture::new();
    fixture.assign("e2", 7, "sick");

    let state: GridState = open_cell_menu(&fixture, 1, 7);

    let site: &CellSite = state.menu.cell_site().unwrap();
    assert_eq!(site.employee, EmployeeId::new("e2"));
    assert_eq!(site.date, key(7));
    assert_eq!(site.category, Some(ShiftCategory::Absence));
    assert!(!site.has_attachment);
    assert!(matches!(
        state.menu,
        ContextMenuState::Cell {
            view: MenuView::Default,
            ..
        }
    ));
}

#[test]
fn test_attach_offered_only_for_absence_or_leave_without_attachment() {
    let mut fixture: Fixture = Fixture::new();
    fixture.assign("e1", 1, "sick");
    fixture.assign("e1", 2, "vacation");
    fixture.assign("e1", 3, "morning");
    fixture.assign("e1", 4, "sick");
    attach(&mut fixture, "e1", 4);
    let ids: Vec<ShiftId> = shift_ids(&fixture);

    for (day, offered) in [(1, true), (2, true), (3, false), (4, false), (5, false)] {
        let state: GridState = open_cell_menu(&fixture, 0, day);
        let actions: Vec<CellAction> = state.menu.cell_actions(&ids);
        assert_eq!(actions.contains(&CellAction::AttachFile), offered, "day {day}");
    }
}

#[test]
fn test_download_offered_only_with_attachment() {
    let mut fixture: Fixture = Fixture::new();
    fixture.assign("e1", 4, "sick");
    attach(&mut fixture, "e1", 4);
    let ids: Vec<ShiftId> = shift_ids(&fixture);

    let with: GridState = open_cell_menu(&fixture, 0, 4);
    let without: GridState = open_cell_menu(&fixture, 0, 5);

    assert!(with.menu.cell_actions(&ids).contains(&CellAction::DownloadAttachment));
    assert!(!without.menu.cell_actions(&ids).contains(&CellAction::DownloadAttachment));

    let (state, intents) = fixture.run(
        &with,
        vec![GridEvent::CellMenuAction(CellAction::DownloadAttachment)],
    );
    assert!(!state.menu.is_open());
    assert!(matches!(
        &intents[..],
        [HostIntent::DownloadAttachment { attachment }] if attachment.file_name == "note.pdf"
    ));
}

#[test]
fn test_unoffered_action_is_ignored() {
    let mut fixture: Fixture = Fixture::new();
    fixture.assign("e1", 3, "morning");
    let state: GridState = open_cell_menu(&fixture, 0, 3);

    let (next, intents) = fixture.run(&state, vec![GridEvent::CellMenuAction(CellAction::AttachFile)]);

    assert!(intents.is_empty());
    assert_eq!(next, state);
}

#[test]
fn test_clear_cell_removes_assignment_attachment_and_comment() {
    let mut fixture: Fixture = Fixture::new();
    fixture.assign("e1", 4, "sick");
    attach(&mut fixture, "e1", 4);
    fixture
        .schedule
        .comments
        .entry(EmployeeId::new("e1"))
        .or_default()
        .insert(key(4), String::from("Training"));
    fixture.assign("e1", 5, "off");
    let state: GridState = open_cell_menu(&fixture, 0, 4);

    let (next, intents) = fixture.run(&state, vec![GridEvent::CellMenuAction(CellAction::ClearCell)]);

    assert!(!next.menu.is_open());
    let after: MonthlySchedule = apply_patch(&fixture.schedule, only_patch(&intents)).unwrap();
    let employee: EmployeeId = EmployeeId::new("e1");
    assert!(after.shift_at(&employee, key(4)).is_none());
    assert!(after.attachment_at(&employee, key(4)).is_none());
    assert!(after.comment_at(&employee, key(4)).is_none());
    assert_eq!(after.shift_at(&employee, key(5)), Some(&ShiftId::new("off")));
    assert!(after.attachments.is_empty());
    assert!(after.comments.is_empty());
}

#[test]
fn test_observation_picker_stays_open_then_writes_comment() {
    let fixture: Fixture = Fixture::new();
    let state: GridState = open_cell_menu(&fixture, 2, 15);

    let (picker, intents) = fixture.run(
        &state,
        vec![GridEvent::CellMenuAction(CellAction::AddObservation)],
    );
    assert!(intents.is_empty());
    assert!(matches!(
        picker.menu,
        ContextMenuState::Cell {
            view: MenuView::ObservationPicker,
            ..
        }
    ));
    assert_eq!(
        picker.menu.cell_actions(std::iter::empty::<&ShiftId>()).len(),
        Observation::ALL.len() + 1
    );

    let (closed, intents) = fixture.run(
        &picker,
        vec![GridEvent::CellMenuAction(CellAction::ChooseObservation(
            Observation::ShiftSwap,
        ))],
    );
    assert!(!closed.menu.is_open());
    let patch: &SchedulePatch = only_patch(&intents);
    assert_eq!(patch.kind, PatchKind::Observation);
    let after: MonthlySchedule = apply_patch(&fixture.schedule, patch).unwrap();
    assert_eq!(after.comment_at(&EmployeeId::new("e3"), key(15)), Some("Shift swap"));
}

#[test]
fn test_back_returns_to_default_view() {
    let fixture: Fixture = Fixture::new();
    let state: GridState = open_cell_menu(&fixture, 0, 1);

    let (next, _) = fixture.run(
        &state,
        vec![
            GridEvent::CellMenuAction(CellAction::AddObservation),
            GridEvent::CellMenuAction(CellAction::Back),
        ],
    );

    assert_eq!(next.menu, state.menu);
}

#[test]
fn test_pick_shift_applies_and_closes() {
    let fixture: Fixture = Fixture::new();
    let state: GridState = open_cell_menu(&fixture, 4, 30);

    let (next, intents) = fixture.run(
        &state,
        vec![GridEvent::CellMenuAction(CellAction::PickShift(ShiftId::new("vacation")))],
    );

    assert!(!next.menu.is_open());
    let after: MonthlySchedule = apply_patch(&fixture.schedule, only_patch(&intents)).unwrap();
    assert_eq!(
        after.shift_at(&EmployeeId::new("e5"), key(30)),
        Some(&ShiftId::new("vacation"))
    );
}

#[test]
fn test_attach_file_requests_picker_with_generation() {
    let mut fixture: Fixture = Fixture::new();
    fixture.assign("e1", 2, "vacation");
    let state: GridState = open_cell_menu(&fixture, 0, 2);

    let (next, intents) = fixture.run(&state, vec![GridEvent::CellMenuAction(CellAction::AttachFile)]);

    assert!(!next.menu.is_open());
    let [HostIntent::PickAttachment { generation, employee, date }] = &intents[..] else {
        panic!("expected a picker request, got {intents:?}");
    };
    assert_eq!(employee, &EmployeeId::new("e1"));
    assert_eq!(*date, key(2));
    assert!(generation.is_for_month(2026, 3));
}

#[test]
fn test_cell_menu_is_disabled_when_read_only() {
    let fixture: Fixture = Fixture::new().read_only();

    let state: GridState = open_cell_menu(&fixture, 0, 1);

    assert!(!state.menu.is_open());
}

#[test]
fn test_header_menu_offers_restore_only_when_hidden() {
    let fixture: Fixture = Fixture::new();

    let (state, _) = fixture.run(
        &GridState::default(),
        vec![GridEvent::HeaderContextMenu(ColumnKey::Role)],
    );
    assert_eq!(
        state.menu.header_actions(&state.columns),
        vec![HeaderAction::ToggleFrozen, HeaderAction::Hide]
    );

    let (state, intents) = fixture.run(
        &state,
        vec![
            GridEvent::HeaderMenuAction(HeaderAction::Hide),
            GridEvent::HeaderContextMenu(ColumnKey::Name),
        ],
    );
    assert!(state.columns.is_hidden(ColumnKey::Role));
    assert!(matches!(&intents[..], [HostIntent::PersistColumnLayout(_)]));
    assert!(state
        .menu
        .header_actions(&state.columns)
        .contains(&HeaderAction::RestoreHidden));

    let (state, _) = fixture.run(
        &state,
        vec![GridEvent::HeaderMenuAction(HeaderAction::RestoreHidden)],
    );
    assert!(!state.columns.has_hidden());
}

#[test]
fn test_header_freeze_toggle() {
    let fixture: Fixture = Fixture::new();

    let (state, _) = fixture.run(
        &GridState::default(),
        vec![
            GridEvent::HeaderContextMenu(ColumnKey::Name),
            GridEvent::HeaderMenuAction(HeaderAction::ToggleFrozen),
        ],
    );

    assert!(state.columns.is_frozen(ColumnKey::Name));
    assert!(!state.menu.is_open());
}

#[test]
fn test_click_outside_closes_menu() {
    let fixture: Fixture = Fixture::new();
    let state: GridState = open_cell_menu(&fixture, 0, 1);

    let (inside, _) = fixture.run(&state, vec![GridEvent::PointerDown(PointerTarget::Menu)]);
    assert!(inside.menu.is_open());

    let (outside, _) = fixture.run(&state, vec![GridEvent::PointerDown(PointerTarget::Outside)]);
    assert!(!outside.menu.is_open());
}

#[test]
fn test_escape_closes_menu_before_clearing_selection() {
    let fixture: Fixture = Fixture::new();

    let (state, _) = fixture.run(
        &GridState::default(),
        vec![
            GridEvent::PointerDown(PointerTarget::Cell(CellPosition::new(0, 1))),
            GridEvent::PointerUp,
            GridEvent::CellContextMenu(CellPosition::new(0, 1)),
            key_down(Key::Escape, false),
        ],
    );
    assert!(!state.menu.is_open());
    assert!(state.selection.focus().is_some());

    let (state, _) = fixture.run(&state, vec![key_down(Key::Escape, false)]);
    assert!(state.selection.focus().is_none());
}
