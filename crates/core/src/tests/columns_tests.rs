// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_employee;
use crate::{ColumnKey, ColumnLayout, ColumnSpec, MIN_COLUMN_WIDTH, SortDirection};
use roster_domain::Employee;

fn visible_keys(layout: &ColumnLayout) -> Vec<ColumnKey> {
    layout
        .visible_columns()
        .iter()
        .map(|spec| spec.key)
        .collect()
}

#[test]
fn test_default_layout_shows_every_column() {
    let layout: ColumnLayout = ColumnLayout::new();

    assert_eq!(visible_keys(&layout), ColumnKey::ALL.to_vec());
    assert_eq!(layout.width(ColumnKey::Name), 220);
    assert_eq!(layout.width(ColumnKey::BankHours), 60);
    assert_eq!(layout.total_width(), 220 + 80 + 120 + 100 + 80 + 80 + 100 + 60);
}

#[test]
fn test_resize_clamps_to_minimum() {
    let mut layout: ColumnLayout = ColumnLayout::new();

    layout.resize(ColumnKey::Role, 10);

    assert_eq!(layout.width(ColumnKey::Role), MIN_COLUMN_WIDTH);
}

#[test]
fn test_resize_is_idempotent_and_targets_one_column() {
    let mut layout: ColumnLayout = ColumnLayout::new();

    layout.resize(ColumnKey::Role, 150);
    let once: ColumnLayout = layout.clone();
    layout.resize(ColumnKey::Role, 150);

    assert_eq!(layout, once);
    assert_eq!(layout.width(ColumnKey::Role), 150);
    assert_eq!(layout.width(ColumnKey::Name), 220);
}

#[test]
fn test_hide_then_restore_all_returns_visible_set() {
    let mut layout: ColumnLayout = ColumnLayout::new();
    let before: Vec<ColumnKey> = visible_keys(&layout);

    layout.hide(ColumnKey::Role);
    layout.toggle_frozen(ColumnKey::Name);
    layout.hide(ColumnKey::Cpf);
    layout.toggle_frozen(ColumnKey::Id);
    assert!(!visible_keys(&layout).contains(&ColumnKey::Role));
    assert!(layout.has_hidden());

    layout.restore_all();

    assert_eq!(visible_keys(&layout), before);
    assert!(!layout.has_hidden());
}

#[test]
fn test_unfreezing_recomputes_left_offsets() {
    let mut layout: ColumnLayout = ColumnLayout::new();
    layout.toggle_frozen(ColumnKey::Name);
    layout.toggle_frozen(ColumnKey::Id);
    layout.toggle_frozen(ColumnKey::Role);

    assert_eq!(layout.freeze_left_offset(ColumnKey::Name), 0);
    assert_eq!(layout.freeze_left_offset(ColumnKey::Id), 220);
    assert_eq!(layout.freeze_left_offset(ColumnKey::Role), 300);

    layout.toggle_frozen(ColumnKey::Id);

    assert!(layout.is_frozen(ColumnKey::Name));
    assert!(!layout.is_frozen(ColumnKey::Id));
    assert_eq!(layout.freeze_left_offset(ColumnKey::Role), 220);
}

#[test]
fn test_hidden_frozen_column_does_not_offset_others() {
    let mut layout: ColumnLayout = ColumnLayout::new();
    layout.toggle_frozen(ColumnKey::Name);
    layout.toggle_frozen(ColumnKey::Id);
    layout.hide(ColumnKey::Name);

    assert_eq!(layout.freeze_left_offset(ColumnKey::Id), 0);
}

#[test]
fn test_sort_toggles_direction_on_same_key() {
    let mut layout: ColumnLayout = ColumnLayout::new();

    layout.sort_by(ColumnKey::Name);
    assert_eq!(layout.sort().unwrap().direction, SortDirection::Ascending);
    layout.sort_by(ColumnKey::Name);
    assert_eq!(layout.sort().unwrap().direction, SortDirection::Descending);
    layout.sort_by(ColumnKey::Name);
    assert_eq!(layout.sort().unwrap().direction, SortDirection::Ascending);

    layout.sort_by(ColumnKey::Name);
    layout.sort_by(ColumnKey::Role);
    assert_eq!(layout.sort().unwrap().key, ColumnKey::Role);
    assert_eq!(layout.sort().unwrap().direction, SortDirection::Ascending);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let employees: Vec<Employee> = vec![
        create_test_employee("e1", "Zed", "nurse"),
        create_test_employee("e2", "Amy", "tech"),
        create_test_employee("e3", "Bob", "nurse"),
        create_test_employee("e4", "Cal", "tech"),
    ];
    let mut layout: ColumnLayout = ColumnLayout::new();

    layout.sort_by(ColumnKey::Role);
    assert_eq!(layout.sorted_order(&employees), vec![0, 2, 1, 3]);
    assert_eq!(layout.sorted_order(&employees), vec![0, 2, 1, 3]);

    layout.sort_by(ColumnKey::Role);
    assert_eq!(layout.sorted_order(&employees), vec![1, 3, 0, 2]);
}

#[test]
fn test_text_sort_is_case_sensitive() {
    let employees: Vec<Employee> = vec![
        create_test_employee("e1", "ada", "nurse"),
        create_test_employee("e2", "Zed", "nurse"),
        create_test_employee("e3", "Bea", "nurse"),
    ];
    let mut layout: ColumnLayout = ColumnLayout::new();

    layout.sort_by(ColumnKey::Name);

    assert_eq!(layout.sorted_order(&employees), vec![2, 1, 0]);
}

#[test]
fn test_bank_hours_sort_numerically() {
    let mut employees: Vec<Employee> = vec![
        create_test_employee("e1", "A", "nurse"),
        create_test_employee("e2", "B", "nurse"),
        create_test_employee("e3", "C", "nurse"),
    ];
    employees[0].bank_hours_balance = String::from("10");
    employees[1].bank_hours_balance = String::from("-2.5");
    employees[2].bank_hours_balance = String::from("9");
    let mut layout: ColumnLayout = ColumnLayout::new();

    layout.sort_by(ColumnKey::BankHours);

    assert_eq!(layout.sorted_order(&employees), vec![1, 2, 0]);
}

#[test]
fn test_unsorted_layout_keeps_host_order() {
    let employees: Vec<Employee> = vec![
        create_test_employee("e1", "Zed", "nurse"),
        create_test_employee("e2", "Amy", "tech"),
    ];

    assert_eq!(ColumnLayout::new().sorted_order(&employees), vec![0, 1]);
}

#[test]
fn test_bank_hours_display_as_time() {
    let mut employee: Employee = create_test_employee("e1", "A", "nurse");
    employee.bank_hours_balance = String::from("-1.5");

    assert_eq!(ColumnKey::BankHours.display(&employee), "-01:30");
    assert_eq!(ColumnKey::Name.display(&employee), "A");
    assert_eq!(ColumnKey::Id.display(&employee), "e1");
}

#[test]
fn test_normalized_repairs_stored_layout() {
    let stored: &str = r#"{"columns":[{"key":"role","width":5,"frozen":true,"hidden":false},{"key":"role","width":300,"frozen":false,"hidden":false}]}"#;
    let layout: ColumnLayout = serde_json::from_str::<ColumnLayout>(stored)
        .unwrap()
        .normalized();

    let columns: &[ColumnSpec] = layout.columns();
    assert_eq!(columns.len(), ColumnKey::ALL.len());
    assert_eq!(columns[0].key, ColumnKey::Role);
    assert_eq!(columns[0].width, MIN_COLUMN_WIDTH);
    assert!(columns[0].frozen);
    assert!(layout.sort().is_none());
}
