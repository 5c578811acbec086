// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemoryPreferenceStore, RosterDocument, RosterSession};
use roster_domain::{
    DateKey, Employee, EmployeeId, MonthlySchedule, RoleStaffing, RulesConfig, Shift,
    ShiftCatalog, ShiftCategory, ShiftId, StaffingConfig, SuggestionMap,
};
use roster_grid::{GridEvent, Key};
use std::collections::BTreeMap;

/// April 2026.
pub const YEAR: i32 = 2026;
pub const APRIL: u8 = 3;

pub fn key(day: u8) -> DateKey {
    DateKey::for_day(YEAR, APRIL, day).unwrap()
}

pub fn create_test_document() -> RosterDocument {
    RosterDocument {
        employees: vec![
            Employee::new("e1", "Eve", "nurse", "6x1"),
            Employee::new("e2", "Dan", "nurse", "6x1"),
            Employee::new("e3", "Cid", "tech", "12x36"),
        ],
        shifts: ShiftCatalog::new(vec![
            Shift::new("morning", "M", "Morning", ShiftCategory::Work),
            Shift::new("off", "F", "Day off", ShiftCategory::DayOff),
            Shift::new("sick", "AT", "Sick note", ShiftCategory::Absence),
        ]),
        schedule: MonthlySchedule::new(YEAR, APRIL).unwrap(),
        rules: RulesConfig::default(),
        staffing: StaffingConfig::new()
            .with_role("nurse", RoleStaffing::new(2))
            .with_role("tech", RoleStaffing::new(1)),
    }
}

pub fn create_test_session() -> RosterSession<InMemoryPreferenceStore> {
    RosterSession::new(
        create_test_document(),
        "alice",
        false,
        InMemoryPreferenceStore::new(),
    )
}

pub fn create_read_only_session() -> RosterSession<InMemoryPreferenceStore> {
    RosterSession::new(
        create_test_document(),
        "viewer",
        true,
        InMemoryPreferenceStore::new(),
    )
}

pub fn suggestion(employee: &str, day: u8, shift: &str) -> SuggestionMap {
    let mut days: BTreeMap<DateKey, ShiftId> = BTreeMap::new();
    days.insert(key(day), ShiftId::new(shift));
    let mut map: SuggestionMap = SuggestionMap::new();
    map.insert(EmployeeId::new(employee), days);
    map
}

pub fn key_down(key: Key) -> GridEvent {
    GridEvent::KeyDown {
        key,
        shift: false,
        in_text_input: false,
    }
}

pub fn shift_of(
    session: &RosterSession<InMemoryPreferenceStore>,
    employee: &str,
    day: u8,
) -> Option<ShiftId> {
    session
        .document()
        .schedule
        .shift_at(&EmployeeId::new(employee), key(day))
        .cloned()
}
