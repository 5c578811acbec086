// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{GridContext, GridEvent, GridState, HostIntent, Key, SchedulePatch, Transition, apply};
use roster_domain::{
    DateKey, Employee, MonthlySchedule, RoleStaffing, RulesConfig, Shift, ShiftCatalog,
    ShiftCategory, ShiftId, StaffingConfig,
};
use time::macros::time;

/// April 2026: 30 days, starts on a Wednesday.
pub const YEAR: i32 = 2026;
pub const APRIL: u8 = 3;

pub fn create_test_catalog() -> ShiftCatalog {
    ShiftCatalog::new(vec![
        Shift::new("morning", "M", "Morning", ShiftCategory::Work)
            .with_times(time!(07:00), time!(15:00)),
        Shift::new("off", "F", "Day off", ShiftCategory::DayOff),
        Shift::new("sick", "AT", "Sick note", ShiftCategory::Absence),
        Shift::new("vacation", "FE", "Vacation", ShiftCategory::Leave),
    ])
}

pub fn create_test_employee(id: &str, name: &str, role: &str) -> Employee {
    Employee::new(id, name, role, "6x1")
}

pub fn key(day: u8) -> DateKey {
    DateKey::for_day(YEAR, APRIL, day).unwrap()
}

/// Owned inputs for a `GridContext`.
pub struct Fixture {
    pub employees: Vec<Employee>,
    pub catalog: ShiftCatalog,
    pub schedule: MonthlySchedule,
    pub rules: RulesConfig,
    pub staffing: StaffingConfig,
    pub read_only: bool,
}

impl Fixture {
    /// Five employees in host order e1..e5, named so that sorting by name
    /// reverses them.
    pub fn new() -> Self {
        Self {
            employees: vec![
                create_test_employee("e1", "Eve", "nurse"),
                create_test_employee("e2", "Dan", "nurse"),
                create_test_employee("e3", "Cid", "nurse"),
                create_test_employee("e4", "Bea", "tech"),
                create_test_employee("e5", "Ada", "tech"),
            ],
            catalog: create_test_catalog(),
            schedule: MonthlySchedule::new(YEAR, APRIL).unwrap(),
            rules: RulesConfig::default(),
            staffing: StaffingConfig::new()
                .with_role("nurse", RoleStaffing::new(2))
                .with_role("tech", RoleStaffing::new(1)),
            read_only: false,
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn clone_read_only(&self) -> Self {
        Self {
            employees: self.employees.clone(),
            catalog: self.catalog.clone(),
            schedule: self.schedule.clone(),
            rules: self.rules.clone(),
            staffing: self.staffing.clone(),
            read_only: true,
        }
    }

    pub fn context(&self) -> GridContext<'_> {
        GridContext::new(
            &self.employees,
            &self.catalog,
            &self.schedule,
            &self.rules,
            &self.staffing,
        )
        .with_read_only(self.read_only)
    }

    pub fn assign(&mut self, employee: &str, day: u8, shift: &str) {
        self.schedule
            .assignments
            .entry(self.employees.iter().find(|e| e.id.value() == employee).unwrap().id.clone())
            .or_default()
            .insert(key(day), ShiftId::new(shift));
    }

    /// Applies events in order, returning the final state and every intent.
    pub fn run(&self, state: &GridState, events: Vec<GridEvent>) -> (GridState, Vec<HostIntent>) {
        let context: GridContext<'_> = self.context();
        let mut current: GridState = state.clone();
        let mut intents: Vec<HostIntent> = Vec::new();
        for event in events {
            let transition: Transition = apply(&context, &current, event);
            current = transition.new_state;
            intents.extend(transition.intents);
        }
        (current, intents)
    }
}

pub fn key_down(key: Key, shift: bool) -> GridEvent {
    GridEvent::KeyDown {
        key,
        shift,
        in_text_input: false,
    }
}

pub fn only_patch(intents: &[HostIntent]) -> &SchedulePatch {
    assert_eq!(intents.len(), 1, "expected exactly one intent: {intents:?}");
    match &intents[0] {
        HostIntent::ApplyPatch(patch) => patch,
        other => panic!("expected a patch, got {other:?}"),
    }
}
