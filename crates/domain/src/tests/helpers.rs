// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DateKey, Employee, MonthlySchedule, Shift, ShiftCatalog, ShiftCategory, ShiftId};
use time::macros::time;

/// April 2026: 30 days, starts on a Wednesday.
pub const YEAR: i32 = 2026;
pub const APRIL: u8 = 3;

pub fn create_test_catalog() -> ShiftCatalog {
    ShiftCatalog::new(vec![
        Shift::new("morning", "M", "Morning", ShiftCategory::Work)
            .with_times(time!(07:00), time!(15:00)),
        Shift::new("night", "N", "Night", ShiftCategory::Work)
            .with_times(time!(19:00), time!(07:00)),
        Shift::new("off", "F", "Day off", ShiftCategory::DayOff),
        Shift::new("sick", "AT", "Sick note", ShiftCategory::Absence),
        Shift::new("vacation", "FE", "Vacation", ShiftCategory::Leave),
    ])
}

pub fn create_test_employee(id: &str, role: &str) -> Employee {
    Employee::new(id, &format!("Employee {id}"), role, "6x1")
}

pub fn create_test_schedule() -> MonthlySchedule {
    MonthlySchedule::new(YEAR, APRIL).unwrap()
}

pub fn key(day: u8) -> DateKey {
    DateKey::for_day(YEAR, APRIL, day).unwrap()
}

pub fn assign(schedule: &mut MonthlySchedule, employee: &Employee, day: u8, shift: &str) {
    schedule
        .assignments
        .entry(employee.id.clone())
        .or_default()
        .insert(key(day), ShiftId::new(shift));
}
