// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod history;

use crate::{Action, Actor, ActorKind, AuditEvent};
use roster_domain::{DateKey, EmployeeId, MonthlySchedule, ShiftId};

pub fn create_test_actor() -> Actor {
    Actor::new("user-123", ActorKind::User)
}

pub fn schedule_with(day: u8, shift: &str) -> MonthlySchedule {
    let mut schedule: MonthlySchedule = MonthlySchedule::new(2026, 3).unwrap();
    schedule
        .assignments
        .entry(EmployeeId::new("e1"))
        .or_default()
        .insert(DateKey::for_day(2026, 3, day).unwrap(), ShiftId::new(shift));
    schedule
}

pub fn create_test_event(before: MonthlySchedule, after: MonthlySchedule) -> AuditEvent {
    AuditEvent::new(
        create_test_actor(),
        Action::new("SetShift", 1),
        before,
        after,
    )
}
