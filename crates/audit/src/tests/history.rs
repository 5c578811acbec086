// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::History;
use crate::tests::{create_test_event, schedule_with};
use roster_domain::MonthlySchedule;

#[test]
fn test_undo_restores_before_and_redo_restores_after() {
    let mut history: History = History::default();
    let first: MonthlySchedule = schedule_with(1, "morning");
    let second: MonthlySchedule = schedule_with(1, "off");
    history.record(create_test_event(first.clone(), second.clone()));

    assert!(history.can_undo());
    assert_eq!(history.undo(), Some(first));
    assert!(!history.can_undo());
    assert!(history.can_redo());
    assert_eq!(history.redo(), Some(second));
    assert!(!history.can_redo());
}

#[test]
fn test_recording_clears_redo() {
    let mut history: History = History::default();
    history.record(create_test_event(schedule_with(1, "a"), schedule_with(1, "b")));
    history.undo();
    assert!(history.can_redo());

    history.record(create_test_event(schedule_with(1, "a"), schedule_with(1, "c")));
    assert!(!history.can_redo());
    assert_eq!(history.events().len(), 1);
}

#[test]
fn test_noop_events_are_not_recorded() {
    let mut history: History = History::default();
    history.record(create_test_event(schedule_with(1, "a"), schedule_with(1, "a")));
    assert!(!history.can_undo());
}

#[test]
fn test_capacity_drops_oldest_steps() {
    let mut history: History = History::new(2);
    history.record(create_test_event(schedule_with(1, "a"), schedule_with(1, "b")));
    history.record(create_test_event(schedule_with(1, "b"), schedule_with(1, "c")));
    history.record(create_test_event(schedule_with(1, "c"), schedule_with(1, "d")));

    assert_eq!(history.events().len(), 2);
    assert_eq!(history.undo(), Some(schedule_with(1, "c")));
    assert_eq!(history.undo(), Some(schedule_with(1, "b")));
    assert_eq!(history.undo(), None);
}

#[test]
fn test_empty_history() {
    let mut history: History = History::default();
    assert_eq!(history.undo(), None);
    assert_eq!(history.redo(), None);
}
