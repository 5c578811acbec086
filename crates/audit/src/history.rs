// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::AuditEvent;
use roster_domain::MonthlySchedule;

/// Undo/redo history built from audit events.
///
/// Each recorded event is one logical step: a bulk paste over a hundred
/// cells is undone in one go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    undo: Vec<AuditEvent>,
    redo: Vec<AuditEvent>,
    capacity: usize,
}

impl History {
    /// Number of steps kept when no capacity is given.
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates an empty history keeping at most `capacity` undo steps.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            capacity,
        }
    }

    /// Records an applied patch. Clears the redo stack.
    ///
    /// No-op events are dropped.
    pub fn record(&mut self, event: AuditEvent) {
        if event.is_noop() {
            return;
        }
        self.redo.clear();
        self.undo.push(event);
        if self.undo.len() > self.capacity {
            let excess: usize = self.undo.len() - self.capacity;
            self.undo.drain(..excess);
        }
    }

    /// Steps back, returning the schedule to restore.
    pub fn undo(&mut self) -> Option<MonthlySchedule> {
        let event: AuditEvent = self.undo.pop()?;
        let restored: MonthlySchedule = event.before.clone();
        self.redo.push(event);
        Some(restored)
    }

    /// Steps forward again, returning the schedule to restore.
    pub fn redo(&mut self) -> Option<MonthlySchedule> {
        let event: AuditEvent = self.redo.pop()?;
        let restored: MonthlySchedule = event.after.clone();
        self.undo.push(event);
        Some(restored)
    }

    /// Returns whether there is a step to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns whether there is a step to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Returns the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.undo
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
