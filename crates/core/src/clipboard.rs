// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::patch::{PatchKind, PatchOp, SchedulePatch};
use roster_domain::{DateKey, EmployeeId, ShiftId};

/// Single-slot clipboard holding one shift id.
///
/// Copy and paste only ever move assignments; attachments and comments are
/// never touched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clipboard {
    register: Option<ShiftId>,
}

impl Clipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self { register: None }
    }

    /// Returns the copied shift.
    #[must_use]
    pub const fn register(&self) -> Option<&ShiftId> {
        self.register.as_ref()
    }

    /// Copies the shift of the focused cell. An unassigned cell empties the
    /// register.
    pub fn copy(&mut self, shift: Option<&ShiftId>) {
        self.register = shift.cloned();
    }

    /// Builds the paste patch for the given target cells.
    ///
    /// Returns `None` when the register is empty or there is no target.
    #[must_use]
    pub fn paste<I>(&self, targets: I) -> Option<SchedulePatch>
    where
        I: IntoIterator<Item = (EmployeeId, DateKey)>,
    {
        let shift: &ShiftId = self.register.as_ref()?;
        let ops: Vec<PatchOp> = targets
            .into_iter()
            .map(|(employee, date)| PatchOp::SetShift {
                employee,
                date,
                shift: shift.clone(),
            })
            .collect();
        if ops.is_empty() {
            None
        } else {
            Some(SchedulePatch::new(PatchKind::Paste, ops))
        }
    }
}
