// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod history;

#[cfg(test)]
mod tests;

pub use history::History;

use roster_domain::MonthlySchedule;

/// Who produced a schedule change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// A person editing the grid.
    User,
    /// The external day-off suggestion service, acting for a user.
    SuggestionService,
}

impl ActorKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::SuggestionService => "suggestion-service",
        }
    }
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user on whose behalf a patch was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The user id the session was opened for.
    pub id: String,
    /// Whether the user or a service acting for them made the change.
    pub kind: ActorKind,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The user id
    /// * `kind` - Who made the change
    #[must_use]
    pub fn new(id: &str, kind: ActorKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
        }
    }

    /// Returns the same user with a different kind.
    #[must_use]
    pub fn acting_as(&self, kind: ActorKind) -> Self {
        Self {
            id: self.id.clone(),
            kind,
        }
    }
}

/// The edit that produced a schedule change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The patch kind, e.g. "`Paste`" or "`ClearCell`".
    pub name: String,
    /// How many cell operations the patch carried.
    pub operations: usize,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub fn new(name: &str, operations: usize) -> Self {
        Self {
            name: name.to_string(),
            operations,
        }
    }
}

/// An immutable record of one applied schedule patch.
///
/// Every patch the host applies produces exactly one event. The full
/// schedule is captured on both sides so the event can be undone and redone
/// without replaying anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this change.
    pub actor: Actor,
    /// The action that was performed.
    pub action: Action,
    /// The schedule before the patch.
    pub before: MonthlySchedule,
    /// The schedule after the patch.
    pub after: MonthlySchedule,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `action` - The action that was performed
    /// * `before` - The schedule before the patch
    /// * `after` - The schedule after the patch
    #[must_use]
    pub const fn new(
        actor: Actor,
        action: Action,
        before: MonthlySchedule,
        after: MonthlySchedule,
    ) -> Self {
        Self {
            actor,
            action,
            before,
            after,
        }
    }

    /// Returns whether the patch left the schedule unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}
