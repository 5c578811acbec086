// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tokens tying asynchronous completions to the request that caused them.
//!
//! A completion is accepted only when its token is the one most recently
//! issued for that kind of request and the schedule still shows the month
//! the request was made for. Anything else is stale and is dropped.

use serde::{Deserialize, Serialize};

/// The kinds of asynchronous request the grid issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestKind {
    /// Reading a picked file into an attachment.
    Attachment,
    /// Calling the day-off suggestion service.
    Suggestions,
}

/// Identifies one asynchronous request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    /// Year of the schedule the request was issued for.
    pub year: i32,
    /// 0-based month of the schedule the request was issued for.
    pub month: u8,
    /// Monotonic sequence number.
    pub sequence: u64,
}

impl Generation {
    /// Returns whether this token was issued for the given month.
    #[must_use]
    pub const fn is_for_month(&self, year: i32, month: u8) -> bool {
        self.year == year && self.month == month
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}#{}",
            self.year,
            u16::from(self.month) + 1,
            self.sequence
        )
    }
}

/// Issues tokens and remembers the pending one per request kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationCounter {
    sequence: u64,
    attachment: Option<Generation>,
    suggestions: Option<Generation>,
}

impl GenerationCounter {
    /// Creates a counter with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequence: 0,
            attachment: None,
            suggestions: None,
        }
    }

    const fn slot(&mut self, kind: RequestKind) -> &mut Option<Generation> {
        match kind {
            RequestKind::Attachment => &mut self.attachment,
            RequestKind::Suggestions => &mut self.suggestions,
        }
    }

    /// Issues a new token, superseding any pending request of the same kind.
    pub const fn issue(&mut self, kind: RequestKind, year: i32, month: u8) -> Generation {
        self.sequence += 1;
        let generation: Generation = Generation {
            year,
            month,
            sequence: self.sequence,
        };
        *self.slot(kind) = Some(generation);
        generation
    }

    /// Returns the pending token of a kind.
    #[must_use]
    pub const fn pending(&self, kind: RequestKind) -> Option<Generation> {
        match kind {
            RequestKind::Attachment => self.attachment,
            RequestKind::Suggestions => self.suggestions,
        }
    }

    /// Settles a completion. Returns `true` if it is current and may be
    /// applied. A current token is consumed either way.
    pub fn accept(&mut self, kind: RequestKind, token: Generation, year: i32, month: u8) -> bool {
        let slot: &mut Option<Generation> = self.slot(kind);
        if *slot != Some(token) {
            return false;
        }
        *slot = None;
        token.is_for_month(year, month)
    }
}
