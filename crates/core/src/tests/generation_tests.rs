// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Generation, GenerationCounter, RequestKind};

#[test]
fn test_issued_token_is_accepted_once() {
    let mut counter: GenerationCounter = GenerationCounter::new();
    let token: Generation = counter.issue(RequestKind::Suggestions, 2026, 3);

    assert_eq!(counter.pending(RequestKind::Suggestions), Some(token));
    assert!(counter.accept(RequestKind::Suggestions, token, 2026, 3));
    assert!(!counter.accept(RequestKind::Suggestions, token, 2026, 3));
    assert_eq!(counter.pending(RequestKind::Suggestions), None);
}

#[test]
fn test_newer_request_supersedes_older() {
    let mut counter: GenerationCounter = GenerationCounter::new();
    let first: Generation = counter.issue(RequestKind::Suggestions, 2026, 3);
    let second: Generation = counter.issue(RequestKind::Suggestions, 2026, 3);

    assert!(second.sequence > first.sequence);
    assert!(!counter.accept(RequestKind::Suggestions, first, 2026, 3));
    assert!(counter.accept(RequestKind::Suggestions, second, 2026, 3));
}

#[test]
fn test_token_for_another_month_is_stale() {
    let mut counter: GenerationCounter = GenerationCounter::new();
    let token: Generation = counter.issue(RequestKind::Attachment, 2026, 3);

    assert!(!counter.accept(RequestKind::Attachment, token, 2026, 4));
    assert_eq!(counter.pending(RequestKind::Attachment), None);
}

#[test]
fn test_kinds_are_tracked_independently() {
    let mut counter: GenerationCounter = GenerationCounter::new();
    let attachment: Generation = counter.issue(RequestKind::Attachment, 2026, 3);
    let suggestions: Generation = counter.issue(RequestKind::Suggestions, 2026, 3);

    assert!(!counter.accept(RequestKind::Suggestions, attachment, 2026, 3));
    assert!(counter.accept(RequestKind::Attachment, attachment, 2026, 3));
    assert!(counter.accept(RequestKind::Suggestions, suggestions, 2026, 3));
}

#[test]
fn test_generation_display() {
    let token: Generation = Generation {
        year: 2026,
        month: 3,
        sequence: 7,
    };

    assert_eq!(token.to_string(), "2026-04#7");
}
