// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Host boundary of the roster grid.
//!
//! The grid crate is synchronous and owns nothing. This crate holds the
//! pieces around it: the roster document, the per-user column preferences,
//! attachment encoding, the suggestion service and a session type that
//! carries out the grid's intents.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod attachments;
mod document;
mod error;
mod preferences;
mod session;
mod suggestions;

#[cfg(test)]
mod tests;

pub use attachments::{
    DecodedAttachment, attachment_event, decode_attachment, encode_attachment, guess_mime,
    ingest_attachment,
};
pub use document::RosterDocument;
pub use error::{ApiError, ApiResult};
pub use preferences::{
    InMemoryPreferenceStore, PreferenceStore, column_layout_key, load_column_layout,
    save_column_layout,
};
pub use session::RosterSession;
pub use suggestions::{
    StaticSuggestionService, SuggestionRequest, SuggestionService, fetch_suggestions,
    merge_suggestions,
};
