// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the host boundary.

use roster_domain::DomainError;
use roster_grid::CoreError;
use thiserror::Error;

/// Errors raised at the host boundary.
///
/// The grid itself never fails; these come from I/O, decoding and the
/// external suggestion service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The suggestion service could not produce a result.
    #[error("Suggestion service failed: {0}")]
    SuggestionService(String),

    /// An attachment payload is not a base64 `data:` URI.
    #[error("Malformed attachment data URI: {0}")]
    MalformedDataUri(String),

    /// A roster document is structurally valid JSON but inconsistent.
    #[error("Invalid roster document: {0}")]
    InvalidDocument(String),

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),

    /// The grid rejected a patch.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result alias for the host boundary.
pub type ApiResult<T> = Result<T, ApiError>;
