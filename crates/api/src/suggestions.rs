// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The external day-off suggestion service.

use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use roster_domain::{Employee, MonthlySchedule, RulesConfig, ShiftCatalog, SuggestionMap};
use roster_grid::{Generation, GridEvent};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

pub use roster_grid::merge_suggestions;

/// Everything a suggestion service needs to propose days off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// Employees in roster order.
    pub employees: Vec<Employee>,
    /// The shift catalog.
    pub shifts: ShiftCatalog,
    /// The month as currently assigned.
    pub schedule: MonthlySchedule,
    /// Compliance rules the proposal must respect.
    pub rules: RulesConfig,
}

/// A service that proposes day-off assignments for a month.
#[async_trait]
pub trait SuggestionService: Send + Sync {
    /// Proposes assignments for the request's month.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SuggestionService` if no proposal can be made.
    async fn suggest(&self, request: &SuggestionRequest) -> ApiResult<SuggestionMap>;
}

/// Serves a fixed suggestion map, or always fails when built without one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSuggestionService {
    suggestions: Option<SuggestionMap>,
}

impl StaticSuggestionService {
    /// Creates a service that always answers with `suggestions`.
    #[must_use]
    pub const fn new(suggestions: SuggestionMap) -> Self {
        Self {
            suggestions: Some(suggestions),
        }
    }

    /// Creates a service that always fails.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self { suggestions: None }
    }

    /// Reads a suggestion map from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> ApiResult<Self> {
        let text: String = tokio::fs::read_to_string(path.as_ref()).await?;
        let suggestions: SuggestionMap = serde_json::from_str(&text)?;
        debug!(path = %path.as_ref().display(), employees = suggestions.len(), "Suggestions loaded");
        Ok(Self::new(suggestions))
    }
}

#[async_trait]
impl SuggestionService for StaticSuggestionService {
    async fn suggest(&self, request: &SuggestionRequest) -> ApiResult<SuggestionMap> {
        debug!(
            year = request.schedule.year,
            month = request.schedule.month,
            "Serving static suggestions"
        );
        self.suggestions
            .clone()
            .ok_or_else(|| ApiError::SuggestionService("no suggestions available".to_string()))
    }
}

/// Calls the service and wraps its answer in the event the grid expects.
///
/// # Arguments
///
/// * `service` - The suggestion service
/// * `generation` - The token issued with the request
/// * `request` - The month to propose for
pub async fn fetch_suggestions<S>(
    service: &S,
    generation: Generation,
    request: &SuggestionRequest,
) -> GridEvent
where
    S: SuggestionService + ?Sized,
{
    match service.suggest(request).await {
        Ok(suggestions) => {
            info!(generation = %generation, employees = suggestions.len(), "Suggestions received");
            GridEvent::SuggestionsReady {
                generation,
                suggestions,
            }
        }
        Err(err) => GridEvent::SuggestionsFailed {
            generation,
            reason: err.to_string(),
        },
    }
}
