// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The host side of one editing session.
//!
//! A session owns the roster document, the grid state, the undo history and
//! the validation cache. It feeds events to the reducer and carries out the
//! intents that need no outside help. Intents that do (file picking,
//! downloads, the suggestion call) are handed back to the caller.

use crate::attachments::{attachment_event, ingest_attachment};
use crate::document::RosterDocument;
use crate::error::ApiResult;
use crate::preferences::{PreferenceStore, load_column_layout, save_column_layout};
use crate::suggestions::{SuggestionRequest, SuggestionService, fetch_suggestions};
use roster_audit::{Action, Actor, ActorKind, AuditEvent, History};
use roster_domain::{Attachment, DateKey, Employee, EmployeeField, EmployeeId, MonthlySchedule};
use roster_grid::{
    ColumnLayout, Generation, GridContext, GridEvent, GridState, GridView, HostIntent, PatchKind,
    SchedulePatch, Transition, ValidationCache, apply, apply_patch, build_view,
};
use tokio::io::AsyncRead;
use tracing::{debug, info};

/// One user editing one roster month.
#[derive(Debug)]
pub struct RosterSession<P: PreferenceStore> {
    document: RosterDocument,
    state: GridState,
    history: History,
    cache: ValidationCache,
    version: u64,
    actor: Actor,
    read_only: bool,
    preferences: P,
}

impl<P: PreferenceStore> RosterSession<P> {
    /// Opens a session, restoring the user's stored column layout.
    ///
    /// # Arguments
    ///
    /// * `document` - The roster to edit
    /// * `user_id` - The editing user
    /// * `read_only` - Whether editing is disabled for this user
    /// * `preferences` - Where the column layout is stored
    #[must_use]
    pub fn new(document: RosterDocument, user_id: &str, read_only: bool, preferences: P) -> Self {
        let columns: ColumnLayout = load_column_layout(&preferences, user_id);
        info!(
            user_id,
            read_only,
            year = document.schedule.year,
            month = document.schedule.month,
            "Session opened"
        );
        Self {
            document,
            state: GridState::with_columns(columns),
            history: History::default(),
            cache: ValidationCache::new(),
            version: 0,
            actor: Actor::new(user_id, ActorKind::User),
            read_only,
            preferences,
        }
    }

    /// The roster as currently edited.
    #[must_use]
    pub const fn document(&self) -> &RosterDocument {
        &self.document
    }

    /// The grid state.
    #[must_use]
    pub const fn state(&self) -> &GridState {
        &self.state
    }

    /// The undo history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Bumped on every change to the document.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// The preference store.
    #[must_use]
    pub const fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Whether editing is disabled.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Feeds one event through the grid and carries out its local intents.
    ///
    /// Returns the intents the caller must handle: `PickAttachment`,
    /// `DownloadAttachment` and `FetchSuggestions`.
    ///
    /// # Errors
    ///
    /// Returns an error if a patch is rejected, an employee update is
    /// invalid, or the column layout cannot be stored. The grid state has
    /// already advanced when that happens; the document has not.
    pub fn dispatch(&mut self, event: GridEvent) -> ApiResult<Vec<HostIntent>> {
        let transition: Transition = {
            let context: GridContext<'_> = self.document.context(self.read_only);
            apply(&context, &self.state, event)
        };
        self.state = transition.new_state;

        let mut pending: Vec<HostIntent> = Vec::new();
        for intent in transition.intents {
            match intent {
                HostIntent::ApplyPatch(patch) => self.commit_patch(&patch)?,
                HostIntent::ReorderEmployees { dragged, target } => {
                    self.reorder(&dragged, &target);
                }
                HostIntent::UpdateEmployee {
                    employee,
                    field,
                    value,
                } => self.update_employee(&employee, field, value.as_deref())?,
                HostIntent::PersistColumnLayout(layout) => {
                    save_column_layout(&mut self.preferences, &self.actor.id, &layout)?;
                }
                HostIntent::Undo => {
                    if let Some(schedule) = self.history.undo() {
                        self.replace_schedule(schedule, "Undo");
                    }
                }
                HostIntent::Redo => {
                    if let Some(schedule) = self.history.redo() {
                        self.replace_schedule(schedule, "Redo");
                    }
                }
                other => pending.push(other),
            }
        }
        Ok(pending)
    }

    /// Derives the frame for the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule's month index is invalid.
    pub fn view(&mut self) -> ApiResult<GridView> {
        let context: GridContext<'_> = self.document.context(self.read_only);
        Ok(build_view(&context, &self.state, &mut self.cache, self.version)?)
    }

    /// Reads a picked file and stores it on the requested cell.
    ///
    /// A read failure stores nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting patch is rejected.
    pub async fn load_attachment<R>(
        &mut self,
        generation: Generation,
        employee: EmployeeId,
        date: DateKey,
        file_name: &str,
        reader: R,
    ) -> ApiResult<Vec<HostIntent>>
    where
        R: AsyncRead + Unpin,
    {
        let result: ApiResult<Attachment> = ingest_attachment(file_name, reader).await;
        self.dispatch(attachment_event(generation, employee, date, result))
    }

    /// Asks the service for suggestions and merges the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged patch is rejected.
    pub async fn resolve_suggestions<S>(
        &mut self,
        service: &S,
        generation: Generation,
    ) -> ApiResult<Vec<HostIntent>>
    where
        S: SuggestionService + ?Sized,
    {
        let request: SuggestionRequest = self.document.suggestion_request();
        let event: GridEvent = fetch_suggestions(service, generation, &request).await;
        self.dispatch(event)
    }

    /// Requests suggestions and resolves the request in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged patch is rejected.
    pub async fn request_suggestions<S>(&mut self, service: &S) -> ApiResult<Vec<HostIntent>>
    where
        S: SuggestionService + ?Sized,
    {
        let mut remaining: Vec<HostIntent> = Vec::new();
        for intent in self.dispatch(GridEvent::RequestSuggestions)? {
            match intent {
                HostIntent::FetchSuggestions { generation } => {
                    remaining.extend(self.resolve_suggestions(service, generation).await?);
                }
                other => remaining.push(other),
            }
        }
        Ok(remaining)
    }

    fn commit_patch(&mut self, patch: &SchedulePatch) -> ApiResult<()> {
        let before: MonthlySchedule = self.document.schedule.clone();
        let after: MonthlySchedule = apply_patch(&before, patch)?;
        let actor: Actor = if patch.kind == PatchKind::Suggestions {
            self.actor.acting_as(ActorKind::SuggestionService)
        } else {
            self.actor.clone()
        };
        let event: AuditEvent = AuditEvent::new(
            actor,
            Action::new(patch.kind.as_str(), patch.len()),
            before,
            after.clone(),
        );
        if event.is_noop() {
            debug!(kind = patch.kind.as_str(), "Patch changed nothing");
            return Ok(());
        }
        self.history.record(event);
        self.document.schedule = after;
        self.bump();
        info!(
            kind = patch.kind.as_str(),
            ops = patch.len(),
            version = self.version,
            "Patch applied"
        );
        Ok(())
    }

    fn reorder(&mut self, dragged: &EmployeeId, target: &EmployeeId) {
        if self.document.reorder(dragged, target) {
            self.bump();
            info!(
                dragged = dragged.value(),
                target = target.value(),
                "Employees reordered"
            );
        } else {
            debug!(dragged = dragged.value(), target = target.value(), "Reorder ignored");
        }
    }

    fn update_employee(
        &mut self,
        id: &EmployeeId,
        field: EmployeeField,
        value: Option<&str>,
    ) -> ApiResult<()> {
        let Some(slot) = self.document.employees.iter_mut().find(|e| &e.id == id) else {
            debug!(employee = id.value(), "Update for unknown employee ignored");
            return Ok(());
        };
        let updated: Employee = slot.with_field(field, value)?;
        *slot = updated;
        self.bump();
        info!(employee = id.value(), field = field.as_str(), "Employee updated");
        Ok(())
    }

    fn replace_schedule(&mut self, schedule: MonthlySchedule, step: &str) {
        self.document.schedule = schedule;
        self.bump();
        info!(step, version = self.version, "History step restored");
    }

    const fn bump(&mut self) {
        self.version += 1;
    }
}
