// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-user preference storage.

use crate::error::ApiResult;
use roster_grid::ColumnLayout;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A string key-value store for user preferences.
pub trait PreferenceStore {
    /// Returns the stored value for `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
}

/// A preference store that lives for the process only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl InMemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// The key the column layout of `user_id` is stored under.
#[must_use]
pub fn column_layout_key(user_id: &str) -> String {
    format!("roster.columns.{user_id}")
}

/// Loads the stored column layout of a user.
///
/// A missing value gives the default layout. A value that does not parse
/// gives the default layout and a warning.
#[must_use]
pub fn load_column_layout<P: PreferenceStore + ?Sized>(store: &P, user_id: &str) -> ColumnLayout {
    let key: String = column_layout_key(user_id);
    let Some(raw) = store.get(&key) else {
        debug!(user_id, "No stored column layout");
        return ColumnLayout::default();
    };
    match serde_json::from_str::<ColumnLayout>(&raw) {
        Ok(layout) => layout.normalized(),
        Err(err) => {
            warn!(user_id, error = %err, "Stored column layout is corrupt; using defaults");
            ColumnLayout::default()
        }
    }
}

/// Stores the column layout of a user.
///
/// # Errors
///
/// Returns `ApiError::Json` if the layout cannot be serialized.
pub fn save_column_layout<P: PreferenceStore + ?Sized>(
    store: &mut P,
    user_id: &str,
    layout: &ColumnLayout,
) -> ApiResult<()> {
    let raw: String = serde_json::to_string(layout)?;
    store.set(&column_layout_key(user_id), raw);
    debug!(user_id, "Column layout saved");
    Ok(())
}
