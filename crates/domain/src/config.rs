// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Compliance rules and staffing targets.
//!
//! Both records are edited by dialogs outside the grid and only read here.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Weekday;

/// Default limit of consecutive worked days.
pub const DEFAULT_MAX_CONSECUTIVE_DAYS: u32 = 6;

/// Default Sunday-off rotation, in weeks.
pub const DEFAULT_SUNDAY_OFF_FREQUENCY: u32 = 3;

/// Largest number of extra days off the rules dialog offers.
pub const MAX_EXTRA_DAYS_OFF: u8 = 3;

/// Labor-compliance rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfig {
    /// Maximum consecutive worked days before a day off is required.
    pub max_consecutive_days: u32,
    /// Prefer Sundays when placing days off.
    pub prefer_sunday_off: bool,
    /// Prefer grouping days off together.
    pub prefer_consecutive_days_off: bool,
    /// At least one Sunday off every this many weeks.
    pub sunday_off_frequency: u32,
    /// Allow days off beyond the pattern's entitlement.
    pub allow_extra_days_off: bool,
    /// How many extra days off may be granted.
    pub extra_days_off_count: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_consecutive_days: DEFAULT_MAX_CONSECUTIVE_DAYS,
            prefer_sunday_off: true,
            prefer_consecutive_days_off: false,
            sunday_off_frequency: DEFAULT_SUNDAY_OFF_FREQUENCY,
            allow_extra_days_off: false,
            extra_days_off_count: 0,
        }
    }
}

impl RulesConfig {
    /// Checks that every value is within its allowed range.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRules` describing the first bad value.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_consecutive_days < 1 {
            return Err(DomainError::InvalidRules(String::from(
                "maxConsecutiveDays must be at least 1",
            )));
        }
        if self.sunday_off_frequency < 1 {
            return Err(DomainError::InvalidRules(String::from(
                "sundayOffFrequency must be at least 1",
            )));
        }
        if self.extra_days_off_count > MAX_EXTRA_DAYS_OFF {
            return Err(DomainError::InvalidRules(format!(
                "extraDaysOffCount must be at most {MAX_EXTRA_DAYS_OFF}, got {}",
                self.extra_days_off_count
            )));
        }
        Ok(())
    }
}

/// Staffing target for one role: a default headcount plus optional
/// per-weekday overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStaffing {
    /// Headcount used when no weekday override exists.
    pub default: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<u32>,
}

impl RoleStaffing {
    /// Creates a target with only a default headcount.
    #[must_use]
    pub fn new(default: u32) -> Self {
        Self {
            default,
            ..Self::default()
        }
    }

    /// Sets the headcount override for one weekday.
    #[must_use]
    pub const fn with_override(mut self, weekday: Weekday, headcount: u32) -> Self {
        *self.slot_mut(weekday) = Some(headcount);
        self
    }

    /// Returns the override for a weekday, if one is configured.
    #[must_use]
    pub const fn override_for(&self, weekday: Weekday) -> Option<u32> {
        match weekday {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }

    /// Returns the ideal headcount for a weekday.
    #[must_use]
    pub fn ideal_for(&self, weekday: Weekday) -> u32 {
        self.override_for(weekday).unwrap_or(self.default)
    }

    const fn slot_mut(&mut self, weekday: Weekday) -> &mut Option<u32> {
        match weekday {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }
}

/// Staffing targets keyed by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffingConfig {
    roles: BTreeMap<String, RoleStaffing>,
}

impl StaffingConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            roles: BTreeMap::new(),
        }
    }

    /// Adds or replaces the target for a role.
    #[must_use]
    pub fn with_role(mut self, role: &str, staffing: RoleStaffing) -> Self {
        self.roles.insert(role.to_string(), staffing);
        self
    }

    /// Returns the target for a role.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<&RoleStaffing> {
        self.roles.get(role)
    }

    /// Iterates over `(role, target)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoleStaffing)> {
        self.roles.iter().map(|(role, staffing)| (role.as_str(), staffing))
    }

    /// Returns whether no role has a target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
