// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::DateKey;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Time;

/// Identifies an employee across the roster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a shift in the shift catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftId(String);

impl ShiftId {
    /// Creates a new `ShiftId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of a shift. Governs validation and which cell actions are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftCategory {
    /// A worked shift with start and end times.
    Work,
    /// A rest day.
    DayOff,
    /// An absence (sick note, unjustified absence).
    Absence,
    /// Planned leave (vacation, licence).
    Leave,
}

impl ShiftCategory {
    /// Converts this category to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::DayOff => "dayoff",
            Self::Absence => "absence",
            Self::Leave => "leave",
        }
    }

    /// Returns whether an employee on this category counts towards staffing.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Work)
    }

    /// Returns whether a supporting document may be attached to a cell of
    /// this category.
    #[must_use]
    pub const fn accepts_attachment(&self) -> bool {
        matches!(self, Self::Absence | Self::Leave)
    }
}

impl FromStr for ShiftCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Self::Work),
            "dayoff" => Ok(Self::DayOff),
            "absence" => Ok(Self::Absence),
            "leave" => Ok(Self::Leave),
            _ => Err(DomainError::InvalidShiftCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns `DomainError::InvalidTime` if the text is not a valid time.
pub fn parse_time_of_day(value: &str) -> Result<Time, DomainError> {
    let invalid = || DomainError::InvalidTime(value.to_string());
    let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u8 = hour.parse().map_err(|_| invalid())?;
    let minute: u8 = minute.parse().map_err(|_| invalid())?;
    Time::from_hms(hour, minute, 0).map_err(|_| invalid())
}

mod hhmm {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Time;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Time>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.serialize_str(&format!("{:02}:{:02}", t.hour(), t.minute())),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Time>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => super::parse_time_of_day(text)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// A shift from the catalog.
///
/// The grid never edits shifts; the catalog is maintained elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// The shift identifier.
    pub id: ShiftId,
    /// Short glyph shown inside the cell (e.g. "M", "F").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// The shift category.
    pub category: ShiftCategory,
    /// Start time, meaningful only for work shifts.
    #[serde(default, with = "hhmm")]
    pub start_time: Option<Time>,
    /// End time, meaningful only for work shifts.
    #[serde(default, with = "hhmm")]
    pub end_time: Option<Time>,
    /// Background style tag.
    #[serde(default)]
    pub color: String,
    /// Foreground style tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl Shift {
    /// Creates a new `Shift` without times or style tags.
    ///
    /// # Arguments
    ///
    /// * `id` - The shift identifier
    /// * `code` - The glyph shown in the cell
    /// * `name` - The display name
    /// * `category` - The shift category
    #[must_use]
    pub fn new(id: &str, code: &str, name: &str, category: ShiftCategory) -> Self {
        Self {
            id: ShiftId::new(id),
            code: code.to_string(),
            name: name.to_string(),
            category,
            start_time: None,
            end_time: None,
            color: String::new(),
            text_color: None,
        }
    }

    /// Sets the working hours. Ignored for non-work categories.
    #[must_use]
    pub fn with_times(mut self, start: Time, end: Time) -> Self {
        if matches!(self.category, ShiftCategory::Work) {
            self.start_time = Some(start);
            self.end_time = Some(end);
        }
        self
    }
}

/// An employee row of the roster.
///
/// Employees are owned by the host application. The grid only reads them,
/// except for the fields listed in [`EmployeeField`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// The employee identifier.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Role, used for staffing targets.
    pub role: String,
    /// Civil registration number.
    #[serde(default)]
    pub cpf: String,
    /// Shift pattern code, e.g. "5x2", "6x1", "12x36".
    #[serde(default)]
    pub shift_pattern: String,
    /// Position number.
    #[serde(default)]
    pub position_number: String,
    /// Professional council registration.
    #[serde(default)]
    pub category_code: String,
    /// Accrued bank-hours balance as decimal hours.
    #[serde(default)]
    pub bank_hours_balance: String,
    /// Optional work-time label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_time: Option<String>,
    /// Optional shift-type label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<String>,
    /// Date of the last day off before this month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_day_off: Option<DateKey>,
}

impl Employee {
    /// Creates a new `Employee` with empty optional fields.
    ///
    /// # Arguments
    ///
    /// * `id` - The employee identifier
    /// * `name` - The employee name
    /// * `role` - The employee role
    /// * `shift_pattern` - The shift pattern code
    #[must_use]
    pub fn new(id: &str, name: &str, role: &str, shift_pattern: &str) -> Self {
        Self {
            id: EmployeeId::new(id),
            name: name.to_string(),
            role: role.to_string(),
            cpf: String::new(),
            shift_pattern: shift_pattern.to_string(),
            position_number: String::new(),
            category_code: String::new(),
            bank_hours_balance: String::new(),
            work_time: None,
            shift_type: None,
            last_day_off: None,
        }
    }

    /// Returns a copy of this employee with one whitelisted field replaced.
    ///
    /// An empty or absent value clears the field.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmployeeField` if a last-day-off value is
    /// not a `YYYY-MM-DD` date.
    pub fn with_field(&self, field: EmployeeField, value: Option<&str>) -> Result<Self, DomainError> {
        let value: Option<&str> = value.map(str::trim).filter(|v| !v.is_empty());
        let mut updated: Self = self.clone();
        match field {
            EmployeeField::ShiftType => {
                updated.shift_type = value.map(str::to_string);
            }
            EmployeeField::LastDayOff => {
                updated.last_day_off = value
                    .map(DateKey::parse)
                    .transpose()
                    .map_err(|err| DomainError::InvalidEmployeeField {
                        field: field.as_str(),
                        reason: err.to_string(),
                    })?;
            }
        }
        Ok(updated)
    }
}

/// Employee fields the grid is allowed to request updates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    /// The shift-type label.
    ShiftType,
    /// The last-day-off date.
    LastDayOff,
}

impl EmployeeField {
    /// Converts this field to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShiftType => "shiftType",
            Self::LastDayOff => "lastDayOff",
        }
    }
}
