// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod bank_hours;
mod calendar;
mod catalog;
mod config;
mod error;
mod schedule;
mod staffing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use bank_hours::{decimal_to_time, parse_decimal_hours};
pub use calendar::{
    DateKey, date_for_day, days_in_month, holiday_name, is_weekend_or_holiday, month_date_keys,
    month_from_index, required_days_off, weekday_label, weekday_of,
};
pub use catalog::ShiftCatalog;
pub use config::{
    DEFAULT_MAX_CONSECUTIVE_DAYS, DEFAULT_SUNDAY_OFF_FREQUENCY, MAX_EXTRA_DAYS_OFF, RoleStaffing,
    RulesConfig, StaffingConfig,
};
pub use error::DomainError;
pub use schedule::{Attachment, CellMap, MonthlySchedule, SuggestionMap};
pub use staffing::{DailyStat, compute_daily_stats};
pub use types::{
    Employee, EmployeeField, EmployeeId, Shift, ShiftCategory, ShiftId, parse_time_of_day,
};
pub use validation::{
    ValidationResult, count_days_off, sunday_rotation_gaps, validate_schedule,
};
