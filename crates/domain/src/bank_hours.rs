// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bank-hours balances.
//!
//! Balances are stored as decimal hour text (`"12.5"`, `"-1,75"`) because they
//! come straight from the payroll export. The grid shows them as `HH:MM`.

/// Parses a decimal hour balance, accepting either `.` or `,` as separator.
#[must_use]
pub fn parse_decimal_hours(value: &str) -> Option<f64> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite())
}

/// Renders a decimal hour balance as `[-]HH:MM`.
///
/// Empty input renders as `00:00`. Text that is not a number is returned
/// unchanged so that free-form notes in the balance field stay visible.
#[must_use]
pub fn decimal_to_time(value: &str) -> String {
    if value.trim().is_empty() {
        return String::from("00:00");
    }
    let Some(hours) = parse_decimal_hours(value) else {
        return value.to_string();
    };

    let negative: bool = hours < 0.0;
    let total_minutes: f64 = (hours.abs() * 60.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_minutes: u64 = total_minutes as u64;
    let whole_hours: u64 = total_minutes / 60;
    let minutes: u64 = total_minutes % 60;

    let sign: &str = if negative && total_minutes > 0 { "-" } else { "" };
    format!("{sign}{whole_hours:02}:{minutes:02}")
}
