// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of one grid frame.

use roster_domain::{DailyStat, MonthlySchedule};
use roster_grid::{CellView, DayHeaderView, GridView, RowView};
use std::fmt::{self, Write};

const NAME_WIDTH: usize = 16;
const EMPTY_CELL: &str = ".";

/// Renders the frame as a fixed-width table followed by the staffing
/// footer and the row warnings.
///
/// # Errors
///
/// Returns an error if formatting into the buffer fails.
pub fn render_report(
    schedule: &MonthlySchedule,
    view: &GridView,
) -> Result<String, fmt::Error> {
    let mut out: String = String::new();
    let mode: &str = if view.read_only { " (read-only)" } else { "" };
    writeln!(
        out,
        "Roster {}-{:02}{mode}",
        schedule.year,
        u16::from(schedule.month) + 1
    )?;
    writeln!(out, "Rows {}..{}", view.window.start, view.window.end)?;

    writeln!(
        out,
        "{:<NAME_WIDTH$}|{}",
        "",
        header_line(&view.day_headers, |h| format!("{:02}", h.day))
    )?;
    writeln!(
        out,
        "{:<NAME_WIDTH$}|{}",
        "",
        header_line(&view.day_headers, |h| {
            let label: String = h.weekday.chars().take(2).collect();
            if h.highlighted {
                label.to_uppercase()
            } else {
                label
            }
        })
    )?;

    for row in &view.rows {
        writeln!(
            out,
            "{:<NAME_WIDTH$}|{}| off {}{}",
            truncate(&row.employee.name, NAME_WIDTH),
            row_line(row),
            row.days_off,
            row.required_days_off
                .map_or_else(String::new, |required| format!("/{required}"))
        )?;
    }

    writeln!(
        out,
        "{:<NAME_WIDTH$}|{}",
        "staff",
        footer_line(&view.footer)
    )?;

    let deficit: Vec<u8> = view.deficit_days();
    if !deficit.is_empty() {
        let days: Vec<String> = deficit.iter().map(u8::to_string).collect();
        writeln!(out, "Understaffed days: {}", days.join(", "))?;
    }

    for row in &view.rows {
        for message in &row.validation.messages {
            writeln!(out, "{}: {message}", row.employee.name)?;
        }
        if !row.sunday_gaps.is_empty() {
            let days: Vec<String> = row.sunday_gaps.iter().map(u8::to_string).collect();
            writeln!(
                out,
                "{}: no Sunday off through day {}",
                row.employee.name,
                days.join(", ")
            )?;
        }
    }
    Ok(out)
}

fn header_line<F>(headers: &[DayHeaderView], label: F) -> String
where
    F: Fn(&DayHeaderView) -> String,
{
    headers.iter().map(|h| format!("{:>3}", label(h))).collect()
}

fn row_line(row: &RowView) -> String {
    row.cells.iter().map(|cell| format!("{:>3}", glyph(cell))).collect()
}

fn glyph(cell: &CellView) -> String {
    let mut glyph: String = cell.code.clone().unwrap_or_else(|| EMPTY_CELL.to_string());
    if cell.has_attachment {
        glyph.push('*');
    }
    glyph
}

fn footer_line(footer: &[DailyStat]) -> String {
    footer
        .iter()
        .map(|stat| {
            let marker: &str = if stat.is_deficit() { "!" } else { "" };
            let count: String = format!("{}{marker}", stat.total_active);
            format!("{count:>3}")
        })
        .collect()
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
