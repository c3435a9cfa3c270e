//!  Travel CLI
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Rendering
//!
//! Plain-text tables and summaries for terminal output.
//! Every function returns a `String`; printing is left to the binary.

use std::fmt::Write as _;

use flight_results::{FlightRecord, FlightSummary, TruncationNotice};

use crate::{FlightQuery, SearchReport, TravelDates};

const HEADERS: [&str; 6] = ["AIRLINE", "DEPARTURE", "ARRIVAL", "DURATION", "STOPS", "PRICE"];
const GAP: &str = "  ";
const MIN_FLEX_WIDTH: usize = 8;
const DEFAULT_TERMINAL_WIDTH: usize = 100;

/// Get terminal width for responsive tables
pub fn terminal_width() -> usize {
    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

pub fn fmt_stops(stops: u32) -> String {
    match stops {
        0 => "Non-stop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

pub fn fmt_price(price: Option<&str>) -> String {
    price.unwrap_or("N/A").to_string()
}

/// Format minutes as `"2h 30m"`.
pub fn fmt_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Format an amount with thousands separators: `1234567` -> `"1,234,567"`.
pub fn fmt_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn fmt_arrival(record: &FlightRecord) -> String {
    match &record.arrival_day_offset {
        Some(offset) => format!("{} {}", record.arrival, offset),
        None => record.arrival.clone(),
    }
}

fn row_cells(record: &FlightRecord) -> [String; 6] {
    [
        record.airline.clone(),
        record.departure.clone(),
        fmt_arrival(record),
        record.duration.clone(),
        fmt_stops(record.stops),
        fmt_price(record.price.as_deref()),
    ]
}

/// Fit the table to the terminal by shrinking airline and time columns.
fn column_widths(rows: &[[String; 6]], terminal_width: usize) -> [usize; 6] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let available = terminal_width.saturating_sub(GAP.len() * (HEADERS.len() - 1));
    let total: usize = widths.iter().sum();
    if total > available {
        let fixed: usize = widths[3..].iter().sum();
        let flexible_total: usize = widths[..3].iter().sum();
        let flexible_budget = available.saturating_sub(fixed);
        for width in &mut widths[..3] {
            *width = (*width * flexible_budget / flexible_total).max(MIN_FLEX_WIDTH);
        }
    }

    widths
}

fn fit(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }
    let mut out: String = cell.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{:<w$}", fit(cell, w)))
        .collect::<Vec<_>>()
        .join(GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn render_table(flights: &[FlightRecord], terminal_width: usize) -> String {
    if flights.is_empty() {
        return "No flights found.\n".to_string();
    }

    let rows: Vec<[String; 6]> = flights.iter().map(row_cells).collect();
    let widths = column_widths(&rows, terminal_width);
    let headers = HEADERS.map(str::to_string);
    let bar_len = widths.iter().sum::<usize>() + GAP.len() * (HEADERS.len() - 1);

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    out.push_str(&"-".repeat(bar_len.min(terminal_width)));
    out.push('\n');
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

pub fn render_header(query: &FlightQuery) -> String {
    match &query.dates {
        TravelDates::OneWay { date } => format!(
            "✈️  Flights from {} to {} on {}",
            query.origin, query.destination, date
        ),
        TravelDates::RoundTrip {
            departure_date,
            return_date,
        } => format!(
            "✈️  Round-trip: {} ↔ {}\n   Depart: {} | Return: {}",
            query.origin, query.destination, departure_date, return_date
        ),
        TravelDates::DateRange { start, end, .. } => format!(
            "✈️  Flights: {} → {}\n   Date range: {} to {}",
            query.origin, query.destination, start, end
        ),
    }
}

pub fn render_notice(notice: &TruncationNotice) -> String {
    format!(
        "Showing {} of {} flights. Use --all to see all results.",
        notice.limit, notice.total
    )
}

pub fn render_summary(summary: &FlightSummary, currency: &str) -> String {
    let mut out = String::from("Summary\n");
    let _ = writeln!(out, "  Total flights found: {}", summary.total);
    let _ = writeln!(out, "  Non-stop flights: {}", summary.non_stop);
    if let Some(range) = summary.price_range {
        let _ = writeln!(
            out,
            "  Price range: {currency}{} - {currency}{}",
            fmt_amount(range.min),
            fmt_amount(range.max)
        );
    }
    if let Some(minutes) = summary.fastest_minutes {
        let _ = writeln!(out, "  Fastest flight: {}", fmt_minutes(minutes));
    }
    out
}

/// Full terminal report: header, table, truncation notice, summary.
pub fn render_report(report: &SearchReport, currency: &str, terminal_width: usize) -> String {
    let mut out = render_header(&report.query);
    out.push_str("\n\n");
    out.push_str(&render_table(&report.flights, terminal_width));
    if let Some(notice) = &report.truncation {
        out.push('\n');
        out.push_str(&render_notice(notice));
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&render_summary(&report.summary, currency));
    out
}
