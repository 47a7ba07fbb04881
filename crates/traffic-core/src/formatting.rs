//! Rendering of a [`TrafficReport`] for the terminal.

use std::fmt::Write as _;

use crate::error::Result;
use crate::models::TrafficReport;

/// Length of one reading period, in minutes.
pub const PERIOD_MINUTES: usize = 30;

/// Express `periods` half-hour readings as a number of hours.
///
/// # Examples
///
/// ```
/// use traffic_core::formatting::format_hours;
///
/// assert_eq!(format_hours(3), "1.5");
/// assert_eq!(format_hours(4), "2");
/// assert_eq!(format_hours(1), "0.5");
/// ```
pub fn format_hours(periods: usize) -> String {
    let minutes = periods * PERIOD_MINUTES;
    if minutes % 60 == 0 {
        (minutes / 60).to_string()
    } else {
        format!("{}", minutes as f64 / 60.0)
    }
}

/// Render the report as the four plain-text sections.
pub fn render_text(report: &TrafficReport) -> String {
    let mut out = String::new();

    // writeln! into a String cannot fail.
    let _ = writeln!(out, "Total cars: {}", report.total_cars);
    out.push('\n');

    out.push_str("Cars per day:\n");
    for day in &report.daily_totals {
        let _ = writeln!(out, "{day}");
    }
    out.push('\n');

    let _ = writeln!(out, "Top {} half hours:", report.top_n);
    for reading in &report.top_periods {
        let _ = writeln!(out, "{reading}");
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "Least busy {} hour period:",
        format_hours(report.window)
    );
    for reading in &report.least_busy_period {
        let _ = writeln!(out, "{reading}");
    }

    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &TrafficReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
