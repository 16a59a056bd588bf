// Date argument parsing for period windows

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};

/// Parse a date argument into a calendar date.
///
/// Accepts absolute dates (2026-01-10) and the relative forms `today`
/// and `tomorrow`. The board works in whole days, so there is no time
/// component to parse.
pub fn parse_date_arg(expr: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(date);
    }

    match expr {
        "today" => Ok(Local::now().date_naive()),
        "tomorrow" => Ok(Local::now().date_naive() + Duration::days(1)),
        _ => anyhow::bail!(
            "Unsupported date expression: {}. Use YYYY-MM-DD, 'today' or 'tomorrow'.",
            expr
        ),
    }
}
