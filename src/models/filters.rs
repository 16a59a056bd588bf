use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Completion-state filter for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    /// Not yet prepared (preparer null or 0)
    Incomplete,
    /// Prepared only (preparer set and non-zero)
    Completed,
    /// Everything
    All,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Incomplete => "incomplete",
            DisplayMode::Completed => "completed",
            DisplayMode::All => "all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "incomplete" => Some(DisplayMode::Incomplete),
            "completed" => Some(DisplayMode::Completed),
            "all" => Some(DisplayMode::All),
            _ => None,
        }
    }
}

/// Delivery-period window for the board.
///
/// The relative variants are anchored at a comparison date the caller
/// evaluates once per run, so a run never straddles a midnight rollover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodFilter {
    Today,
    Tomorrow,
    TodayAndTomorrow,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl PeriodFilter {
    /// True when `due` falls inside the window anchored at `today`.
    ///
    /// A custom window is inclusive on both ends; an inverted window
    /// (end before start) matches nothing.
    pub fn contains(&self, due: NaiveDate, today: NaiveDate) -> bool {
        match self {
            PeriodFilter::Today => due == today,
            PeriodFilter::Tomorrow => due == today + Duration::days(1),
            PeriodFilter::TodayAndTomorrow => {
                due == today || due == today + Duration::days(1)
            }
            PeriodFilter::Custom { start, end } => *start <= due && due <= *end,
        }
    }
}
