//! Order display pipeline
//!
//! Turns a flat snapshot of order rows into the sequence the board shows:
//! filtered by period and completion state, narrowed to the displayable
//! work types, grouped by reception number, ordered by due date and expiry
//! urgency, and tagged with alternating color bands.
//!
//! Every stage is a pure function over the snapshot. The pipeline holds no
//! state between runs and never mutates its input; the same snapshot and
//! parameters always produce the same output, bands included.

pub mod expiry;
pub mod filter;
pub mod group;

pub use expiry::priority_of;

use crate::models::{DisplayMode, Order, PeriodFilter};
use chrono::NaiveDate;

/// Run the full pipeline over a snapshot.
///
/// `today` anchors the relative period windows and is evaluated once by
/// the caller, never read from the clock in here.
pub fn run(
    snapshot: &[Order],
    period: &PeriodFilter,
    mode: DisplayMode,
    today: NaiveDate,
) -> Vec<Order> {
    let filtered = filter::apply(snapshot, period, mode, today);
    log::debug!(
        "pipeline: {} of {} orders after filters",
        filtered.len(),
        snapshot.len()
    );
    group::apply(&filtered)
}
