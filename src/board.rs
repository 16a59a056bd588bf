//! Board state: the snapshot held between reloads
//!
//! Replaces the original screen's view-model with a plain value store.
//! There is no change-notification protocol here; callers run `view` and
//! render whatever comes back.

use crate::models::{DisplayMode, Order, PeriodFilter};
use crate::pipeline;
use chrono::NaiveDate;

/// Handle tied to one fetch attempt, taken before the fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Holds the last good snapshot between reloads.
///
/// Reloads are cancellable-by-replacement: a fetch result that arrives
/// after a newer snapshot was installed is rejected, so a slow response
/// can never overwrite fresh data. A failed fetch installs nothing and
/// leaves the previous snapshot intact.
#[derive(Debug, Default)]
pub struct BoardState {
    snapshot: Vec<Order>,
    generation: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a fetch that is about to start.
    pub fn begin_fetch(&self) -> FetchTicket {
        FetchTicket(self.generation)
    }

    /// Replace the snapshot unconditionally.
    pub fn install(&mut self, orders: Vec<Order>) {
        self.snapshot = orders;
        self.generation += 1;
    }

    /// Replace the snapshot unless a newer one was installed after
    /// `ticket` was taken. Returns whether the install happened.
    pub fn install_if_current(&mut self, ticket: FetchTicket, orders: Vec<Order>) -> bool {
        if ticket.0 != self.generation {
            log::debug!("discarding stale fetch result ({} orders)", orders.len());
            return false;
        }
        self.install(orders);
        true
    }

    /// The raw snapshot, in arrival order.
    pub fn snapshot(&self) -> &[Order] {
        &self.snapshot
    }

    /// Run the display pipeline over the current snapshot.
    pub fn view(
        &self,
        period: &PeriodFilter,
        mode: DisplayMode,
        today: NaiveDate,
    ) -> Vec<Order> {
        pipeline::run(&self.snapshot, period, mode, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::REQUIREMENT_EXCHANGE;

    fn order(reception: i64) -> Order {
        Order {
            id: None,
            product_name: None,
            quantity: 1,
            detail: None,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            expiry_primary: None,
            expiry_secondary: None,
            requirements: Some(REQUIREMENT_EXCHANGE.to_string()),
            customer_name: None,
            reception_number: Some(reception),
            group_color_index: None,
            preparer_id: None,
            departed: None,
        }
    }

    #[test]
    fn test_install_replaces_snapshot() {
        let mut board = BoardState::new();
        board.install(vec![order(1)]);
        assert_eq!(board.snapshot().len(), 1);
        board.install(vec![order(2), order(3)]);
        assert_eq!(board.snapshot().len(), 2);
    }

    #[test]
    fn test_stale_fetch_is_rejected() {
        let mut board = BoardState::new();
        // Two fetches start; the second lands first
        let slow = board.begin_fetch();
        let fast = board.begin_fetch();
        assert!(board.install_if_current(fast, vec![order(2)]));
        // The slow result arrives after a newer install and is discarded
        assert!(!board.install_if_current(slow, vec![order(1)]));
        assert_eq!(board.snapshot()[0].reception_number, Some(2));
    }

    #[test]
    fn test_fetch_after_install_is_current() {
        let mut board = BoardState::new();
        board.install(vec![order(1)]);
        let ticket = board.begin_fetch();
        assert!(board.install_if_current(ticket, vec![order(2)]));
        assert_eq!(board.snapshot()[0].reception_number, Some(2));
    }

    #[test]
    fn test_view_over_empty_snapshot_is_empty() {
        let board = BoardState::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let view = board.view(&PeriodFilter::Today, DisplayMode::All, today);
        assert!(view.is_empty());
    }

    #[test]
    fn test_view_does_not_consume_snapshot() {
        let mut board = BoardState::new();
        board.install(vec![order(1)]);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let first = board.view(&PeriodFilter::Today, DisplayMode::All, today);
        let second = board.view(&PeriodFilter::Today, DisplayMode::All, today);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        // Snapshot itself stays untagged
        assert_eq!(board.snapshot()[0].group_color_index, None);
    }
}
