// Display filters, applied in a fixed order

use crate::models::{DisplayMode, Order, PeriodFilter};
use chrono::NaiveDate;

/// Apply the display filters in their fixed order: period window,
/// completion state, requirement allow-list, then the departure
/// sub-filter for deliveries.
///
/// Pure function over the snapshot; the output holds fresh clones in
/// snapshot order. `today` anchors the relative period windows.
pub fn apply(
    snapshot: &[Order],
    period: &PeriodFilter,
    mode: DisplayMode,
    today: NaiveDate,
) -> Vec<Order> {
    snapshot
        .iter()
        .filter(|o| period.contains(o.due_date, today))
        .filter(|o| match mode {
            DisplayMode::Incomplete => !o.is_prepared(),
            DisplayMode::Completed => o.is_prepared(),
            DisplayMode::All => true,
        })
        .filter(|o| o.has_allowed_requirement())
        // Deliveries disappear from the board once they have left;
        // other work types keep showing regardless of the flag.
        .filter(|o| !o.is_delivery() || !o.has_departed())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{REQUIREMENT_DELIVERY, REQUIREMENT_EXCHANGE, REQUIREMENT_WALK_IN};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(due: NaiveDate, requirements: &str) -> Order {
        Order {
            id: None,
            product_name: Some("ベッド".to_string()),
            quantity: 1,
            detail: None,
            due_date: due,
            expiry_primary: None,
            expiry_secondary: None,
            requirements: Some(requirements.to_string()),
            customer_name: None,
            reception_number: Some(1),
            group_color_index: None,
            preparer_id: None,
            departed: None,
        }
    }

    #[test]
    fn test_period_filter_today() {
        let today = date(2024, 6, 1);
        let snapshot = vec![
            order(date(2024, 6, 1), REQUIREMENT_DELIVERY),
            order(date(2024, 6, 2), REQUIREMENT_DELIVERY),
            order(date(2024, 5, 31), REQUIREMENT_DELIVERY),
        ];
        let out = apply(&snapshot, &PeriodFilter::Today, DisplayMode::All, today);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].due_date, today);
    }

    #[test]
    fn test_display_mode_incomplete_and_completed_partition() {
        let today = date(2024, 6, 1);
        let mut unprepared = order(today, REQUIREMENT_EXCHANGE);
        unprepared.preparer_id = None;
        let mut zero = order(today, REQUIREMENT_EXCHANGE);
        zero.preparer_id = Some(0);
        let mut prepared = order(today, REQUIREMENT_EXCHANGE);
        prepared.preparer_id = Some(3);
        let snapshot = vec![unprepared, zero, prepared];

        let incomplete = apply(&snapshot, &PeriodFilter::Today, DisplayMode::Incomplete, today);
        assert_eq!(incomplete.len(), 2);

        let completed = apply(&snapshot, &PeriodFilter::Today, DisplayMode::Completed, today);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].preparer_id, Some(3));

        let all = apply(&snapshot, &PeriodFilter::Today, DisplayMode::All, today);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_requirement_allow_list_is_closed() {
        let today = date(2024, 6, 1);
        let mut no_tag = order(today, "");
        no_tag.requirements = None;
        let snapshot = vec![
            order(today, REQUIREMENT_DELIVERY),
            order(today, REQUIREMENT_WALK_IN),
            order(today, REQUIREMENT_EXCHANGE),
            order(today, "その他"),
            order(today, "引取"),
            order(today, ""),
            no_tag,
        ];
        let out = apply(&snapshot, &PeriodFilter::Today, DisplayMode::All, today);
        assert_eq!(out.len(), 3);
        for o in &out {
            assert!(o.has_allowed_requirement());
        }
    }

    #[test]
    fn test_departed_delivery_is_dropped() {
        let today = date(2024, 6, 1);
        let mut gone = order(today, REQUIREMENT_DELIVERY);
        gone.departed = Some(true);
        let mut here = order(today, REQUIREMENT_DELIVERY);
        here.departed = Some(false);
        let unknown = order(today, REQUIREMENT_DELIVERY);
        let snapshot = vec![gone, here, unknown];
        let out = apply(&snapshot, &PeriodFilter::Today, DisplayMode::All, today);
        assert_eq!(out.len(), 2);
        for o in &out {
            assert!(!o.has_departed());
        }
    }

    #[test]
    fn test_departure_does_not_affect_other_work_types() {
        let today = date(2024, 6, 1);
        let mut exchanged = order(today, REQUIREMENT_EXCHANGE);
        exchanged.departed = Some(true);
        let snapshot = vec![exchanged];
        let out = apply(&snapshot, &PeriodFilter::Today, DisplayMode::All, today);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_empty_snapshot() {
        let today = date(2024, 6, 1);
        let out = apply(&[], &PeriodFilter::Today, DisplayMode::All, today);
        assert!(out.is_empty());
    }

    #[test]
    fn test_snapshot_order_is_preserved() {
        let today = date(2024, 6, 1);
        let mut a = order(today, REQUIREMENT_DELIVERY);
        a.id = Some(10);
        let mut b = order(today, REQUIREMENT_DELIVERY);
        b.id = Some(20);
        let mut c = order(today, REQUIREMENT_DELIVERY);
        c.id = Some(30);
        let snapshot = vec![a, b, c];
        let out = apply(&snapshot, &PeriodFilter::Today, DisplayMode::All, today);
        let ids: Vec<_> = out.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![Some(10), Some(20), Some(30)]);
    }
}
