use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Work-type tag for deliveries leaving the facility.
pub const REQUIREMENT_DELIVERY: &str = "<配達>";
/// Work-type tag for in-store handover of a delivery.
pub const REQUIREMENT_WALK_IN: &str = "来店(納品)";
/// Work-type tag for exchanges.
pub const REQUIREMENT_EXCHANGE: &str = "交換";

/// Work-type tags that participate in display. Closed allow-list: anything
/// not listed here is dropped, new tags stay hidden until added.
pub const ALLOWED_REQUIREMENTS: &[&str] = &[
    REQUIREMENT_DELIVERY,
    REQUIREMENT_WALK_IN,
    REQUIREMENT_EXCHANGE,
];

/// One line of work to prepare or deliver.
///
/// A single reception produces one or more lines; every line of the same
/// reception shares `reception_number`, `due_date` and the expiry labels.
/// `group_color_index` is a derived display field and is only ever written
/// by the group/sort stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Option<i64>,
    pub product_name: Option<String>,
    pub quantity: i64,
    pub detail: Option<String>,
    pub due_date: NaiveDate,
    pub expiry_primary: Option<String>,
    pub expiry_secondary: Option<String>,
    pub requirements: Option<String>,
    pub customer_name: Option<String>,
    pub reception_number: Option<i64>,
    pub group_color_index: Option<u8>,
    pub preparer_id: Option<i64>,
    pub departed: Option<bool>,
}

impl Order {
    /// Preparation is complete once a preparer has been recorded.
    /// A preparer of 0 means "nobody yet", same as null.
    pub fn is_prepared(&self) -> bool {
        self.preparer_id.unwrap_or(0) != 0
    }

    /// Whether this line is an outgoing delivery.
    pub fn is_delivery(&self) -> bool {
        self.requirements.as_deref() == Some(REQUIREMENT_DELIVERY)
    }

    /// Whether the delivery has already left. Null counts as not departed.
    pub fn has_departed(&self) -> bool {
        self.departed == Some(true)
    }

    /// Whether the work type participates in display at all.
    pub fn has_allowed_requirement(&self) -> bool {
        matches!(self.requirements.as_deref(), Some(r) if ALLOWED_REQUIREMENTS.contains(&r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Order {
        Order {
            id: None,
            product_name: None,
            quantity: 1,
            detail: None,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            expiry_primary: None,
            expiry_secondary: None,
            requirements: None,
            customer_name: None,
            reception_number: None,
            group_color_index: None,
            preparer_id: None,
            departed: None,
        }
    }

    #[test]
    fn test_is_prepared() {
        let mut o = order();
        assert!(!o.is_prepared());
        o.preparer_id = Some(0);
        assert!(!o.is_prepared());
        o.preparer_id = Some(7);
        assert!(o.is_prepared());
    }

    #[test]
    fn test_is_delivery() {
        let mut o = order();
        assert!(!o.is_delivery());
        o.requirements = Some(REQUIREMENT_DELIVERY.to_string());
        assert!(o.is_delivery());
        o.requirements = Some(REQUIREMENT_EXCHANGE.to_string());
        assert!(!o.is_delivery());
    }

    #[test]
    fn test_has_departed_null_is_not_departed() {
        let mut o = order();
        assert!(!o.has_departed());
        o.departed = Some(false);
        assert!(!o.has_departed());
        o.departed = Some(true);
        assert!(o.has_departed());
    }

    #[test]
    fn test_allowed_requirements() {
        let mut o = order();
        assert!(!o.has_allowed_requirement());
        for tag in ALLOWED_REQUIREMENTS {
            o.requirements = Some(tag.to_string());
            assert!(o.has_allowed_requirement(), "tag {} should be allowed", tag);
        }
        o.requirements = Some("その他".to_string());
        assert!(!o.has_allowed_requirement());
        o.requirements = Some(String::new());
        assert!(!o.has_allowed_requirement());
    }
}
