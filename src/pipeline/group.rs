// Reception grouping, group ordering and color banding

use crate::models::Order;
use crate::pipeline::expiry::priority_of;
use std::collections::HashMap;

/// Group the filtered sequence by reception number, order the groups by
/// (due date, expiry rank) and tag each group with an alternating color
/// band, then flatten back to a display sequence.
///
/// Groups form in first-seen order and members keep their relative order
/// from the input. The sort is stable: groups with equal due date and
/// rank stay in first-seen order. Records without a reception number all
/// land in one shared group.
pub fn apply(filtered: &[Order]) -> Vec<Order> {
    let mut index_of: HashMap<Option<i64>, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Order>> = Vec::new();
    for order in filtered {
        match index_of.get(&order.reception_number) {
            Some(&i) => groups[i].push(order),
            None => {
                index_of.insert(order.reception_number, groups.len());
                groups.push(vec![order]);
            }
        }
    }

    // The first member stands in for the whole group: lines of one
    // reception share their due date and expiry label.
    groups.sort_by_key(|group| {
        let rep = group[0];
        (rep.due_date, priority_of(rep.expiry_primary.as_deref()))
    });

    let mut out = Vec::with_capacity(filtered.len());
    for (position, group) in groups.iter().enumerate() {
        let band = (position % 2) as u8;
        for order in group {
            let mut order = (*order).clone();
            order.group_color_index = Some(band);
            out.push(order);
        }
    }
    out
}
