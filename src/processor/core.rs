//! # Order Processor
//!
//! Stateless transformations over collections of borrowed [`Order`]s.
//!
//! ## Operations
//!
//! - [`OrderProcessor::filter_by_zone_threshold`]: keep orders whose zone is above a threshold.
//! - [`OrderProcessor::sort_by_zone_then_customer`]: zone descending, customer ascending, ties collapsed.
//! - [`OrderProcessor::group_by_urgency`]: FIFO groups keyed by urgency, keys ascending.
//! - [`OrderProcessor::explode_dominant_group`]: push the largest group onto an [`OrderStack`].
//!
//! No operation mutates its input or returns copies of orders. Any operation
//! that evaluates [`Order::zone`] aborts on the first [`FormatError`] without
//! returning a partial result.

use crate::model::{FormatError, Order, Urgency, Zone};
use crate::processor::{compare_zone_then_customer, OrderStack};
use std::cmp::Ordering;
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, info, instrument};

/// Orders grouped by urgency. Keys iterate in ascending order; each group
/// keeps the input order of its members.
pub type UrgencyGroups<'a> = BTreeMap<Urgency, VecDeque<&'a Order>>;

/// Stateless engine for zone and urgency based transformations.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderProcessor;

impl OrderProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Returns the orders whose zone is strictly greater than `threshold`,
    /// in input order. Repeated references are kept.
    ///
    /// # Errors
    /// Fails with the first [`FormatError`] met while reading a zone.
    #[instrument(skip(self, orders))]
    pub fn filter_by_zone_threshold<'a, I>(
        &self,
        orders: I,
        threshold: i64,
    ) -> Result<Vec<&'a Order>, FormatError>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut scanned = 0usize;
        let mut kept = Vec::new();
        for order in orders {
            scanned += 1;
            if i64::from(order.zone()?) > threshold {
                kept.push(order);
            }
        }

        info!(scanned, kept = kept.len(), "Filtered by zone");
        Ok(kept)
    }

    /// Sorts by zone descending, then customer ascending ignoring case.
    ///
    /// Orders that tie on both keys are collapsed: only the first one met in
    /// the input survives.
    ///
    /// # Errors
    /// Fails with the first [`FormatError`] met while reading a zone.
    #[instrument(skip(self, orders))]
    pub fn sort_by_zone_then_customer<'a, I>(&self, orders: I) -> Result<Vec<&'a Order>, FormatError>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut keyed: Vec<(Zone, &'a Order)> = orders
            .into_iter()
            .map(|order| order.zone().map(|zone| (zone, order)))
            .collect::<Result<_, _>>()?;
        let scanned = keyed.len();

        let compare = |(za, a): &(Zone, &Order), (zb, b): &(Zone, &Order)| {
            compare_zone_then_customer((*za, a.customer()), (*zb, b.customer()))
        };
        // Stable sort keeps the first occurrence ahead of its ties.
        keyed.sort_by(compare);
        keyed.dedup_by(|later, earlier| compare(&*earlier, &*later) == Ordering::Equal);

        debug!(collapsed = scanned - keyed.len(), "Collapsed zone/customer ties");
        info!(scanned, sorted = keyed.len(), "Sorted by zone then customer");
        Ok(keyed.into_iter().map(|(_, order)| order).collect())
    }

    /// Groups orders by urgency, preserving input order within each group.
    #[instrument(skip(self, orders))]
    pub fn group_by_urgency<'a, I>(&self, orders: I) -> UrgencyGroups<'a>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut groups = UrgencyGroups::new();
        for order in orders {
            groups.entry(order.urgency()).or_default().push_back(order);
        }

        info!(groups = groups.len(), "Grouped by urgency");
        groups
    }

    /// Picks the urgency with the largest group, preferring the higher
    /// urgency on a size tie. `None` for an empty mapping.
    pub fn dominant_urgency(&self, groups: &UrgencyGroups<'_>) -> Option<Urgency> {
        groups
            .iter()
            .max_by(|(ka, ga), (kb, gb)| ga.len().cmp(&gb.len()).then_with(|| ka.cmp(kb)))
            .map(|(urgency, _)| *urgency)
    }

    /// Pushes the dominant group onto a stack in its stored order, so the
    /// group's last order ends up on top.
    #[instrument(skip(self, groups))]
    pub fn explode_dominant_group<'a>(&self, groups: &UrgencyGroups<'a>) -> OrderStack<'a> {
        let Some(urgency) = self.dominant_urgency(groups) else {
            debug!("No groups to explode");
            return OrderStack::new();
        };

        let stack: OrderStack<'a> = groups
            .get(&urgency)
            .into_iter()
            .flatten()
            .copied()
            .collect();

        info!(urgency, size = stack.len(), "Exploded dominant group");
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(customer: &str, postal_code: &str, priorities: &[i64]) -> Order {
        Order::new(customer, postal_code, priorities.to_vec())
    }

    #[test]
    fn filter_keeps_input_order_and_duplicates() {
        let a = order("Ana", "X-080", &[]);
        let b = order("Bob", "X-010", &[]);
        let c = order("Cid", "X-095", &[]);
        let processor = OrderProcessor::new();

        let kept = processor
            .filter_by_zone_threshold([&a, &b, &c, &a], 50)
            .unwrap();
        assert_eq!(kept, vec![&a, &c, &a]);
    }

    #[test]
    fn filter_threshold_is_exclusive() {
        let a = order("Ana", "X-080", &[]);
        let processor = OrderProcessor::new();
        assert!(processor.filter_by_zone_threshold([&a], 80).unwrap().is_empty());
        assert_eq!(processor.filter_by_zone_threshold([&a], -1).unwrap(), vec![&a]);
    }

    #[test]
    fn filter_aborts_on_malformed_postal_code() {
        let a = order("Ana", "X-080", &[]);
        let bad = order("Bad", "X080", &[]);
        let result = OrderProcessor::new().filter_by_zone_threshold([&a, &bad], 0);
        assert!(matches!(result, Err(FormatError::MissingSeparator(_))));
    }

    #[test]
    fn sort_collapses_case_insensitive_ties_keeping_first() {
        let first = order("ana", "X-080", &[3]);
        let second = order("ANA", "Y-80", &[6]);
        let other = order("Ana", "X-081", &[]);
        let sorted = OrderProcessor::new()
            .sort_by_zone_then_customer([&first, &other, &second])
            .unwrap();
        assert_eq!(sorted.len(), 2);
        assert!(std::ptr::eq(sorted[0], &other));
        assert!(std::ptr::eq(sorted[1], &first));
    }

    #[test]
    fn group_keeps_fifo_within_urgency() {
        let a = order("Ana", "X-1", &[3]);
        let b = order("Bob", "X-2", &[0]);
        let c = order("Cid", "X-3", &[3]);
        let groups = OrderProcessor::new().group_by_urgency([&a, &b, &c]);

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(groups[&0], VecDeque::from(vec![&b]));
        assert_eq!(groups[&3], VecDeque::from(vec![&a, &c]));
    }

    #[test]
    fn dominant_urgency_prefers_size_then_higher_key() {
        let a = order("Ana", "X-1", &[3]);
        let b = order("Bob", "X-2", &[6]);
        let c = order("Cid", "X-3", &[6]);
        let d = order("Dee", "X-4", &[30]);
        let processor = OrderProcessor::new();

        let groups = processor.group_by_urgency([&a, &b, &c, &d]);
        assert_eq!(processor.dominant_urgency(&groups), Some(6));

        let tied = processor.group_by_urgency([&a, &d]);
        assert_eq!(processor.dominant_urgency(&tied), Some(30));

        assert_eq!(processor.dominant_urgency(&UrgencyGroups::new()), None);
    }

    #[test]
    fn dominant_urgency_handles_negative_keys() {
        let a = order("Ana", "X-1", &[-3]);
        let processor = OrderProcessor::new();
        let groups = processor.group_by_urgency([&a]);
        assert_eq!(processor.dominant_urgency(&groups), Some(-3));
        assert_eq!(processor.explode_dominant_group(&groups).peek(), Some(&a));
    }

    #[test]
    fn explode_puts_last_input_order_on_top() {
        let a = order("Ana", "X-1", &[3]);
        let b = order("Bob", "X-2", &[3]);
        let c = order("Cid", "X-3", &[3]);
        let processor = OrderProcessor::new();
        let groups = processor.group_by_urgency([&a, &b, &c]);

        let stack = processor.explode_dominant_group(&groups);
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![&c, &b, &a]);
        assert_eq!(groups[&3].len(), 3);
    }

    #[test]
    fn explode_empty_groups_is_empty() {
        let stack = OrderProcessor::new().explode_dominant_group(&UrgencyGroups::new());
        assert!(stack.is_empty());
    }
}
