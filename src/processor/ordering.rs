//! Total order used to sort orders by zone and customer.

use crate::model::Zone;
use std::cmp::Ordering;

/// Compares two customer names ignoring case, folding each `char` to lowercase.
pub fn compare_customers(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Zone descending, then customer ascending ignoring case.
///
/// Returns [`Ordering::Equal`] only when both components tie; such entries
/// are treated as the same element by
/// [`OrderProcessor::sort_by_zone_then_customer`](crate::processor::OrderProcessor::sort_by_zone_then_customer).
pub fn compare_zone_then_customer(a: (Zone, &str), b: (Zone, &str)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| compare_customers(a.1, b.1))
}
