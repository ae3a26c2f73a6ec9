//! Independent recomputation of derived fields and processor results.
//!
//! Nothing here calls [`Order::zone`], [`Order::urgency`] or the
//! [`OrderProcessor`](crate::processor::OrderProcessor); every expectation is
//! rebuilt from raw fields so that a regression in the formulas themselves is
//! caught.

use crate::model::{Order, Urgency};
use crate::processor::{OrderStack, UrgencyGroups};
use crate::validation::ValidationError;
use std::collections::{BTreeMap, HashSet};
use std::ptr;

/// Zone read from the segment after the last `-`, or from the last three
/// characters when there is no `-`.
pub fn expected_zone(order: &Order) -> Result<i64, ValidationError> {
    let code = order.postal_code();
    let tail = match code.rsplit_once('-') {
        Some((_, tail)) => tail,
        None => {
            let start = code.char_indices().rev().nth(2).map(|(i, _)| i);
            start.map_or("", |i| &code[i..])
        }
    };
    tail.parse::<i64>()
        .ok()
        .filter(|zone| *zone >= 0)
        .ok_or_else(|| ValidationError::UnreadableZone {
            customer: order.customer().to_string(),
            postal_code: code.to_string(),
        })
}

/// Urgency with wrapping arithmetic, rebuilt from the raw fields.
pub fn expected_urgency(order: &Order) -> Urgency {
    let mut sum: Urgency = 0;
    for &priority in order.priorities() {
        if priority % 3 == 0 {
            sum = sum.wrapping_add(priority);
        }
    }

    let vowels: HashSet<char> = fold_case(order.customer())
        .into_iter()
        .filter(|c| "aeiou".contains(*c))
        .collect();
    sum.wrapping_mul(vowels.len() as Urgency)
}

/// Lowercases one `char` at a time, without the context rules of
/// [`str::to_lowercase`].
fn fold_case(name: &str) -> Vec<char> {
    let mut folded = Vec::with_capacity(name.len());
    for c in name.chars() {
        folded.extend(c.to_lowercase());
    }
    folded
}

pub fn check_zone(order: &Order, expected: i64) -> Result<(), ValidationError> {
    let computed = expected_zone(order)?;
    if computed != expected {
        return Err(ValidationError::ZoneMismatch {
            customer: order.customer().to_string(),
            postal_code: order.postal_code().to_string(),
            expected,
            computed,
        });
    }
    Ok(())
}

pub fn check_urgency(order: &Order, expected: Urgency) -> Result<(), ValidationError> {
    let computed = expected_urgency(order);
    if computed != expected {
        return Err(ValidationError::UrgencyMismatch {
            customer: order.customer().to_string(),
            priorities: order.priorities().to_vec(),
            expected,
            computed,
        });
    }
    Ok(())
}

/// Every result order is above `threshold`, every source order above it is
/// present, and the result is no larger than the source.
pub fn check_filtered<'a, I>(
    result: &[&Order],
    source: I,
    threshold: i64,
) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let source: Vec<&Order> = source.into_iter().collect();
    if result.len() > source.len() {
        return Err(ValidationError::FilterTooLarge {
            actual: result.len(),
            input: source.len(),
        });
    }

    for order in result {
        let zone = expected_zone(order)?;
        if zone <= threshold {
            return Err(ValidationError::NotAboveThreshold {
                customer: order.customer().to_string(),
                zone,
                threshold,
            });
        }
    }

    for order in source {
        let zone = expected_zone(order)?;
        if zone > threshold && !result.iter().any(|kept| ptr::eq(*kept, order)) {
            return Err(ValidationError::MissingFromFilter {
                customer: order.customer().to_string(),
                zone,
            });
        }
    }
    Ok(())
}

/// Strict zone-descending then customer-ascending order, no duplicate
/// customer+zone keys, and every entry present in the source.
pub fn check_sorted<'a, I>(result: &[&Order], source: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut keys = Vec::with_capacity(result.len());
    for order in result {
        keys.push((expected_zone(order)?, fold_case(order.customer())));
    }

    {
        let mut seen = HashSet::new();
        for (zone, customer) in &keys {
            if !seen.insert((*zone, customer.as_slice())) {
                return Err(ValidationError::DuplicateEntry {
                    customer: customer.iter().collect(),
                    zone: *zone,
                });
            }
        }
    }

    for (position, pair) in keys.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let in_order = previous.0 > current.0 || (previous.0 == current.0 && previous.1 < current.1);
        if !in_order {
            return Err(ValidationError::OutOfOrder {
                position: position + 1,
                previous: format!("{}({})", result[position].customer(), previous.0),
                current: format!("{}({})", result[position + 1].customer(), current.0),
            });
        }
    }

    let mut known = HashSet::new();
    for order in source {
        known.insert((expected_zone(order)?, fold_case(order.customer())));
    }
    for (zone, customer) in keys {
        if !known.contains(&(zone, customer.clone())) {
            return Err(ValidationError::UnknownEntry {
                customer: customer.into_iter().collect(),
                zone,
            });
        }
    }
    Ok(())
}

/// Same keys as an independent regrouping of the source, with each group in
/// source order.
pub fn check_grouped<'a, I>(groups: &UrgencyGroups<'_>, source: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let expected = regroup(source);

    let expected_keys: Vec<Urgency> = expected.keys().copied().collect();
    let actual_keys: Vec<Urgency> = groups.keys().copied().collect();
    if expected_keys != actual_keys {
        return Err(ValidationError::GroupKeysMismatch {
            expected: expected_keys,
            actual: actual_keys,
        });
    }

    for (urgency, members) in &expected {
        let actual = groups.get(urgency).map(|group| group.len()).unwrap_or(0);
        if actual != members.len() {
            return Err(ValidationError::GroupSizeMismatch {
                urgency: *urgency,
                expected: members.len(),
                actual,
            });
        }
        let group = groups.get(urgency).into_iter().flatten();
        for (position, (want, got)) in members.iter().zip(group).enumerate() {
            if !ptr::eq(*want, *got) {
                return Err(ValidationError::GroupMemberMismatch {
                    urgency: *urgency,
                    position,
                });
            }
        }
    }
    Ok(())
}

/// The stack holds the largest source group (higher urgency on a size tie),
/// pushed in source order.
pub fn check_exploded<'a, I>(stack: &OrderStack<'_>, source: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let grouped = regroup(source);

    let mut selected: Option<(Urgency, usize)> = None;
    for (urgency, members) in &grouped {
        let better = match selected {
            None => true,
            Some((best, size)) => members.len() > size || (members.len() == size && *urgency > best),
        };
        if better {
            selected = Some((*urgency, members.len()));
        }
    }

    let urgency = selected.map(|(urgency, _)| urgency);
    let expected: &[&Order] = urgency
        .and_then(|urgency| grouped.get(&urgency))
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    if expected.len() != stack.len() {
        return Err(ValidationError::StackSizeMismatch {
            urgency,
            expected: expected.len(),
            actual: stack.len(),
        });
    }

    for (depth, (want, got)) in expected.iter().rev().zip(stack.iter()).enumerate() {
        if !ptr::eq(*want, got) {
            return Err(ValidationError::StackMemberMismatch { depth });
        }
    }
    Ok(())
}

fn regroup<'a, I>(source: I) -> BTreeMap<Urgency, Vec<&'a Order>>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut grouped: BTreeMap<Urgency, Vec<&'a Order>> = BTreeMap::new();
    for order in source {
        grouped.entry(expected_urgency(order)).or_default().push(order);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_zone_falls_back_to_last_three_characters() {
        assert_eq!(expected_zone(&Order::new("Ana", "28080", vec![])), Ok(80));
        assert_eq!(expected_zone(&Order::new("Ana", "X-007", vec![])), Ok(7));
        assert!(expected_zone(&Order::new("Ana", "80", vec![])).is_err());
        assert!(expected_zone(&Order::new("Ana", "X-abc", vec![])).is_err());
    }

    #[test]
    fn check_zone_reports_mismatch() {
        let order = Order::new("Ana", "X-080", vec![]);
        assert!(check_zone(&order, 80).is_ok());
        assert!(matches!(
            check_zone(&order, 81),
            Err(ValidationError::ZoneMismatch { computed: 80, .. })
        ));
    }

    #[test]
    fn check_urgency_reports_mismatch() {
        let order = Order::new("Ana", "X-080", vec![3, 4, 6]);
        assert!(check_urgency(&order, 9).is_ok());
        assert!(matches!(
            check_urgency(&order, 10),
            Err(ValidationError::UrgencyMismatch { computed: 9, .. })
        ));
    }

    #[test]
    fn expected_urgency_wraps_like_the_order() {
        let big = i64::MAX / 3 * 3;
        let order = Order::new("Aeiou", "X-080", vec![big, 3]);
        assert_eq!(expected_urgency(&order), order.urgency());
        assert!(check_urgency(&order, order.urgency()).is_ok());
    }

    #[test]
    fn check_sorted_folds_case_per_char() {
        // Final sigma lowercases differently per char than in a whole string.
        let source = [
            Order::new("ΑΣ", "X-080", vec![]),
            Order::new("ας", "X-080", vec![]),
        ];
        let sorted = crate::processor::OrderProcessor::new()
            .sort_by_zone_then_customer(&source)
            .unwrap();

        assert_eq!(sorted.len(), 2);
        assert!(check_sorted(&sorted, &source).is_ok());
    }

    #[test]
    fn check_filtered_detects_missing_and_low_orders() {
        let source = [
            Order::new("Ana", "X-080", vec![]),
            Order::new("Bob", "X-010", vec![]),
        ];

        assert!(check_filtered(&[&source[0]], &source, 50).is_ok());
        assert!(matches!(
            check_filtered(&[], &source, 50),
            Err(ValidationError::MissingFromFilter { .. })
        ));
        assert!(matches!(
            check_filtered(&[&source[0], &source[1]], &source, 50),
            Err(ValidationError::NotAboveThreshold { zone: 10, .. })
        ));
    }

    #[test]
    fn check_sorted_detects_wrong_order_and_duplicates() {
        let source = [
            Order::new("Bob", "X-080", vec![]),
            Order::new("Ana", "X-080", vec![]),
            Order::new("ana", "Y-080", vec![]),
        ];

        assert!(check_sorted(&[&source[1], &source[0]], &source).is_ok());
        assert!(matches!(
            check_sorted(&[&source[0], &source[1]], &source),
            Err(ValidationError::OutOfOrder { position: 1, .. })
        ));
        assert!(matches!(
            check_sorted(&[&source[1], &source[2]], &source),
            Err(ValidationError::DuplicateEntry { .. })
        ));

        let stranger = Order::new("Zed", "X-001", vec![]);
        assert!(matches!(
            check_sorted(&[&stranger], &source),
            Err(ValidationError::UnknownEntry { .. })
        ));
    }
}
