//! Error types reported by the result validators.

use crate::model::Urgency;
use thiserror::Error;

/// A property violated by a derived field or by a processor result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The postal code yields no non-negative zone.
    #[error("No zone can be read from postal code {postal_code:?} (customer={customer})")]
    UnreadableZone { customer: String, postal_code: String },

    /// The zone differs from the recomputed one.
    #[error("Wrong zone for customer={customer} postal_code={postal_code:?}: expected={expected} computed={computed}")]
    ZoneMismatch {
        customer: String,
        postal_code: String,
        expected: i64,
        computed: i64,
    },

    /// The urgency differs from the recomputed one.
    #[error("Wrong urgency for customer={customer} priorities={priorities:?}: expected={expected} computed={computed}")]
    UrgencyMismatch {
        customer: String,
        priorities: Vec<i64>,
        expected: Urgency,
        computed: Urgency,
    },

    /// A filtered order does not exceed the threshold.
    #[error("Order at or below threshold in filter result: customer={customer} zone={zone} threshold={threshold}")]
    NotAboveThreshold {
        customer: String,
        zone: i64,
        threshold: i64,
    },

    /// A source order above the threshold was left out.
    #[error("Order above threshold missing from filter result: customer={customer} zone={zone}")]
    MissingFromFilter { customer: String, zone: i64 },

    /// The filter returned more orders than it was given.
    #[error("Filter result has {actual} orders but the input only has {input}")]
    FilterTooLarge { actual: usize, input: usize },

    /// Two adjacent sorted orders are not in zone/customer order.
    #[error("Wrong order at position {position}: {previous} must not precede {current}")]
    OutOfOrder {
        position: usize,
        previous: String,
        current: String,
    },

    /// Two sorted orders share a zone and case-folded customer.
    #[error("Duplicate customer+zone in sorted result: {customer}#{zone}")]
    DuplicateEntry { customer: String, zone: i64 },

    /// A sorted order has no zone/customer match in the source.
    #[error("Sorted result contains an order absent from the input: {customer}#{zone}")]
    UnknownEntry { customer: String, zone: i64 },

    /// The group keys differ from the recomputed urgencies.
    #[error("Urgency keys differ: expected={expected:?} actual={actual:?}")]
    GroupKeysMismatch {
        expected: Vec<Urgency>,
        actual: Vec<Urgency>,
    },

    /// A group has a different size than recomputed.
    #[error("Group size differs for urgency {urgency}: expected={expected} actual={actual}")]
    GroupSizeMismatch {
        urgency: Urgency,
        expected: usize,
        actual: usize,
    },

    /// A group holds a different order, or the right ones out of order.
    #[error("Different order at position {position} for urgency {urgency}")]
    GroupMemberMismatch { urgency: Urgency, position: usize },

    /// The stack size differs from the dominant group size.
    #[error("Exploded stack size differs for urgency {urgency:?}: expected={expected} actual={actual}")]
    StackSizeMismatch {
        urgency: Option<Urgency>,
        expected: usize,
        actual: usize,
    },

    /// The stack holds a different order at some depth.
    #[error("Different order in exploded stack at depth {depth}")]
    StackMemberMismatch { depth: usize },
}
