//! The [`Order`] entity and its creation payload.

use crate::model::FormatError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Integer suffix of a postal code.
pub type Zone = u32;

/// Derived priority score of an order.
pub type Urgency = i64;

const ZONE_SEPARATOR: char = '-';
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Represents a delivery order.
///
/// Raw fields are owned by the order; `zone` and `urgency` are derived on
/// every call from the current raw state and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    customer: String,
    postal_code: String,
    priorities: Vec<i64>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: String,
    pub postal_code: String,
    #[serde(default)]
    pub priorities: Vec<i64>,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `customer` - Customer name, compared case-insensitively
    /// * `postal_code` - Postal code in `<prefix>-<zone>` form
    /// * `priorities` - Priority values, may be empty or repeat
    ///
    /// # Notes
    /// The postal code is not validated here; a malformed code only surfaces
    /// when [`Order::zone`] is evaluated.
    pub fn new(
        customer: impl Into<String>,
        postal_code: impl Into<String>,
        priorities: Vec<i64>,
    ) -> Self {
        Self {
            customer: customer.into(),
            postal_code: postal_code.into(),
            priorities,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) {
        self.postal_code = postal_code.into();
    }

    pub fn priorities(&self) -> &[i64] {
        &self.priorities
    }

    pub fn set_priorities(&mut self, priorities: Vec<i64>) {
        self.priorities = priorities;
    }

    /// Parses the zone from the segment after the single `-` of the postal code.
    ///
    /// Leading zeros are accepted (`"X-080"` is zone 80).
    ///
    /// # Errors
    /// Returns [`FormatError`] if the separator is missing or repeated, or if
    /// the trailing segment is not a run of ASCII digits that fits a [`Zone`].
    pub fn zone(&self) -> Result<Zone, FormatError> {
        let mut parts = self.postal_code.split(ZONE_SEPARATOR);
        let (Some(_prefix), Some(segment)) = (parts.next(), parts.next()) else {
            return Err(FormatError::MissingSeparator(self.postal_code.clone()));
        };
        if parts.next().is_some() {
            return Err(FormatError::MultipleSeparators(self.postal_code.clone()));
        }

        let invalid = || FormatError::InvalidZone {
            postal_code: self.postal_code.clone(),
            segment: segment.to_string(),
        };
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        segment.parse::<Zone>().map_err(|_| invalid())
    }

    /// Sum of priorities divisible by 3 times the number of distinct vowels
    /// in the lowercased customer name.
    ///
    /// Arithmetic wraps on overflow, so this never panics.
    pub fn urgency(&self) -> Urgency {
        let multiples_of_three = self
            .priorities
            .iter()
            .filter(|p| *p % 3 == 0)
            .fold(0i64, |acc, p| acc.wrapping_add(*p));
        multiples_of_three.wrapping_mul(self.distinct_vowels() as i64)
    }

    fn distinct_vowels(&self) -> usize {
        self.customer
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| VOWELS.contains(c))
            .collect::<BTreeSet<_>>()
            .len()
    }
}

impl From<OrderCreate> for Order {
    fn from(params: OrderCreate) -> Self {
        Self::new(params.customer, params.postal_code, params.priorities)
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order{{customer='{}', zone=", self.customer)?;
        match self.zone() {
            Ok(zone) => write!(f, "{}", zone)?,
            Err(_) => write!(f, "?")?,
        }
        write!(f, ", urgency={}}}", self.urgency())
    }
}
