//! Error types for derived order fields.

use thiserror::Error;

/// Errors raised when a postal code cannot yield a zone.
///
/// Raised lazily by [`Order::zone`](crate::model::Order::zone), never at construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The postal code has no `-` separator.
    #[error("Postal code has no zone separator: {0:?}")]
    MissingSeparator(String),

    /// The postal code has more than one `-` separator.
    #[error("Postal code has more than one zone separator: {0:?}")]
    MultipleSeparators(String),

    /// The segment after the separator is not a non-negative integer literal.
    #[error("Invalid zone segment {segment:?} in postal code {postal_code:?}")]
    InvalidZone { postal_code: String, segment: String },
}
