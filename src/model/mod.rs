//! Order data and its derived fields.

pub mod error;
pub mod order;

pub use error::*;
pub use order::*;
