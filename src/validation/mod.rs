//! Validators that recompute derived fields and processor results from raw
//! order data, for use by callers and tests that need to confirm a result.

pub mod checks;
pub mod error;

pub use checks::*;
pub use error::*;
