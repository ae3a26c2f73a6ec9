//! Stateless order transformations: filter, sort, group and explode.

pub mod core;
pub mod ordering;
pub mod stack;

pub use self::core::*;
pub use ordering::*;
pub use stack::*;
