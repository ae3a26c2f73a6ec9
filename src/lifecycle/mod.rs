//! Batch orchestration and observability setup.
//!
//! # Main Components
//!
//! - [`OrderPipeline`] - Runs the four processor operations over a batch
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod order_pipeline;
pub mod tracing;

pub use order_pipeline::*;
pub use self::tracing::*;
