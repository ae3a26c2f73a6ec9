//! # Order Triage
//!
//! > **Zone and urgency triage for delivery orders.**
//!
//! This crate derives two attributes for every delivery [`Order`](model::Order) and offers
//! four pure, in-memory transformations over collections of orders.
//!
//! ## 🏗️ Design Philosophy
//!
//! - **Derived, never stored**: `zone` and `urgency` are recomputed from the raw fields on
//!   every call, so they can never go stale.
//! - **Borrow, don't copy**: every operation returns references into the caller's orders
//!   and never mutates them.
//! - **Fail the whole batch**: a malformed postal code aborts the operation that read it;
//!   there are no partial results.
//!
//! ## 🚀 Core Concepts
//!
//! ### Zone
//! The integer after the `-` of a postal code (`"X-080"` is zone 80). Reading it from a
//! malformed code fails with [`FormatError`](model::FormatError).
//!
//! ### Urgency
//! The sum of the priorities divisible by 3, times the number of distinct vowels in the
//! customer name (case-insensitive). It never fails.
//!
//! ### Dominant group
//! The urgency group with the most members, ties going to the higher urgency.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! - **Key items**: [`Order`](model::Order), [`OrderCreate`](model::OrderCreate).
//!
//! ### 2. The Engine ([`processor`])
//! - **Role**: Filtering, sorting, grouping and exploding collections of orders.
//! - **Key items**: [`OrderProcessor`](processor::OrderProcessor),
//!   [`OrderStack`](processor::OrderStack), [`UrgencyGroups`](processor::UrgencyGroups).
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - **Role**: Runs the whole processor over a batch and sets up tracing.
//! - **Key items**: [`OrderPipeline`](lifecycle::OrderPipeline), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 4. The Checks ([`validation`])
//! - **Role**: Recomputes derived fields and results independently to confirm them.
//!
//! ### 5. The Input ([`config`])
//! - **Role**: Loads a batch of orders and its settings from JSON.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Built-in demo batch
//! RUST_LOG=info cargo run
//!
//! # Your own batch
//! RUST_LOG=info cargo run -- batch.json
//! ```

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod processor;
pub mod validation;
