//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Every [`OrderProcessor`](crate::processor::OrderProcessor) operation runs in its own span,
//! so pipeline output shows which step produced each line.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Result sizes per step
//! RUST_LOG=info cargo run
//!
//! # Full input payloads and collapsed ties
//! RUST_LOG=debug cargo run
//!
//! # Filter to the processor only
//! RUST_LOG=order_triage::processor=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO run:filter_by_zone_threshold: Filtered by zone threshold=50 scanned=2 kept=2
//! INFO run:sort_by_zone_then_customer: Sorted by zone then customer scanned=2 sorted=2
//! INFO run:group_by_urgency: Grouped by urgency groups=1
//! INFO run:explode_dominant_group: Exploded dominant group urgency=9 size=2
//! INFO run: Pipeline finished summary=filtered=2 sorted=2 groups=1 dominant_urgency=9 exploded=2
//! ```
//!
//! The library never installs a subscriber itself; only the binary calls [`setup_tracing`].
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Span names already identify the step
        .compact()
        .init();
}
