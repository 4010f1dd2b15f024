//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! transport + controller produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (fetch counters, latency histogram)
//!
//! Consumers:
//!     → stderr (fmt layer, filtered by RUST_LOG or config)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields, not formatted strings
//! - Request ID flows into every fetch span
//! - Metrics are cheap no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
