//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher and admin operations produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request
//! - Metrics are cheap (atomic increments) and off by default

pub mod logging;
pub mod metrics;
