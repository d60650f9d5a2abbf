//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router operations produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (registration and navigation counters)
//!
//! Consumers:
//!     → Log output (stdout, pretty or JSON)
//!     → Whatever metrics recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics are cheap (no-op without a recorder)

pub mod logging;
pub mod metrics;
