//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Register routes → Navigate to initial route
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then routes, then navigation
//! - Registration is finished before the router is handed to callers

pub mod startup;

pub use startup::{build_router, start, StartupError};
