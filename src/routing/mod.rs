//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     Route { path, payload }
//!     → path.rs (validate against PathPolicy, strip trailing '/')
//!     → trie.rs (walk/create one node per code point, mark terminal)
//!     → DuplicatePath if the node was already terminal
//!
//! Navigation (at runtime):
//!     path string
//!     → path.rs (same validation and normalization)
//!     → trie.rs (exact walk, stop at first missing child)
//!     → router.rs (update current route on hit only)
//! ```
//!
//! # Design Decisions
//! - Exact matching only: no wildcards, parameters, or prefix fallback
//! - Routes are never removed or replaced once registered
//! - `Router` is single-owner; `service.rs` serializes access across tasks

pub mod error;
pub mod path;
pub mod router;
pub mod service;
pub mod trie;

pub use error::{PathViolation, RouteError};
pub use path::{normalize, PathPolicy};
pub use router::{Route, Router};
pub use service::{RouterHandle, ServiceError};
