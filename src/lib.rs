//! Path-based navigation router.
//!
//! A trie keyed on code points maps hierarchical paths (`/settings/profile`)
//! to caller-defined payloads and tracks the currently active route.

pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::RouterConfig;
pub use routing::{PathPolicy, Route, RouteError, Router, RouterHandle};
