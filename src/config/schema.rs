//! Configuration schema definitions.
//!
//! This module defines the route table file format.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::PathPolicy;

/// Root configuration for the navigation router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Path validation settings.
    pub paths: PathConfig,

    /// Route table, registered in order.
    pub routes: Vec<RouteConfig>,

    /// Route to navigate to once the table is registered.
    pub initial_route: Option<String>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Path validation configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PathConfig {
    /// Characters that make a path invalid wherever they appear.
    pub disallowed_chars: Vec<char>,
}

impl PathConfig {
    pub fn policy(&self) -> PathPolicy {
        PathPolicy::with_disallowed(self.disallowed_chars.iter().copied())
    }
}

/// A single route table entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Navigation path (must start with '/').
    pub path: String,

    /// Screen or component identifier this path leads to.
    pub target: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
