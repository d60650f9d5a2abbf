//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every route path against the configured path policy
//! - Detect routes that collide after normalization
//! - Check the initial route refers to a registered path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before any route is registered

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{normalize, RouteError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: {source}")]
    InvalidRoute { index: usize, source: RouteError },

    #[error("route #{index} ({path}) duplicates route #{first}")]
    DuplicateRoute {
        index: usize,
        first: usize,
        path: String,
    },

    #[error("route #{index} ({path}) has an empty target")]
    EmptyTarget { index: usize, path: String },

    #[error("initial route {path} is not registered")]
    UnknownInitialRoute { path: String },

    #[error("initial route: {0}")]
    InvalidInitialRoute(RouteError),

    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let policy = config.paths.policy();

    // normalized path -> index of first route registering it
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.target.trim().is_empty() {
            errors.push(ValidationError::EmptyTarget {
                index,
                path: route.path.clone(),
            });
        }

        let key = match policy.canonicalize(&route.path) {
            Ok(key) => key,
            Err(source) => {
                errors.push(ValidationError::InvalidRoute { index, source });
                continue;
            }
        };

        if let Some(&first) = seen.get(key) {
            errors.push(ValidationError::DuplicateRoute {
                index,
                first,
                path: route.path.clone(),
            });
        } else {
            seen.insert(key, index);
        }
    }

    if let Some(initial) = &config.initial_route {
        match policy.canonicalize(initial) {
            Ok(key) if !seen.contains_key(key) => {
                errors.push(ValidationError::UnknownInitialRoute {
                    path: initial.clone(),
                });
            }
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::InvalidInitialRoute(e)),
        }
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
