//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Register the route table into a router
//! - Navigate to the configured initial route
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Routes register in file order, so errors point at the first bad entry
//! - Navigation starts only after the whole table is registered

use std::path::Path;

use thiserror::Error;

use crate::config::{load_config, ConfigError, RouterConfig};
use crate::routing::{Route, RouteError, Router};

/// Error raised while bringing a router up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Route(#[from] RouteError),
}

/// Register `config`'s route table and apply its initial route.
///
/// Payloads are the configured target names.
pub fn build_router(config: &RouterConfig) -> Result<Router<String>, RouteError> {
    let mut router = Router::with_policy(config.paths.policy());

    router.add_routes(
        config
            .routes
            .iter()
            .map(|r| Route::new(r.path.clone(), r.target.clone())),
    )?;

    if let Some(initial) = &config.initial_route {
        router.navigate(initial)?;
    }

    tracing::info!(
        routes = router.len(),
        initial_route = ?config.initial_route,
        "Route table registered"
    );
    Ok(router)
}

/// Load the config file at `path` and build a router from it.
pub fn start(path: &Path) -> Result<(RouterConfig, Router<String>), StartupError> {
    let config = load_config(path)?;
    let router = build_router(&config)?;
    Ok((config, router))
}
