//! Navigation router CLI.
//!
//! Loads a route table and drives the router from the command line.
//! Command output goes to stdout, logs to stderr.
//!
//! ```text
//! nav-router --config routes.toml check
//! nav-router --config routes.toml routes
//! nav-router --config routes.toml navigate /home /settings/profile
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use nav_router::config::load_config;
use nav_router::lifecycle::build_router;
use nav_router::observability::logging::init_logging;
use nav_router::routing::{Route, RouteError, Router};

#[derive(Parser)]
#[command(name = "nav-router", version)]
#[command(about = "Inspect and exercise a navigation route table", long_about = None)]
struct Cli {
    /// Route table file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route table
    Check,
    /// Print the registered routes as JSON
    Routes,
    /// Navigate through each path in order, printing the current route
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config,
        routes = config.routes.len(),
        "nav-router starting, configuration loaded"
    );

    let mut router = build_router(&config)?;

    match cli.command {
        Commands::Check => {
            println!(
                "{}: {} routes OK, initial route {}",
                cli.config.display(),
                router.len(),
                config.initial_route.as_deref().unwrap_or("(none)")
            );
        }
        Commands::Routes => {
            let routes: Vec<&Route<String>> = router.routes().collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Navigate { paths } => {
            for path in paths {
                let step = navigate_step(&mut router, &path)?;
                println!("{}", serde_json::to_string(&step)?);
            }
        }
    }

    Ok(())
}

/// Navigate to `path` and describe the resulting state.
///
/// A missing route is logged and the walk goes on; any other error stops it.
fn navigate_step(router: &mut Router<String>, path: &str) -> Result<Value, RouteError> {
    match router.navigate(path) {
        Ok(_) => {}
        Err(e @ RouteError::PathNotFound { .. }) => {
            tracing::warn!(path = %path, error = %e, "No such route");
        }
        Err(e) => return Err(e),
    }

    Ok(json!({
        "requested": path,
        "current": router.current_route(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn router() -> Router<String> {
        let mut router = Router::new();
        router
            .add_routes(vec![
                Route::new("/home", "home_screen".to_string()),
                Route::new("/settings/profile", "profile_screen".to_string()),
            ])
            .unwrap();
        router
    }

    #[test]
    fn test_version_from_package() {
        let command = Cli::command();
        assert_eq!(command.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_navigate_step_reports_current() {
        let mut router = router();

        let step = navigate_step(&mut router, "/home").unwrap();
        assert_eq!(step["requested"], "/home");
        assert_eq!(step["current"]["payload"], "home_screen");
    }

    #[test]
    fn test_navigate_step_continues_past_missing_route() {
        let mut router = router();
        navigate_step(&mut router, "/settings/profile").unwrap();

        let step = navigate_step(&mut router, "/settings").unwrap();
        assert_eq!(step["requested"], "/settings");
        assert_eq!(step["current"]["path"], "/settings/profile");
    }

    #[test]
    fn test_navigate_step_stops_on_invalid_path() {
        let mut router = router();
        assert!(matches!(
            navigate_step(&mut router, "home"),
            Err(RouteError::InvalidPath { .. })
        ));
    }
}
