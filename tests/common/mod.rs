//! Shared utilities for integration tests.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use nav_router::{Route, Router};

#[allow(dead_code)]
static NEXT_FILE: AtomicUsize = AtomicUsize::new(0);

/// Screens used as route payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Screen {
    Home,
    Settings,
    Profile,
}

/// Router with `/home` and `/settings/profile` registered.
#[allow(dead_code)]
pub fn screen_router() -> Router<Screen> {
    let mut router = Router::new();
    router
        .add_routes(vec![
            Route::new("/home", Screen::Home),
            Route::new("/settings/profile", Screen::Profile),
        ])
        .unwrap();
    router
}

/// Write `content` to a fresh file under the system temp dir.
#[allow(dead_code)]
pub fn write_temp_config(content: &str) -> PathBuf {
    let n = NEXT_FILE.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "nav-router-test-{}-{}.toml",
        std::process::id(),
        n
    ));
    fs::write(&path, content).unwrap();
    path
}
