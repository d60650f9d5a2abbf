//! End-to-end registration and navigation behaviour.

use nav_router::routing::PathViolation;
use nav_router::{PathPolicy, Route, RouteError, Router};

mod common;
use common::Screen;

#[test]
fn test_settings_profile_scenario() {
    let mut router = common::screen_router();

    router.navigate("/settings/profile").unwrap();
    assert_eq!(router.current_route().unwrap().payload, Screen::Profile);

    let err = router.navigate("/settings").unwrap_err();
    assert_eq!(err, RouteError::PathNotFound { path: "/settings".into() });
    assert_eq!(router.current_route().unwrap().payload, Screen::Profile);
}

#[test]
fn test_insert_then_lookup_many_paths() {
    let paths = [
        "/",
        "/a",
        "/ab",
        "/a/b",
        "/a/b/c",
        "/settings",
        "/settings/profile",
        "/ünïcödé/パス",
    ];

    let mut router = Router::new();
    for (i, path) in paths.iter().enumerate() {
        router.add_route(Route::new(*path, i)).unwrap();
    }

    for (i, path) in paths.iter().enumerate() {
        assert_eq!(router.resolve(path).unwrap().payload, i, "path {}", path);
    }
}

#[test]
fn test_duplicate_keeps_original() {
    let mut router = Router::new();
    router.add_route(Route::new("/a/b", "first")).unwrap();

    assert_eq!(
        router.add_route(Route::new("/a/b", "second")),
        Err(RouteError::DuplicatePath { path: "/a/b".into() })
    );
    assert_eq!(router.resolve("/a/b").unwrap().payload, "first");
}

#[test]
fn test_trailing_slashes_are_equivalent() {
    let mut router = Router::new();
    router.add_route(Route::new("/a/b", "ab")).unwrap();

    for path in ["/a/b", "/a/b/", "/a/b//"] {
        assert_eq!(router.navigate(path).unwrap().payload, "ab");
    }
}

#[test]
fn test_root_is_distinct_from_empty() {
    let mut router = Router::new();
    router.add_route(Route::new("/", "root")).unwrap();

    assert_eq!(router.navigate("/").unwrap().payload, "root");
    assert_eq!(
        router.navigate(""),
        Err(RouteError::InvalidPath {
            path: String::new(),
            reason: PathViolation::MissingLeadingSlash,
        })
    );
    assert_eq!(router.current_route().unwrap().payload, "root");
}

#[test]
fn test_no_ancestor_or_descendant_fallback() {
    let mut router = Router::new();
    router.add_route(Route::new("/a/b", ())).unwrap();

    assert!(matches!(
        router.navigate("/a"),
        Err(RouteError::PathNotFound { .. })
    ));
    assert!(matches!(
        router.navigate("/a/b/c"),
        Err(RouteError::PathNotFound { .. })
    ));
    assert!(router.current_route().is_none());
}

#[test]
fn test_failed_navigation_keeps_current() {
    let mut router = common::screen_router();
    router.navigate("/home").unwrap();

    assert!(router.navigate("relative").is_err());
    assert!(router.navigate("/missing").is_err());
    assert_eq!(router.current_route().unwrap().payload, Screen::Home);
}

#[test]
fn test_disallowed_chars_reject_registration_and_navigation() {
    let mut router = Router::with_policy(PathPolicy::with_disallowed(['#']));

    assert!(matches!(
        router.add_route(Route::new("/page#top", ())),
        Err(RouteError::InvalidPath {
            reason: PathViolation::DisallowedChar('#'),
            ..
        })
    ));
    assert!(router.is_empty());

    router.add_route(Route::new("/page", ())).unwrap();
    assert!(router.navigate("/page#top").is_err());
    assert!(router.navigate("/page").is_ok());
}

#[test]
fn test_partial_batch_registration() {
    let mut router = Router::new();
    let result = router.add_routes(vec![
        Route::new("/one", 1),
        Route::new("two", 2),
        Route::new("/three", 3),
    ]);

    assert!(matches!(result, Err(RouteError::InvalidPath { .. })));
    assert!(router.contains("/one"));
    assert!(!router.contains("/three"));
    assert_eq!(router.len(), 1);
}
