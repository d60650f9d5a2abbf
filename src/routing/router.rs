//! Route registration and navigation.
//!
//! # Responsibilities
//! - Own the route trie and the current-route slot
//! - Register routes (single or batch)
//! - Navigate to a path and track the active route
//!
//! # Design Decisions
//! - The current route is an index into the trie's storage (no second copy)
//! - Failed navigation leaves the current route untouched
//! - Batch registration stops at the first error, no rollback
//! - Mutation requires `&mut self`; sharing across tasks goes through `RouterHandle`

use serde::Serialize;

use crate::observability::metrics;
use crate::routing::error::RouteError;
use crate::routing::path::PathPolicy;
use crate::routing::trie::{EntryId, Trie};

/// A registered destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<T> {
    /// Path exactly as supplied at registration.
    pub path: String,

    /// Caller-defined value. The router never inspects it.
    pub payload: T,
}

impl<T> Route<T> {
    pub fn new(path: impl Into<String>, payload: T) -> Self {
        Self {
            path: path.into(),
            payload,
        }
    }
}

/// Navigation router over a static route table.
#[derive(Debug)]
pub struct Router<T> {
    trie: Trie<Route<T>>,
    current: Option<EntryId>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Create an empty router with no disallowed characters.
    pub fn new() -> Self {
        Self::with_policy(PathPolicy::default())
    }

    /// Create an empty router validating paths against `policy`.
    pub fn with_policy(policy: PathPolicy) -> Self {
        Self {
            trie: Trie::new(policy),
            current: None,
        }
    }

    pub fn policy(&self) -> &PathPolicy {
        self.trie.policy()
    }

    /// Register a route. Does not change the current route.
    pub fn add_route(&mut self, route: Route<T>) -> Result<(), RouteError> {
        let result = self
            .trie
            .reserve(&route.path)
            .map(|slot| self.trie.attach(slot, route));

        metrics::record_registration(metrics::outcome(&result));
        match result {
            Ok(id) => {
                metrics::record_route_count(self.trie.len());
                tracing::debug!(path = %self.trie.entry(id).path, "Route registered");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Route rejected");
                Err(e)
            }
        }
    }

    /// Register routes in order, stopping at the first failure.
    ///
    /// Routes inserted before the failure stay registered.
    pub fn add_routes<I>(&mut self, routes: I) -> Result<(), RouteError>
    where
        I: IntoIterator<Item = Route<T>>,
    {
        for route in routes {
            self.add_route(route)?;
        }
        Ok(())
    }

    /// Make the route at `path` current.
    ///
    /// On failure the current route is left unchanged.
    pub fn navigate(&mut self, path: &str) -> Result<&Route<T>, RouteError> {
        let result = self.trie.lookup(path);
        metrics::record_navigation(metrics::outcome(&result));

        let id = match result {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!(path = %path, error = %e, "Navigation failed");
                return Err(e);
            }
        };

        self.current = Some(id);
        tracing::debug!(path = %path, "Navigated");
        Ok(self.trie.entry(id))
    }

    /// The route registered at `path`, without navigating to it.
    pub fn resolve(&self, path: &str) -> Result<&Route<T>, RouteError> {
        let id = self.trie.lookup(path)?;
        Ok(self.trie.entry(id))
    }

    /// The active route, if any navigation has succeeded.
    pub fn current_route(&self) -> Option<&Route<T>> {
        self.current.and_then(|id| self.trie.get(id))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.trie.lookup(path).is_ok()
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route<T>> {
        self.trie.values()
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
