//! Single-owner router task.
//!
//! # Data Flow
//! ```text
//! RouterHandle (cloned into many tasks)
//!     → mpsc command channel
//!     → router task (sole owner of Router<T>)
//!     → oneshot reply per command
//! ```
//!
//! # Design Decisions
//! - Registration finishes before `spawn`; the task only navigates and reads
//! - Commands are applied in arrival order, so navigations never interleave
//! - Replies carry cloned routes; the trie never leaves the task
//! - The task exits once every handle is dropped

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use crate::routing::error::RouteError;
use crate::routing::router::{Route, Router};

const COMMAND_BUFFER: usize = 64;

/// Errors from a [`RouterHandle`] call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("router task has stopped")]
    Closed,
}

enum Command<T> {
    Navigate {
        path: String,
        reply: oneshot::Sender<Result<Route<T>, RouteError>>,
    },
    Resolve {
        path: String,
        reply: oneshot::Sender<Result<Route<T>, RouteError>>,
    },
    Current {
        reply: oneshot::Sender<Option<Route<T>>>,
    },
}

/// Cloneable handle to a router owned by a dedicated task.
#[derive(Debug)]
pub struct RouterHandle<T> {
    tx: mpsc::Sender<Command<T>>,
}

impl<T> Clone for RouterHandle<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> RouterHandle<T>
where
    T: Clone + Send + 'static,
{
    /// Move `router` into a new task and return a handle to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(router: Router<T>) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        tokio::spawn(run(router, rx));
        Self { tx }
    }

    /// Navigate to `path`, returning the new current route.
    pub async fn navigate(&self, path: impl Into<String>) -> Result<Route<T>, ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Navigate {
            path: path.into(),
            reply,
        })
        .await?;
        Ok(rx.await.map_err(|_| ServiceError::Closed)??)
    }

    /// Look up `path` without navigating.
    pub async fn resolve(&self, path: impl Into<String>) -> Result<Route<T>, ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Resolve {
            path: path.into(),
            reply,
        })
        .await?;
        Ok(rx.await.map_err(|_| ServiceError::Closed)??)
    }

    pub async fn current_route(&self) -> Result<Option<Route<T>>, ServiceError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Current { reply }).await?;
        rx.await.map_err(|_| ServiceError::Closed)
    }

    async fn send(&self, command: Command<T>) -> Result<(), ServiceError> {
        self.tx.send(command).await.map_err(|_| ServiceError::Closed)
    }
}

async fn run<T: Clone>(mut router: Router<T>, mut rx: mpsc::Receiver<Command<T>>) {
    tracing::debug!(routes = router.len(), "Router task started");

    while let Some(command) = rx.recv().await {
        match command {
            Command::Navigate { path, reply } => {
                let result = router.navigate(&path).cloned();
                let _ = reply.send(result);
            }
            Command::Resolve { path, reply } => {
                let _ = reply.send(router.resolve(&path).cloned());
            }
            Command::Current { reply } => {
                let _ = reply.send(router.current_route().cloned());
            }
        }
    }

    tracing::debug!("Router task stopped");
}
