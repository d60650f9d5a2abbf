//! Routing error types.

use thiserror::Error;

/// Why a path failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathViolation {
    #[error("path must start with '/'")]
    MissingLeadingSlash,

    #[error("path contains disallowed character {0:?}")]
    DisallowedChar(char),
}

/// Errors returned by route registration and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The path is structurally invalid. Fix the caller, don't retry.
    #[error("path is invalid: {path} ({reason})")]
    InvalidPath { path: String, reason: PathViolation },

    /// The normalized path is already registered.
    #[error("path already exists: {path}")]
    DuplicatePath { path: String },

    /// No route is registered at exactly this normalized path.
    #[error("path not found: {path}")]
    PathNotFound { path: String },
}

impl RouteError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteError::InvalidPath { .. } => "invalid_path",
            RouteError::DuplicatePath { .. } => "duplicate_path",
            RouteError::PathNotFound { .. } => "path_not_found",
        }
    }
}
