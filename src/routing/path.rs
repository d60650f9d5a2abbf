//! Path normalization and validation.
//!
//! # Responsibilities
//! - Collapse trailing slashes so `/a/b/` and `/a/b` share one key
//! - Reject paths without a leading `/`
//! - Reject paths containing configured disallowed characters
//!
//! # Design Decisions
//! - Normalization borrows from the input (no allocation)
//! - The root path `/` is never reduced to the empty string
//! - The disallowed set is explicit configuration, empty by default

use std::collections::HashSet;

use crate::routing::error::{PathViolation, RouteError};

/// Strip trailing `/` characters, never going below one character.
pub fn normalize(path: &str) -> &str {
    let mut path = path;
    while path.len() > 1 && path.ends_with('/') {
        path = &path[..path.len() - 1];
    }
    path
}

/// Validation rules applied to every registered and navigated path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPolicy {
    disallowed: HashSet<char>,
}

impl PathPolicy {
    /// A policy with no disallowed characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// A policy rejecting any path containing one of `chars`.
    pub fn with_disallowed<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            disallowed: chars.into_iter().collect(),
        }
    }

    /// Add a character to the disallowed set.
    pub fn disallow(&mut self, c: char) -> &mut Self {
        self.disallowed.insert(c);
        self
    }

    pub fn is_disallowed(&self, c: char) -> bool {
        self.disallowed.contains(&c)
    }

    pub fn disallowed(&self) -> impl Iterator<Item = char> + '_ {
        self.disallowed.iter().copied()
    }

    /// Check `path` against the policy.
    pub fn validate(&self, path: &str) -> Result<(), RouteError> {
        let violation = if !path.starts_with('/') {
            Some(PathViolation::MissingLeadingSlash)
        } else if self.disallowed.is_empty() {
            None
        } else {
            path.chars()
                .find(|c| self.disallowed.contains(c))
                .map(PathViolation::DisallowedChar)
        };

        match violation {
            Some(reason) => Err(RouteError::InvalidPath {
                path: path.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Validate, then normalize.
    pub fn canonicalize<'a>(&self, path: &'a str) -> Result<&'a str, RouteError> {
        self.validate(path)?;
        Ok(normalize(path))
    }
}
