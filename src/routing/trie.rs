//! Code-point trie for exact path matching.
//!
//! # Responsibilities
//! - Store one node per code point per distinct path prefix
//! - Attach a value to the node where a registered path ends
//! - Exact-match lookup with early termination
//!
//! # Design Decisions
//! - Nodes live in an arena (`Vec<Node>`) and refer to children by index
//! - Values live in a second arena, in insertion order
//! - Lookup cost is bounded by path length, not by the number of routes
//! - No prefix, ancestor or descendant fallback

use std::collections::HashMap;

use crate::routing::error::RouteError;
use crate::routing::path::PathPolicy;

type NodeId = usize;

const ROOT: NodeId = 0;

/// Handle to a value stored in a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

/// A free terminal position found by [`Trie::reserve`].
#[derive(Debug)]
pub(crate) struct Slot(NodeId);

#[derive(Debug, Default)]
struct Node {
    /// Set iff a registered path ends at this node.
    entry: Option<EntryId>,
    children: HashMap<char, NodeId>,
}

impl Node {
    fn is_terminal(&self) -> bool {
        self.entry.is_some()
    }
}

/// Trie mapping validated, normalized paths to values.
#[derive(Debug)]
pub struct Trie<V> {
    policy: PathPolicy,
    nodes: Vec<Node>,
    entries: Vec<V>,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new(PathPolicy::default())
    }
}

impl<V> Trie<V> {
    /// Create an empty trie (root node only).
    pub fn new(policy: PathPolicy) -> Self {
        Self {
            policy,
            nodes: vec![Node::default()],
            entries: Vec::new(),
        }
    }

    pub fn policy(&self) -> &PathPolicy {
        &self.policy
    }

    /// Register `value` at `path`.
    ///
    /// Fails with `InvalidPath` if the path breaks the policy and with
    /// `DuplicatePath` if the normalized path is already registered. Shared
    /// prefixes reuse existing nodes.
    pub fn insert(&mut self, path: &str, value: V) -> Result<EntryId, RouteError> {
        let slot = self.reserve(path)?;
        Ok(self.attach(slot, value))
    }

    /// Walk to the node for `path`, creating missing nodes, and check it is free.
    ///
    /// The returned slot must be passed to [`Trie::attach`] before any other insert.
    pub(crate) fn reserve(&mut self, path: &str) -> Result<Slot, RouteError> {
        let key = self.policy.canonicalize(path)?;

        let mut node = ROOT;
        for c in key.chars() {
            let existing = self.nodes[node].children.get(&c).copied();
            node = match existing {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
        }

        if self.nodes[node].is_terminal() {
            return Err(RouteError::DuplicatePath {
                path: path.to_string(),
            });
        }

        Ok(Slot(node))
    }

    /// Store `value` at a slot returned by [`Trie::reserve`].
    pub(crate) fn attach(&mut self, slot: Slot, value: V) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(value);
        self.nodes[slot.0].entry = Some(id);
        id
    }

    /// Find the entry registered at exactly `path`.
    pub fn lookup(&self, path: &str) -> Result<EntryId, RouteError> {
        let key = self.policy.canonicalize(path)?;

        let mut node = ROOT;
        for c in key.chars() {
            match self.nodes[node].children.get(&c) {
                Some(&child) => node = child,
                None => return Err(not_found(key)),
            }
        }

        self.nodes[node].entry.ok_or_else(|| not_found(key))
    }

    pub fn get(&self, id: EntryId) -> Option<&V> {
        self.entries.get(id.0)
    }

    /// Ids only come from this trie and entries are never removed.
    pub(crate) fn entry(&self, id: EntryId) -> &V {
        &self.entries[id.0]
    }

    /// Values in insertion order.
    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total node count, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

fn not_found(key: &str) -> RouteError {
    RouteError::PathNotFound {
        path: key.to_string(),
    }
}
