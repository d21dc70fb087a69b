//! Plain, serializable graph snapshots.
//!
//! A [`GraphDescription`] is what the text loader produces and what
//! [`PriorityGraph::to_description`](crate::PriorityGraph::to_description)
//! emits. It carries no invariants of its own; building a `PriorityGraph` from
//! it applies the graph's usual rules (duplicates and dangling edges are
//! dropped).

use serde::{Deserialize, Serialize};

/// One `source -> target` edge with its priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord<V> {
    /// Edge source.
    pub source: V,
    /// Edge target.
    pub target: V,
    /// Heap ordering key.
    pub priority: i32,
}

/// Vertices in insertion order plus a flat edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription<V> {
    /// Vertices, in the order they should be added.
    pub vertices: Vec<V>,
    /// Edges, in the order they should be added.
    pub edges: Vec<EdgeRecord<V>>,
}

impl<V> GraphDescription<V> {
    /// An empty description.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Encodes the description as JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> serde_json::Result<String>
    where
        V: Serialize,
    {
        serde_json::to_string_pretty(self)
    }

    /// Decodes a description from JSON.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json<'de>(input: &'de str) -> serde_json::Result<Self>
    where
        V: Deserialize<'de>,
    {
        serde_json::from_str(input)
    }
}

impl<V> Default for GraphDescription<V> {
    fn default() -> Self {
        Self::new()
    }
}
