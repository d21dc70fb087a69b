//! Prioritized edges stored in adjacency heaps.
//!
//! Every [`PriorityItem`] carries an [`EdgeId`] drawn when it is constructed.
//! Clones share the id, so a clone handed out by a graph query names the same
//! stored edge. Two separately constructed items are different edges even if
//! their target and priority agree.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use serde::{Deserialize, Serialize};

static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a constructed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(u64);

impl EdgeId {
    fn next() -> Self {
        Self(NEXT_EDGE_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// The raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A directed edge as stored in its source vertex's adjacency heap.
///
/// The source is implicit from where the item is stored; only the target and
/// the priority are carried.
///
/// Equality and hashing follow the edge's identity, never its fields. Items
/// order by priority, then by identity (construction order), so `Ord` agrees
/// with `Eq`. The target is excluded from both since `add_edge` rewrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityItem<V> {
    priority: i32,
    target: V,
    #[serde(skip, default = "EdgeId::next")]
    id: EdgeId,
}

impl<V> PriorityItem<V> {
    /// Creates a new edge pointing at `target` with the given priority.
    pub fn new(target: V, priority: i32) -> Self {
        Self {
            priority,
            target,
            id: EdgeId::next(),
        }
    }

    /// The vertex this edge points to.
    pub fn target(&self) -> &V {
        &self.target
    }

    /// The heap ordering key.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// This edge's identity.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns true if both edges have the same target and priority,
    /// regardless of identity.
    pub fn same_value(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        self.priority == other.priority && self.target == other.target
    }

    /// Returns the same edge pointing at `target` instead.
    #[must_use]
    pub fn retarget(self, target: V) -> Self {
        Self {
            priority: self.priority,
            target,
            id: self.id,
        }
    }

    /// Splits the edge into `(target, priority)`.
    pub fn into_parts(self) -> (V, i32) {
        (self.target, self.priority)
    }
}

impl<V> PartialEq for PriorityItem<V> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<V> Eq for PriorityItem<V> {}

impl<V> Hash for PriorityItem<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<V> PartialOrd for PriorityItem<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for PriorityItem<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl<V: fmt::Display> fmt::Display for PriorityItem<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriorityItem[target={}, priority={}]", self.target, self.priority)
    }
}
