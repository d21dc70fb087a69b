//! # `heapgraph` - Priority-Adjacency Directed Graphs
//!
//! A small toolkit for directed graphs whose outgoing edges live in per-vertex
//! binary min-heaps, plus a deterministic depth-first topological sort.
//!
//! ## Key Features
//!
//! - **Removable min-heap**: [`MinHeap`] supports extraction of the minimum *and*
//!   removal of an arbitrary element while keeping the heap invariant intact.
//! - **Heap-backed adjacency**: [`PriorityGraph`] stores each vertex's outgoing
//!   edges in a `MinHeap<PriorityItem<V>>`, ordered by edge priority.
//! - **Deterministic ordering**: successor enumeration follows the vertices' own
//!   `Ord`, never edge priority, so [`topological_sort`] is reproducible.
//! - **Full coverage**: the sort restarts from unfinished vertices in insertion
//!   order, so disconnected components are always included.
//!
//! ## Architecture
//!
//! 1. **Collections** (`collections`): the array-backed [`MinHeap`] and its
//!    live [`HeapCursor`].
//! 2. **Graph** (`graph`): the [`Graph`] capability trait, the
//!    [`PriorityGraph`] implementation, serde-friendly [`GraphDescription`]
//!    snapshots and the line-oriented text [`loader`](graph::loader).
//! 3. **Algorithms** (`graph::algorithms`): iterative DFS topological sort with
//!    back-edge cycle detection.
//!
//! ### Invariants
//!
//! **Heap order**: for every non-root slot of an adjacency heap, its priority is
//! at least its parent's priority, after every graph mutation.
//!
//! **No parallel edges**: a source vertex holds at most one edge per target.
//!
//! **No dangling edges**: removing a vertex removes every edge that targets it.
//!
//! ## Example
//!
//! ```rust
//! use heapgraph::{topological_sort, PriorityGraph, PriorityItem};
//!
//! let mut graph = PriorityGraph::new();
//! for v in ["shirt", "tie", "jacket"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(PriorityItem::new("tie", 2), &"shirt", &"tie");
//! graph.add_edge(PriorityItem::new("jacket", 1), &"tie", &"jacket");
//!
//! let order = topological_sort(&graph, &"shirt").unwrap();
//! assert_eq!(order, vec!["shirt", "tie", "jacket"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod collections;
pub mod error;
pub mod graph;
#[cfg(feature = "proptest")]
pub mod testing;

pub use collections::{HeapCursor, MinHeap};
pub use error::{GraphError, Result};
pub use graph::algorithms::{topological_sort, topological_sort_all};
pub use graph::{EdgeId, EdgeRecord, EdgeType, Graph, GraphDescription, GraphFactory, PriorityGraph, PriorityItem};

// Compile-time assertions for memory layout expectations
const _: () = {
    use core::mem;

    // An edge is a vertex, a 32-bit priority and a 64-bit identity; no source pointer.
    assert!(mem::size_of::<PriorityItem<u32>>() == 2 * mem::size_of::<u32>() + mem::size_of::<EdgeId>());

    // Edge type markers are a single byte.
    assert!(mem::size_of::<EdgeType>() == 1);
};
