//! Error types shared by the heap, graph and sorting layers.
//!
//! Absence is never an error in this crate: missing vertices, missing edges and
//! empty heaps are reported through `bool`, `Option` or empty collections.
//! [`GraphError`] is reserved for the cases where the caller asked for something
//! that cannot be done.

use thiserror::Error;

/// The error type for graph, heap and topological-sort operations.
///
/// # Error Categories
///
/// - [`GraphError::InvalidArgument`] - structurally invalid input, such as an
///   undirected edge request or a start vertex that is not in the graph
/// - [`GraphError::CycleDetected`] - the topological sort found a back edge
/// - [`GraphError::UnsupportedOperation`] - a bulk set operation on a heap
///
/// # Examples
///
/// ```rust
/// use heapgraph::{topological_sort, GraphError, PriorityGraph, PriorityItem};
///
/// let mut graph = PriorityGraph::new();
/// graph.add_vertex('a');
/// graph.add_vertex('b');
/// graph.add_edge(PriorityItem::new('b', 0), &'a', &'b');
/// graph.add_edge(PriorityItem::new('a', 0), &'b', &'a');
///
/// match topological_sort(&graph, &'a') {
///     Err(GraphError::CycleDetected { vertex }) => assert_eq!(vertex, "'a'"),
///     other => panic!("expected a cycle, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The request was structurally invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A back edge to a started-but-unfinished vertex was found.
    ///
    /// `vertex` is the `Debug` rendering of the vertex the back edge points to.
    #[error("graph contains a cycle through {vertex}")]
    CycleDetected {
        /// The vertex at which the cycle closed.
        vertex: String,
    },

    /// The operation is intentionally not implemented.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// `Result` alias defaulting to [`GraphError`].
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
