//! The graph capability contract.
//!
//! [`Graph`] is the interface external graph tooling consumes: enumeration,
//! counts, containment, mutation, endpoint lookup, edge-type queries and a
//! factory for fresh instances. Implementations here are directed-only; any
//! request for an undirected edge fails with [`GraphError::InvalidArgument`].
//!
//! [`GraphError::InvalidArgument`]: crate::GraphError::InvalidArgument

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Edge directionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    /// Edges have a source and a destination.
    Directed,
    /// Edges have two interchangeable endpoints.
    Undirected,
}

impl EdgeType {
    /// Returns true if the edge type is directed.
    pub fn is_directed(self) -> bool {
        matches!(self, EdgeType::Directed)
    }
}

/// Produces fresh, empty graph instances.
///
/// Any `Fn() -> G` is a factory, so `PriorityGraph::factory()` can hand out a
/// plain function pointer.
pub trait GraphFactory {
    /// The graph type produced.
    type Output;

    /// Creates a new empty instance.
    fn create(&self) -> Self::Output;
}

impl<G, F> GraphFactory for F
where
    F: Fn() -> G,
{
    type Output = G;

    fn create(&self) -> G {
        self()
    }
}

/// Capability contract for directed graphs over vertices `V`.
pub trait Graph<V> {
    /// The stored edge type.
    type Edge;

    /// All vertices, in enumeration order.
    fn vertices(&self) -> Vec<V>;

    /// All edges.
    fn edges(&self) -> Vec<&Self::Edge>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Vertex membership test.
    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Edge membership test.
    fn contains_edge(&self, edge: &Self::Edge) -> bool;

    /// Adds a vertex; returns false if it was already present.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex and every edge touching it; returns false if absent.
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Adds a directed edge `v1 -> v2`.
    fn add_edge(&mut self, edge: Self::Edge, v1: &V, v2: &V) -> bool;

    /// Adds an edge of an explicit type.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the implementation does not support
    /// `edge_type`.
    fn add_edge_typed(&mut self, edge: Self::Edge, v1: &V, v2: &V, edge_type: EdgeType) -> Result<bool>;

    /// Removes an edge; returns false if absent.
    fn remove_edge(&mut self, edge: &Self::Edge) -> bool;

    /// `(source, destination)` of an edge, if present.
    fn endpoints(&self, edge: &Self::Edge) -> Option<(V, V)>;

    /// Source vertex of an edge, if present.
    fn source(&self, edge: &Self::Edge) -> Option<V> {
        self.endpoints(edge).map(|(source, _)| source)
    }

    /// Destination vertex of an edge, if present.
    fn dest(&self, edge: &Self::Edge) -> Option<V> {
        self.endpoints(edge).map(|(_, dest)| dest)
    }

    /// Vertices reachable by one outgoing edge.
    fn successors(&self, vertex: &V) -> Vec<V>;

    /// Vertices with an edge into `vertex`.
    fn predecessors(&self, vertex: &V) -> Vec<V>;

    /// Type of the given edge.
    fn edge_type(&self, edge: &Self::Edge) -> EdgeType;

    /// Type assigned to edges added without an explicit type.
    fn default_edge_type(&self) -> EdgeType;

    /// Returns a factory for fresh, empty instances.
    fn factory() -> fn() -> Self
    where
        Self: Default + Sized,
    {
        Self::default
    }
}
