//! A directed graph whose adjacency lists are binary min-heaps.
//!
//! Each vertex owns one [`MinHeap`] of [`PriorityItem`]s as its outgoing-edge
//! set, ordered by edge priority. Two orderings are deliberately kept apart:
//! - **storage order** inside a heap follows edge priority;
//! - **successor enumeration** ([`PriorityGraph::successors`]) follows the
//!   vertices' own `Ord`, so traversals never depend on priorities.
//!
//! Vertices enumerate in insertion order, independent of `Ord`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::collections::MinHeap;
use crate::error::{GraphError, Result};
use crate::graph::basic::description::{EdgeRecord, GraphDescription};
use crate::graph::basic::{EdgeId, PriorityItem};
use crate::graph::contract::{EdgeType, Graph};

/// A vertex together with its adjacency heap.
#[derive(Clone)]
struct VertexEntry<V> {
    vertex: V,
    heap: MinHeap<PriorityItem<V>>,
}

/// A directed graph with heap-ordered adjacency.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends entry, indexes it |
/// | `remove_vertex` | \(O(n + m)\) | Scans every heap for incoming edges |
/// | `add_edge` | \(O(\text{out-degree})\) | Parallel-edge scan, then heap insert |
/// | `remove_edge` | \(O(m)\) | Scans every heap |
/// | `successors` | \(O(d \log d)\) | Sorted by vertex order |
/// | `predecessors` | \(O(n + m)\) | Scans every heap |
///
/// # Example
///
/// ```rust
/// use heapgraph::{PriorityGraph, PriorityItem};
///
/// let mut graph = PriorityGraph::new();
/// for v in ["A", "B", "C"] {
///     graph.add_vertex(v);
/// }
/// graph.add_edge(PriorityItem::new("C", 1), &"A", &"C");
/// graph.add_edge(PriorityItem::new("B", 9), &"A", &"B");
///
/// // Vertex order, not priority order.
/// assert_eq!(graph.successors(&"A"), vec!["B", "C"]);
/// // The heap still hands out the lowest priority first.
/// assert_eq!(graph.min_edge(&"A").map(|e| e.priority()), Some(1));
/// ```
#[derive(Clone)]
pub struct PriorityGraph<V> {
    entries: Vec<VertexEntry<V>>,
    index: HashMap<V, usize>,
    /// Identities of every stored edge.
    edge_ids: HashSet<EdgeId>,
}

impl<V> PriorityGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            edge_ids: HashSet::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.heap.len()).sum()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over vertices in insertion order.
    pub fn vertex_iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|entry| &entry.vertex)
    }

    /// Iterates over `(source, edge)` pairs, sources in insertion order and
    /// edges in heap storage order.
    pub fn edge_iter(&self) -> impl Iterator<Item = (&V, &PriorityItem<V>)> + '_ {
        self.entries
            .iter()
            .flat_map(|entry| entry.heap.iter().map(move |edge| (&entry.vertex, edge)))
    }

    /// Returns a factory producing fresh, empty graphs.
    pub fn factory() -> fn() -> Self {
        Self::new
    }

    /// The edge type of every edge in this graph.
    pub fn default_edge_type(&self) -> EdgeType {
        EdgeType::Directed
    }
}

impl<V> PriorityGraph<V>
where
    V: Eq + Hash + Ord + Clone,
{
    fn heap(&self, vertex: &V) -> Option<&MinHeap<PriorityItem<V>>> {
        self.index.get(vertex).map(|&idx| &self.entries[idx].heap)
    }

    /// Returns true if `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns true if some vertex stores `edge` (by identity).
    pub fn contains_edge(&self, edge: &PriorityItem<V>) -> bool {
        self.edge_ids.contains(&edge.id())
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.vertex_iter().cloned().collect()
    }

    /// All edges, sources in insertion order and edges in heap storage order.
    pub fn edges(&self) -> Vec<&PriorityItem<V>> {
        self.edge_iter().map(|(_, edge)| edge).collect()
    }

    /// Adds a vertex with an empty adjacency heap.
    ///
    /// Returns false without effect if the vertex is already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        let idx = self.entries.len();
        self.index.insert(vertex.clone(), idx);
        self.entries.push(VertexEntry {
            vertex,
            heap: MinHeap::new(),
        });
        trace_event!(trace, index = idx, "vertex added");
        true
    }

    /// Adds the directed edge `v1 -> v2`.
    ///
    /// The stored edge is `edge` retargeted at `v2`. Returns false without
    /// effect if either vertex is absent, `v1` already has an edge to `v2`, or
    /// this very edge (or a clone of it) is already stored.
    pub fn add_edge(&mut self, edge: PriorityItem<V>, v1: &V, v2: &V) -> bool {
        if !self.index.contains_key(v2) || self.edge_ids.contains(&edge.id()) {
            return false;
        }
        let Some(&idx) = self.index.get(v1) else {
            return false;
        };
        let heap = &mut self.entries[idx].heap;
        if heap.iter().any(|existing| existing.target() == v2) {
            return false;
        }
        let edge = edge.retarget(v2.clone());
        trace_event!(trace, source = idx, priority = edge.priority(), "edge added");
        self.edge_ids.insert(edge.id());
        heap.insert(edge);
        true
    }

    /// Adds an edge of an explicit type.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] for [`EdgeType::Undirected`].
    pub fn add_edge_typed(&mut self, edge: PriorityItem<V>, v1: &V, v2: &V, edge_type: EdgeType) -> Result<bool> {
        if !edge_type.is_directed() {
            return Err(GraphError::InvalidArgument(
                "undirected edges are not supported".into(),
            ));
        }
        Ok(self.add_edge(edge, v1, v2))
    }

    /// Adds an edge between the two vertices in `vertices`.
    ///
    /// Returns false unless exactly two vertices are given.
    pub fn add_edge_between(&mut self, edge: PriorityItem<V>, vertices: &[V]) -> bool {
        match vertices {
            [v1, v2] => self.add_edge(edge, v1, v2),
            _ => false,
        }
    }

    /// Typed variant of [`PriorityGraph::add_edge_between`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] for [`EdgeType::Undirected`]
    /// when exactly two vertices are given.
    pub fn add_edge_between_typed(
        &mut self,
        edge: PriorityItem<V>,
        vertices: &[V],
        edge_type: EdgeType,
    ) -> Result<bool> {
        match vertices {
            [v1, v2] => self.add_edge_typed(edge, v1, v2, edge_type),
            _ => Ok(false),
        }
    }

    /// Removes a vertex, its outgoing edges, and every edge targeting it.
    ///
    /// Returns false if the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(idx) = self.index.remove(vertex) else {
            return false;
        };
        let removed = self.entries.remove(idx);
        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        for edge in &removed.heap {
            self.edge_ids.remove(&edge.id());
        }

        let mut cascaded = 0;
        for entry in &mut self.entries {
            for edge in entry.heap.remove_where(|edge| edge.target() == vertex) {
                self.edge_ids.remove(&edge.id());
                cascaded += 1;
            }
        }
        debug_assert!(
            cascaded <= self.entries.len(),
            "a source holds at most one edge per target"
        );
        trace_event!(debug, index = idx, cascaded, "vertex removed");
        true
    }

    /// Removes the stored edge with the same identity as `edge`.
    ///
    /// Returns false if it is not stored. Another edge with an equal target
    /// and priority is never touched.
    pub fn remove_edge(&mut self, edge: &PriorityItem<V>) -> bool {
        if !self.edge_ids.remove(&edge.id()) {
            return false;
        }
        let removed = self.entries.iter_mut().any(|entry| entry.heap.remove(edge));
        debug_assert!(removed, "edge id index out of sync with heaps");
        removed
    }

    /// Targets of `vertex`'s outgoing edges, sorted by vertex order.
    ///
    /// Empty if the vertex is absent.
    pub fn successors(&self, vertex: &V) -> Vec<V> {
        let Some(heap) = self.heap(vertex) else {
            return Vec::new();
        };
        let mut successors: Vec<V> = heap.iter().map(|edge| edge.target().clone()).collect();
        successors.sort();
        successors
    }

    /// Sources of edges targeting `vertex`, in insertion order.
    pub fn predecessors(&self, vertex: &V) -> Vec<V> {
        self.entries
            .iter()
            .filter(|entry| entry.heap.iter().any(|edge| edge.target() == vertex))
            .map(|entry| entry.vertex.clone())
            .collect()
    }

    /// The edge `v1 -> v2`, if present.
    pub fn find_edge(&self, v1: &V, v2: &V) -> Option<&PriorityItem<V>> {
        self.heap(v1)?.iter().find(|edge| edge.target() == v2)
    }

    /// The edge `v1 -> v2` as a zero- or one-element set.
    pub fn find_edge_set(&self, v1: &V, v2: &V) -> Vec<&PriorityItem<V>> {
        self.find_edge(v1, v2).into_iter().collect()
    }

    /// The lowest-priority outgoing edge of `vertex`.
    pub fn min_edge(&self, vertex: &V) -> Option<&PriorityItem<V>> {
        self.heap(vertex)?.peek_min()
    }

    /// `(source, target)` of a stored edge.
    ///
    /// The source is recovered by finding the heap that holds this very edge.
    /// The target is read from the stored copy, so a handle whose target was
    /// rewritten by `add_edge` still reports the real destination.
    pub fn endpoints(&self, edge: &PriorityItem<V>) -> Option<(V, V)> {
        if !self.contains_edge(edge) {
            return None;
        }
        self.entries.iter().find_map(|entry| {
            entry
                .heap
                .iter()
                .find(|stored| *stored == edge)
                .map(|stored| (entry.vertex.clone(), stored.target().clone()))
        })
    }

    /// Source vertex of a stored edge.
    pub fn source(&self, edge: &PriorityItem<V>) -> Option<V> {
        self.endpoints(edge).map(|(source, _)| source)
    }

    /// Destination vertex of a stored edge.
    pub fn dest(&self, edge: &PriorityItem<V>) -> Option<V> {
        self.endpoints(edge).map(|(_, dest)| dest)
    }

    /// Returns true if `vertex` is the source of the stored `edge`.
    pub fn is_source(&self, vertex: &V, edge: &PriorityItem<V>) -> bool {
        self.source(edge).as_ref() == Some(vertex)
    }

    /// Returns true if `vertex` is the destination of the stored `edge`.
    pub fn is_dest(&self, vertex: &V, edge: &PriorityItem<V>) -> bool {
        self.dest(edge).as_ref() == Some(vertex)
    }

    /// The endpoint of `edge` that is not `vertex`.
    pub fn opposite(&self, vertex: &V, edge: &PriorityItem<V>) -> Option<V> {
        let (source, dest) = self.endpoints(edge)?;
        if &source == vertex {
            Some(dest)
        } else {
            Some(source)
        }
    }

    /// Both endpoints of a stored edge, or an empty vector if it is absent.
    pub fn incident_vertices(&self, edge: &PriorityItem<V>) -> Vec<V> {
        match self.endpoints(edge) {
            Some((source, dest)) => vec![source, dest],
            None => Vec::new(),
        }
    }

    /// Number of vertices incident to any edge.
    pub fn incident_count(&self, _edge: &PriorityItem<V>) -> usize {
        2
    }

    /// Edges into `vertex`, one per predecessor.
    pub fn in_edges(&self, vertex: &V) -> Vec<&PriorityItem<V>> {
        self.predecessors(vertex)
            .iter()
            .filter_map(|pred| self.find_edge(pred, vertex))
            .collect()
    }

    /// Edges out of `vertex`, in successor order.
    pub fn out_edges(&self, vertex: &V) -> Vec<&PriorityItem<V>> {
        self.successors(vertex)
            .iter()
            .filter_map(|succ| self.find_edge(vertex, succ))
            .collect()
    }

    /// In-edges followed by out-edges.
    pub fn incident_edges(&self, vertex: &V) -> Vec<&PriorityItem<V>> {
        let mut edges = self.in_edges(vertex);
        edges.extend(self.out_edges(vertex));
        edges
    }

    /// Returns true if `edge` touches `vertex`.
    pub fn is_incident(&self, vertex: &V, edge: &PriorityItem<V>) -> bool {
        self.incident_edges(vertex).into_iter().any(|e| e == edge)
    }

    /// Returns true if `v2` is a successor of `v1`.
    pub fn is_successor(&self, v1: &V, v2: &V) -> bool {
        self.successors(v1).contains(v2)
    }

    /// Returns true if `v2` is a predecessor of `v1`.
    pub fn is_predecessor(&self, v1: &V, v2: &V) -> bool {
        self.predecessors(v1).contains(v2)
    }

    /// Returns true if there is an edge `v1 -> v2`.
    pub fn is_neighbor(&self, v1: &V, v2: &V) -> bool {
        self.find_edge(v1, v2).is_some()
    }

    /// Predecessors followed by successors.
    ///
    /// A vertex joined in both directions appears twice.
    pub fn neighbors(&self, vertex: &V) -> Vec<V> {
        let mut neighbors = self.predecessors(vertex);
        neighbors.extend(self.successors(vertex));
        neighbors
    }

    /// Length of [`PriorityGraph::neighbors`].
    pub fn neighbor_count(&self, vertex: &V) -> usize {
        self.neighbors(vertex).len()
    }

    /// Number of edges into `vertex`.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.in_edges(vertex).len()
    }

    /// Number of edges out of `vertex`.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.out_edges(vertex).len()
    }

    /// In-degree plus out-degree; a self-loop counts twice.
    pub fn degree(&self, vertex: &V) -> usize {
        self.in_degree(vertex) + self.out_degree(vertex)
    }

    /// Alias of [`PriorityGraph::in_degree`].
    pub fn predecessor_count(&self, vertex: &V) -> usize {
        self.in_degree(vertex)
    }

    /// Alias of [`PriorityGraph::out_degree`].
    pub fn successor_count(&self, vertex: &V) -> usize {
        self.out_degree(vertex)
    }

    /// The type of a stored edge.
    pub fn edge_type(&self, _edge: &PriorityItem<V>) -> EdgeType {
        EdgeType::Directed
    }

    /// Edges of the given type; empty for [`EdgeType::Undirected`].
    pub fn edges_of_type(&self, edge_type: EdgeType) -> Vec<&PriorityItem<V>> {
        if edge_type.is_directed() {
            self.edges()
        } else {
            Vec::new()
        }
    }

    /// Edge count for the given type; zero for [`EdgeType::Undirected`].
    pub fn edge_count_of_type(&self, edge_type: EdgeType) -> usize {
        if edge_type.is_directed() {
            self.edge_count()
        } else {
            0
        }
    }

    /// Builds a graph from a description.
    ///
    /// Vertices are added in order, then edges; duplicate vertices and edges
    /// that `add_edge` refuses are skipped.
    pub fn from_description(description: GraphDescription<V>) -> Self {
        let mut graph = Self::new();
        for vertex in description.vertices {
            graph.add_vertex(vertex);
        }
        for EdgeRecord { source, target, priority } in description.edges {
            let edge = PriorityItem::new(target.clone(), priority);
            graph.add_edge(edge, &source, &target);
        }
        graph
    }

    /// Snapshots the graph: vertices in insertion order, each vertex's edges
    /// in successor order.
    pub fn to_description(&self) -> GraphDescription<V> {
        let mut description = GraphDescription::new();
        for vertex in self.vertex_iter() {
            description.vertices.push(vertex.clone());
            for edge in self.out_edges(vertex) {
                description.edges.push(EdgeRecord {
                    source: vertex.clone(),
                    target: edge.target().clone(),
                    priority: edge.priority(),
                });
            }
        }
        description
    }

    /// Checks the heap invariant of every adjacency heap, the absence of
    /// dangling and parallel edges, and that each stored edge is indexed once.
    pub fn validate_invariants(&self) -> bool {
        self.entries.iter().all(|entry| {
            let mut targets: Vec<&V> = entry.heap.iter().map(PriorityItem::target).collect();
            let count = targets.len();
            targets.sort();
            targets.dedup();
            entry.heap.validate_invariants()
                && targets.len() == count
                && targets.iter().all(|target| self.index.contains_key(*target))
        }) && self
            .entries
            .iter()
            .enumerate()
            .all(|(idx, entry)| self.index.get(&entry.vertex) == Some(&idx))
            && self.edge_ids.len() == self.edge_count()
            && self.edge_iter().all(|(_, edge)| self.edge_ids.contains(&edge.id()))
    }
}

impl<V> Default for PriorityGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<GraphDescription<V>> for PriorityGraph<V>
where
    V: Eq + Hash + Ord + Clone,
{
    fn from(description: GraphDescription<V>) -> Self {
        Self::from_description(description)
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for PriorityGraph<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for entry in &self.entries {
            map.entry(&entry.vertex, &entry.heap.iter().collect::<Vec<_>>());
        }
        map.finish()
    }
}

impl<V> Graph<V> for PriorityGraph<V>
where
    V: Eq + Hash + Ord + Clone,
{
    type Edge = PriorityItem<V>;

    fn vertices(&self) -> Vec<V> {
        PriorityGraph::vertices(self)
    }

    fn edges(&self) -> Vec<&PriorityItem<V>> {
        PriorityGraph::edges(self)
    }

    fn vertex_count(&self) -> usize {
        PriorityGraph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        PriorityGraph::edge_count(self)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        PriorityGraph::contains_vertex(self, vertex)
    }

    fn contains_edge(&self, edge: &PriorityItem<V>) -> bool {
        PriorityGraph::contains_edge(self, edge)
    }

    fn add_vertex(&mut self, vertex: V) -> bool {
        PriorityGraph::add_vertex(self, vertex)
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        PriorityGraph::remove_vertex(self, vertex)
    }

    fn add_edge(&mut self, edge: PriorityItem<V>, v1: &V, v2: &V) -> bool {
        PriorityGraph::add_edge(self, edge, v1, v2)
    }

    fn add_edge_typed(&mut self, edge: PriorityItem<V>, v1: &V, v2: &V, edge_type: EdgeType) -> Result<bool> {
        PriorityGraph::add_edge_typed(self, edge, v1, v2, edge_type)
    }

    fn remove_edge(&mut self, edge: &PriorityItem<V>) -> bool {
        PriorityGraph::remove_edge(self, edge)
    }

    fn endpoints(&self, edge: &PriorityItem<V>) -> Option<(V, V)> {
        PriorityGraph::endpoints(self, edge)
    }

    fn successors(&self, vertex: &V) -> Vec<V> {
        PriorityGraph::successors(self, vertex)
    }

    fn predecessors(&self, vertex: &V) -> Vec<V> {
        PriorityGraph::predecessors(self, vertex)
    }

    fn edge_type(&self, edge: &PriorityItem<V>) -> EdgeType {
        PriorityGraph::edge_type(self, edge)
    }

    fn default_edge_type(&self) -> EdgeType {
        PriorityGraph::default_edge_type(self)
    }
}
