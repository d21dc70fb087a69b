//! Depth-first topological sort with back-edge cycle detection.
//!
//! Each vertex moves monotonically through `Unvisited → InProgress → Finished`.
//! A vertex is finished only after all of its successors are, and finished
//! vertices are prepended to the output, so every edge `u -> v` places `u`
//! before `v`.
//!
//! Successors are visited in *reverse* vertex order (the order
//! [`PriorityGraph::successors`] reports, reversed). Edge priorities play no
//! part. The traversal runs on an explicit frame stack, so recursion depth is
//! never a concern.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::PriorityGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Finished,
}

/// One suspended `visit(vertex)` call.
struct Frame<V> {
    vertex: V,
    /// Successors still to examine, ascending; popped from the back.
    pending: Vec<V>,
}

struct DfsState<V> {
    states: HashMap<V, VisitState>,
    finished_order: Vec<V>,
}

impl<V> DfsState<V>
where
    V: Eq + Hash + Ord + Clone + fmt::Debug,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            states: HashMap::with_capacity(capacity),
            finished_order: Vec::with_capacity(capacity),
        }
    }

    fn is_finished(&self, vertex: &V) -> bool {
        self.states.get(vertex) == Some(&VisitState::Finished)
    }

    fn start(&mut self, graph: &PriorityGraph<V>, vertex: V) -> Frame<V> {
        self.states.insert(vertex.clone(), VisitState::InProgress);
        Frame {
            pending: graph.successors(&vertex),
            vertex,
        }
    }

    fn finish(&mut self, vertex: V) {
        self.states.insert(vertex.clone(), VisitState::Finished);
        self.finished_order.push(vertex);
    }

    /// Visits `root` and everything reachable from it that is not finished.
    fn visit(&mut self, graph: &PriorityGraph<V>, root: V) -> Result<()> {
        let mut stack = vec![self.start(graph, root)];

        while let Some(frame) = stack.last_mut() {
            if let Some(next) = frame.pending.pop() {
                match self.states.get(&next).copied() {
                    Some(VisitState::InProgress) => {
                        trace_event!(debug, vertex = ?next, "back edge found");
                        return Err(GraphError::CycleDetected {
                            vertex: format!("{next:?}"),
                        });
                    }
                    Some(VisitState::Finished) => {}
                    None => {
                        let frame = self.start(graph, next);
                        stack.push(frame);
                    }
                }
            } else if let Some(done) = stack.pop() {
                self.finish(done.vertex);
            }
        }
        Ok(())
    }

    fn into_order(self) -> Vec<V> {
        let mut order = self.finished_order;
        order.reverse();
        order
    }
}

/// Topologically sorts `graph`, starting the traversal at `start`.
///
/// After the start vertex's DFS tree completes, the traversal restarts from
/// the first unfinished vertex in insertion order until every vertex is
/// finished, so vertices unreachable from `start` are included.
///
/// # Errors
/// - [`GraphError::InvalidArgument`] if `start` is not in the graph.
/// - [`GraphError::CycleDetected`] if any back edge is found. No partial
///   order is returned.
///
/// # Example
///
/// ```rust
/// use heapgraph::{topological_sort, PriorityGraph, PriorityItem};
///
/// let mut graph = PriorityGraph::new();
/// for v in ['a', 'b', 'c', 'd'] {
///     graph.add_vertex(v);
/// }
/// graph.add_edge(PriorityItem::new('b', 0), &'a', &'b');
///
/// let order = topological_sort(&graph, &'a').unwrap();
/// assert_eq!(order.len(), 4);
/// assert!(order.iter().position(|&v| v == 'a') < order.iter().position(|&v| v == 'b'));
/// ```
pub fn topological_sort<V>(graph: &PriorityGraph<V>, start: &V) -> Result<Vec<V>>
where
    V: Eq + Hash + Ord + Clone + fmt::Debug,
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::InvalidArgument(format!(
            "start vertex {start:?} is not in the graph"
        )));
    }
    trace_event!(debug, start = ?start, vertices = graph.vertex_count(), "topological sort started");

    let mut state = DfsState::with_capacity(graph.vertex_count());
    state.visit(graph, start.clone())?;

    // Finished is monotonic, so one pass finds each "first unfinished" vertex in turn.
    for vertex in graph.vertex_iter() {
        if !state.is_finished(vertex) {
            trace_event!(trace, restart = ?vertex, "restarting from unfinished vertex");
            state.visit(graph, vertex.clone())?;
        }
    }

    let order = state.into_order();
    debug_assert_eq!(
        order.len(),
        graph.vertex_count(),
        "topological order must contain every vertex exactly once"
    );
    Ok(order)
}

/// Topologically sorts `graph`, starting at its first vertex in insertion
/// order. An empty graph yields an empty order.
///
/// # Errors
/// [`GraphError::CycleDetected`] if the graph has a cycle.
pub fn topological_sort_all<V>(graph: &PriorityGraph<V>) -> Result<Vec<V>>
where
    V: Eq + Hash + Ord + Clone + fmt::Debug,
{
    match graph.vertex_iter().next() {
        Some(first) => topological_sort(graph, first),
        None => Ok(Vec::new()),
    }
}

/// Returns true if the graph has no cycle.
pub fn is_acyclic<V>(graph: &PriorityGraph<V>) -> bool
where
    V: Eq + Hash + Ord + Clone + fmt::Debug,
{
    topological_sort_all(graph).is_ok()
}

/// Checks that `order` lists every vertex exactly once and that every edge
/// points forward in it.
pub fn is_topological_order<V>(graph: &PriorityGraph<V>, order: &[V]) -> bool
where
    V: Eq + Hash + Ord + Clone,
{
    if order.len() != graph.vertex_count() {
        return false;
    }
    let mut position = HashMap::with_capacity(order.len());
    for (pos, vertex) in order.iter().enumerate() {
        if !graph.contains_vertex(vertex) || position.insert(vertex, pos).is_some() {
            return false;
        }
    }
    graph.edge_iter().all(|(source, edge)| {
        matches!(
            (position.get(source), position.get(edge.target())),
            (Some(u), Some(v)) if u < v
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PriorityItem;

    fn graph_of(vertices: &[&'static str], edges: &[(&'static str, &'static str)]) -> PriorityGraph<&'static str> {
        let mut graph = PriorityGraph::new();
        for &v in vertices {
            graph.add_vertex(v);
        }
        for &(u, v) in edges {
            assert!(graph.add_edge(PriorityItem::new(v, 0), &u, &v));
        }
        graph
    }

    #[test]
    fn test_chain() {
        let graph = graph_of(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
        assert_eq!(topological_sort(&graph, &"A").unwrap(), vec!["A", "B", "C"]);
        // Starting in the middle still covers everything.
        assert_eq!(topological_sort(&graph, &"B").unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reverse_successor_order_is_deterministic() {
        // Successors of A are [B, C]; C is visited first, so B finishes last
        // and is prepended just after A.
        let graph = graph_of(&["A", "B", "C"], &[("A", "C"), ("A", "B")]);
        assert_eq!(topological_sort(&graph, &"A").unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_priority_does_not_affect_order() {
        let mut low_first = graph_of(&["A", "B", "C"], &[]);
        low_first.add_edge(PriorityItem::new("B", 1), &"A", &"B");
        low_first.add_edge(PriorityItem::new("C", 9), &"A", &"C");

        let mut high_first = graph_of(&["A", "B", "C"], &[]);
        high_first.add_edge(PriorityItem::new("B", 9), &"A", &"B");
        high_first.add_edge(PriorityItem::new("C", 1), &"A", &"C");

        assert_eq!(
            topological_sort(&low_first, &"A").unwrap(),
            topological_sort(&high_first, &"A").unwrap()
        );
    }

    #[test]
    fn test_cycle_detected() {
        let graph = graph_of(&["A", "B"], &[("A", "B"), ("B", "A")]);
        assert_eq!(
            topological_sort(&graph, &"A"),
            Err(GraphError::CycleDetected { vertex: "\"A\"".into() })
        );
        assert!(!is_acyclic(&graph));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let graph = graph_of(&["A"], &[("A", "A")]);
        assert!(matches!(
            topological_sort(&graph, &"A"),
            Err(GraphError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_cycle_in_unreached_component() {
        let graph = graph_of(&["A", "B", "C"], &[("B", "C"), ("C", "B")]);
        assert!(matches!(
            topological_sort(&graph, &"A"),
            Err(GraphError::CycleDetected { .. })
        ));
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let graph = graph_of(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        let order = topological_sort(&graph, &"A").unwrap();
        assert!(is_topological_order(&graph, &order));
    }

    #[test]
    fn test_disconnected_coverage() {
        let graph = graph_of(&["A", "B", "C", "D"], &[("A", "B")]);
        let order = topological_sort(&graph, &"A").unwrap();
        assert_eq!(order.len(), 4);
        assert!(is_topological_order(&graph, &order));
        // Later restarts are prepended ahead of earlier trees.
        assert_eq!(order, vec!["D", "C", "A", "B"]);
    }

    #[test]
    fn test_missing_start_vertex() {
        let graph = graph_of(&["A"], &[]);
        assert!(matches!(
            topological_sort(&graph, &"Z"),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sort_all_on_empty_graph() {
        let graph: PriorityGraph<u8> = PriorityGraph::new();
        assert_eq!(topological_sort_all(&graph), Ok(Vec::new()));
        assert!(is_acyclic(&graph));
    }

    #[test]
    fn test_is_topological_order_rejects_bad_orders() {
        let graph = graph_of(&["A", "B"], &[("A", "B")]);
        assert!(is_topological_order(&graph, &["A", "B"]));
        assert!(!is_topological_order(&graph, &["B", "A"]));
        assert!(!is_topological_order(&graph, &["A"]));
        assert!(!is_topological_order(&graph, &["A", "A"]));
    }
}
