//! `proptest` strategies for graphs and heaps.
//!
//! Enabled by the `proptest` feature so downstream crates can fuzz code built
//! on top of [`PriorityGraph`](crate::PriorityGraph).

use proptest::collection::vec;
use proptest::prelude::*;

use crate::graph::{EdgeRecord, GraphDescription};

/// Descriptions of acyclic graphs with up to `max_vertices` vertices.
///
/// Vertices are `0..n` added in a shuffled order. Every edge goes from a lower
/// to a higher number, so the graph is always a DAG.
pub fn dag_description(max_vertices: u32) -> impl Strategy<Value = GraphDescription<u32>> {
    (1..=max_vertices.max(1))
        .prop_flat_map(|n| {
            let order = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
            let edges = vec((0..n, 0..n, any::<i32>()), 0..(n as usize * 2));
            (order, edges)
        })
        .prop_map(|(vertices, raw)| {
            let edges = raw
                .into_iter()
                .filter(|(a, b, _)| a != b)
                .map(|(a, b, priority)| EdgeRecord {
                    source: a.min(b),
                    target: a.max(b),
                    priority,
                })
                .collect();
            GraphDescription { vertices, edges }
        })
}

/// Descriptions of arbitrary directed graphs, cycles and self-loops included.
pub fn any_description(max_vertices: u32) -> impl Strategy<Value = GraphDescription<u32>> {
    (1..=max_vertices.max(1)).prop_flat_map(|n| {
        vec((0..n, 0..n, any::<i32>()), 0..(n as usize * 2)).prop_map(move |raw| GraphDescription {
            vertices: (0..n).collect(),
            edges: raw
                .into_iter()
                .map(|(source, target, priority)| EdgeRecord { source, target, priority })
                .collect(),
        })
    })
}

/// One step of a random heap workload.
#[derive(Debug, Clone)]
pub enum HeapOp {
    /// Insert a value.
    Insert(i32),
    /// Extract the minimum.
    ExtractMin,
    /// Remove a value if present.
    Remove(i32),
}

/// Random heap workloads over a small value domain, so removals often hit.
pub fn heap_ops(max_len: usize) -> impl Strategy<Value = Vec<HeapOp>> {
    vec(
        prop_oneof![
            3 => (-50..50i32).prop_map(HeapOp::Insert),
            1 => Just(HeapOp::ExtractMin),
            2 => (-50..50i32).prop_map(HeapOp::Remove),
        ],
        0..max_len,
    )
}
