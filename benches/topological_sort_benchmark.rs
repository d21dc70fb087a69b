use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heapgraph::{topological_sort_all, PriorityGraph, PriorityItem};
use std::collections::VecDeque;

// Simple stdlib-based Kahn's algorithm for comparison
fn kahn(adj: &[Vec<usize>]) -> Option<Vec<usize>> {
    let n = adj.len();
    let mut indeg = vec![0usize; n];
    for targets in adj {
        for &v in targets {
            indeg[v] += 1;
        }
    }

    let mut q: VecDeque<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(u) = q.pop_front() {
        order.push(u);
        for &v in &adj[u] {
            indeg[v] -= 1;
            if indeg[v] == 0 {
                q.push_back(v);
            }
        }
    }
    (order.len() == n).then_some(order)
}

fn layered_dag(layers: usize, width: usize) -> Vec<Vec<usize>> {
    let n = layers * width;
    let mut adj = vec![Vec::new(); n];
    for layer in 0..layers - 1 {
        for i in 0..width {
            let u = layer * width + i;
            for j in 0..width {
                if (i + j) % 3 == 0 {
                    adj[u].push((layer + 1) * width + j);
                }
            }
        }
    }
    adj
}

fn build_graph(adj: &[Vec<usize>]) -> PriorityGraph<usize> {
    let mut graph = PriorityGraph::new();
    for v in 0..adj.len() {
        graph.add_vertex(v);
    }
    for (u, targets) in adj.iter().enumerate() {
        for (k, &v) in targets.iter().enumerate() {
            let priority = i32::try_from(k).unwrap_or(i32::MAX);
            graph.add_edge(PriorityItem::new(v, priority), &u, &v);
        }
    }
    graph
}

fn bench_topological_sort(c: &mut Criterion) {
    let adj = layered_dag(20, 16);
    let graph = build_graph(&adj);

    let mut group = c.benchmark_group("topological_sort");

    group.bench_function("std_kahn", |b| {
        b.iter(|| black_box(kahn(black_box(&adj))));
    });

    group.bench_function("priority_graph_dfs", |b| {
        b.iter(|| black_box(topological_sort_all(black_box(&graph))));
    });

    group.bench_function("priority_graph_build", |b| {
        b.iter(|| black_box(build_graph(black_box(&adj))));
    });

    group.finish();
}

criterion_group!(benches, bench_topological_sort);
criterion_main!(benches);
