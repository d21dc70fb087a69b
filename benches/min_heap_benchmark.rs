use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heapgraph::{MinHeap, PriorityItem};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_min_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_heap");

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(Reverse(black_box(i)));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("min_heap_insert_extract", |b| {
        b.iter(|| {
            let mut heap = MinHeap::new();
            for i in 0..1000 {
                heap.insert(black_box(i));
            }
            while let Some(x) = heap.extract_min() {
                black_box(x);
            }
        });
    });

    // Arbitrary removal has no std counterpart; it is a linear scan plus one sift.
    group.bench_function("min_heap_remove_arbitrary", |b| {
        b.iter(|| {
            let mut heap: MinHeap<i32> = (0..1000).collect();
            for i in (0..1000).step_by(7) {
                black_box(heap.remove(&i));
            }
        });
    });

    group.bench_function("min_heap_priority_items", |b| {
        b.iter(|| {
            let mut heap = MinHeap::new();
            for i in 0..1000u32 {
                let priority = i32::try_from((i * 7919) % 1000).unwrap_or(0);
                heap.insert(PriorityItem::new(black_box(i), priority));
            }
            while let Some(edge) = heap.extract_min() {
                black_box(edge);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_min_heap);
criterion_main!(benches);
