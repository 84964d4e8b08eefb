//! Benchmarks for Kosaraju SCC decomposition.
//!
//! Measures the individual passes and full decompositions on a few graph shapes:
//! - Long chains (worst case for DFS depth)
//! - Rings of small cycles (many mid-sized components)
//! - A keyed graph over string labels

extern crate sccgraph;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sccgraph::graph::{
    algorithms::{decompose, finish_order, strongly_connected_components},
    transpose, DirectedGraph, IndexedGraph, NodeId, VisitedMap,
};
use std::hint::black_box;

/// Chain 0 -> 1 -> ... -> n-1, every vertex its own component.
fn chain(len: usize) -> DirectedGraph<(), ()> {
    let mut graph = DirectedGraph::with_capacity(len, len);
    let nodes: Vec<NodeId> = (0..len).map(|_| graph.add_node(())).collect();
    for pair in nodes.windows(2) {
        graph.add_edge(pair[0], pair[1], ()).unwrap();
    }
    graph
}

/// `count` cycles of `size` vertices, each cycle feeding the next one.
fn cycle_ring(count: usize, size: usize) -> DirectedGraph<(), ()> {
    let mut graph = DirectedGraph::with_capacity(count * size, count * (size + 1));
    let nodes: Vec<NodeId> = (0..count * size).map(|_| graph.add_node(())).collect();
    for cycle in nodes.chunks(size) {
        for (i, &node) in cycle.iter().enumerate() {
            graph.add_edge(node, cycle[(i + 1) % size], ()).unwrap();
        }
    }
    for pair in nodes.chunks(size).collect::<Vec<_>>().windows(2) {
        graph.add_edge(pair[0][0], pair[1][0], ()).unwrap();
    }
    graph
}

/// Benchmark a full decomposition of chains of growing length.
fn bench_scc_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc_chain");
    for len in [1_000, 10_000, 100_000] {
        let graph = chain(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &graph, |b, graph| {
            b.iter(|| {
                let sccs = strongly_connected_components(black_box(graph)).unwrap();
                black_box(sccs)
            });
        });
    }
    group.finish();
}

/// Benchmark a full decomposition of 1000 cycles of 16 vertices.
fn bench_scc_cycle_ring(c: &mut Criterion) {
    let graph = cycle_ring(1_000, 16);

    c.bench_function("scc_cycle_ring_1000x16", |b| {
        b.iter(|| {
            let sccs = strongly_connected_components(black_box(&graph)).unwrap();
            black_box(sccs)
        });
    });
}

/// Benchmark pulling only the first component, which still pays for both
/// up-front passes.
fn bench_scc_first_component(c: &mut Criterion) {
    let graph = cycle_ring(1_000, 16);

    c.bench_function("scc_first_component", |b| {
        b.iter(|| {
            let first = decompose(black_box(&graph)).unwrap().next();
            black_box(first)
        });
    });
}

/// Benchmark the finish-order pass alone.
fn bench_finish_order(c: &mut Criterion) {
    let graph = cycle_ring(1_000, 16);

    c.bench_function("finish_order_1000x16", |b| {
        b.iter(|| {
            let mut visited = VisitedMap::for_graph(&graph);
            let finished = finish_order(black_box(&graph), &mut visited).unwrap();
            black_box(finished)
        });
    });
}

/// Benchmark building the transpose alone.
fn bench_transpose(c: &mut Criterion) {
    let graph = cycle_ring(1_000, 16);

    c.bench_function("transpose_1000x16", |b| {
        b.iter(|| {
            let transposed = transpose(black_box(&graph)).unwrap();
            black_box(transposed)
        });
    });
}

/// Benchmark a keyed graph whose vertices are owned strings.
fn bench_scc_keyed(c: &mut Criterion) {
    let mut graph: IndexedGraph<String, ()> = IndexedGraph::new();
    for i in 0..5_000 {
        graph
            .add_edge(format!("block_{i}"), format!("block_{}", (i + 1) % 5_000), ())
            .unwrap();
        if i % 7 == 0 {
            graph
                .add_edge(format!("block_{i}"), format!("exit_{i}"), ())
                .unwrap();
        }
    }

    c.bench_function("scc_keyed_strings", |b| {
        b.iter(|| {
            let sccs = black_box(&graph).strongly_connected_components().unwrap();
            black_box(sccs)
        });
    });
}

criterion_group!(
    benches,
    bench_scc_chain,
    bench_scc_cycle_ring,
    bench_scc_first_component,
    bench_finish_order,
    bench_transpose,
    bench_scc_keyed,
);
criterion_main!(benches);
