use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lattice_topology::{AdjacencyStore, DenseGraph, Graph, SparseGraph};

// Query cost: the same topology answered from a dense and a sparse store.

fn query_every_node<S: AdjacencyStore>(graph: &Graph<S>, max_depth: usize) -> usize {
    (0..graph.node_count())
        .map(|node| graph.neighbours(node, max_depth).reached())
        .sum()
}

fn bench_store_choice(c: &mut Criterion) {
    for (name, dense, sparse) in [
        ("neighbours_grid4", DenseGraph::grid4(1024), SparseGraph::grid4(1024)),
        ("neighbours_grid8", DenseGraph::grid8(1024), SparseGraph::grid8(1024)),
        ("neighbours_paley", DenseGraph::paley(1009), SparseGraph::paley(1009)),
    ] {
        let mut group = c.benchmark_group(name);
        group.throughput(Throughput::Elements(dense.node_count() as u64));
        for depth in [1usize, 3] {
            group.bench_with_input(BenchmarkId::new("dense", depth), &depth, |b, &d| {
                b.iter(|| black_box(query_every_node(&dense, d)))
            });
            group.bench_with_input(BenchmarkId::new("sparse", depth), &depth, |b, &d| {
                b.iter(|| black_box(query_every_node(&sparse, d)))
            });
        }
        group.finish();
    }
}

fn bench_neighbourhoods(c: &mut Criterion) {
    let graph = SparseGraph::grid6(4096);
    let mut group = c.benchmark_group("neighbourhoods_grid6");
    group.throughput(Throughput::Elements(graph.node_count() as u64));
    group.bench_with_input(BenchmarkId::new("sparse", 2), &2usize, |b, &d| {
        b.iter(|| black_box(graph.neighbourhoods(d)))
    });
    group.finish();
}

criterion_group!(benches, bench_store_choice, bench_neighbourhoods);
criterion_main!(benches);
