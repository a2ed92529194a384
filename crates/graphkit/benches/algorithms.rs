//! Graph Algorithm Benchmarks
//!
//! Measures the searches on grid graphs and random sparse graphs:
//! - Unweighted traversal (DFS reachability, BFS path)
//! - Weighted shortest paths (Dijkstra, Bellman-Ford)
//! - Topological ordering and minimum spanning trees

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graphkit::{
    bellman_ford, bfs, dijkstra, kahn_topological_order, kruskal_mst, reachable, DisjointSet,
    Graph, MstEdge,
};

/// Directed grid: every cell points right and down.
fn grid_graph(side: u32) -> Graph<u32> {
    let mut graph = Graph::with_capacity((side * side) as usize);
    let mut rng = StdRng::seed_from_u64(42);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            graph.add_vertex(v);
            if col + 1 < side {
                graph.add_weighted_edge(v, v + 1, rng.gen_range(1..100));
            }
            if row + 1 < side {
                graph.add_weighted_edge(v, v + side, rng.gen_range(1..100));
            }
        }
    }
    graph
}

fn random_edges(n: usize, m: usize) -> Vec<MstEdge<i64>> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..m)
        .map(|_| MstEdge::new(rng.gen_range(1..1000), rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

/// Benchmark unweighted traversal
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/traversal");

    for side in [16u32, 64, 128] {
        let graph = grid_graph(side);
        let target = side * side - 1;
        group.throughput(Throughput::Elements(graph.edge_count() as u64));

        group.bench_with_input(BenchmarkId::new("reachable", side), &graph, |b, g| {
            b.iter(|| black_box(reachable(g, &0).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("bfs", side), &graph, |b, g| {
            b.iter(|| black_box(bfs(g, &0, &target).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark weighted shortest paths
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/shortest_path");

    for side in [16u32, 32, 64] {
        let graph = grid_graph(side);
        let target = side * side - 1;

        group.bench_with_input(BenchmarkId::new("dijkstra", side), &graph, |b, g| {
            b.iter(|| black_box(dijkstra(g, &0, &target).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("bellman_ford", side), &graph, |b, g| {
            b.iter(|| black_box(bellman_ford(g, &0, &target).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark ordering and spanning trees
fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/structure");

    let dag = grid_graph(64);
    group.bench_function("kahn_64x64", |b| {
        b.iter(|| black_box(kahn_topological_order(&dag)));
    });

    for n in [1_000usize, 10_000] {
        let edges = random_edges(n, n * 4);
        group.bench_with_input(BenchmarkId::new("kruskal", n), &edges, |b, e| {
            b.iter(|| black_box(kruskal_mst(n, e).unwrap()));
        });
    }

    group.bench_function("disjoint_set_chain_10k", |b| {
        b.iter(|| {
            let mut set = DisjointSet::new(10_000);
            for i in 1..10_000 {
                set.union(i - 1, i).unwrap();
            }
            black_box(set.find(0).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_traversal, bench_shortest_path, bench_structure);
criterion_main!(benches);
