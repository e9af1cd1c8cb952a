use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis::{ByKey, Graph, Natural};

fn tree(size: usize) -> Graph<usize> {
    // Binary-heap shaped tree: i/2 -> i.
    Graph::from_edges(Natural, (1..size).map(|i| (i / 2, i)))
}

fn bench_graph_build(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_build_tree", |b| {
        b.iter(|| black_box(tree(size)));
    });

    c.bench_function("graph_build_by_key", |b| {
        b.iter(|| {
            let mut graph = Graph::new(ByKey::new(|p: &(usize, u64)| p.0));
            for i in 1..size {
                graph.add_edge((i / 2, 0), (i, i as u64));
            }
            black_box(graph.len())
        });
    });
}

fn bench_graph_sparse_remove(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_chain_remove_middle", |b| {
        b.iter(|| {
            let mut graph = Graph::from_edges(Natural, (0..size - 1).map(|i| (i, i + 1)));
            black_box(graph.remove_node(&(size / 2)));
        });
    });
}

fn bench_graph_traversal(c: &mut Criterion) {
    let graph = tree(10_000);

    c.bench_function("graph_dfs_tree", |b| {
        b.iter(|| black_box(graph.depth_first_search().count()));
    });

    c.bench_function("graph_bfs_tree", |b| {
        b.iter(|| black_box(graph.breadth_first_search().filter(Result::is_ok).count()));
    });

    let chain = Graph::from_edges(Natural, (0..10_000usize).map(|i| (i, i + 1)));
    c.bench_function("graph_dfs_chain", |b| {
        b.iter(|| black_box(chain.depth_first_search().count()));
    });
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_graph_sparse_remove,
    bench_graph_traversal
);
criterion_main!(benches);
