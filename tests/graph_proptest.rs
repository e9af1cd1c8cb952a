use std::collections::BTreeSet;

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use proptest::prelude::*;
use trellis::{Graph, Natural};

#[derive(Debug, Clone)]
enum Operation {
    AddNode(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
    RemoveNode(u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u8>().prop_map(|n| Operation::AddNode(n % 16)),
        (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Operation::AddEdge(a % 16, b % 16)),
        (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Operation::RemoveEdge(a % 16, b % 16)),
        any::<u8>().prop_map(|n| Operation::RemoveNode(n % 16)),
    ]
}

fn edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..24, 0u8..24), 0..80)
}

fn assert_no_dangling(graph: &Graph<u8>) {
    for node in graph.nodes() {
        for &id in node.adjacent() {
            assert!(graph.node(id).is_some(), "dangling edge from {}", node.payload());
        }
    }
}

proptest! {
    #[test]
    fn test_mutations_keep_adjacency_consistent(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut graph = Graph::natural();
        let mut model: BTreeSet<u8> = BTreeSet::new();

        for op in ops {
            match op {
                Operation::AddNode(n) => {
                    graph.add_node(n);
                    model.insert(n);
                }
                Operation::AddEdge(a, b) => {
                    graph.add_edge(a, b);
                    model.insert(a);
                    model.insert(b);
                }
                Operation::RemoveEdge(a, b) => {
                    let before = graph.len();
                    graph.remove_edge(&a, &b);
                    prop_assert_eq!(graph.len(), before);
                }
                Operation::RemoveNode(n) => {
                    let removed = graph.remove_node(&n);
                    prop_assert_eq!(removed.is_some(), model.remove(&n));
                    prop_assert!(!graph.contains(&n));
                    prop_assert!(graph.nodes().all(|node| graph.neighbors(node.payload()).all(|p| *p != n)));
                }
            }
            assert_no_dangling(&graph);
        }

        prop_assert_eq!(graph.len(), model.len());
        let sorted: Vec<u8> = graph.sorted_payloads().copied().collect();
        let expected: Vec<u8> = model.into_iter().collect();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn test_traversals_visit_every_node_once(edges in edges(), extra in proptest::collection::vec(0u8..32, 0..8)) {
        let mut graph = Graph::from_edges(Natural, edges);
        for n in extra {
            graph.add_node(n);
        }

        let mut dfs: Vec<u8> = graph.depth_first_search().copied().collect();
        let mut bfs: Vec<u8> = graph
            .breadth_first_search()
            .map(|r| r.map(|n| *n))
            .collect::<Result<_, _>>()
            .unwrap();
        prop_assert_eq!(dfs.len(), graph.len());
        prop_assert_eq!(bfs.len(), graph.len());

        // First visit is always the first enumerated node.
        prop_assert_eq!(dfs.first(), graph.payloads().next());
        prop_assert_eq!(bfs.first(), graph.payloads().next());

        dfs.sort_unstable();
        bfs.sort_unstable();
        let all: Vec<u8> = graph.sorted_payloads().copied().collect();
        prop_assert_eq!(&dfs, &all);
        prop_assert_eq!(&bfs, &all);
    }

    #[test]
    fn test_reachable_sets_match_petgraph(edges in edges(), start in 0u8..24) {
        let graph = Graph::from_edges(Natural, edges.iter().copied());
        let mut reference: DiGraphMap<u8, ()> = DiGraphMap::new();
        for &(a, b) in &edges {
            reference.add_edge(a, b, ());
        }

        let ours_dfs: BTreeSet<u8> = graph.depth_first_from(&start).copied().collect();
        let ours_bfs: BTreeSet<u8> = graph
            .breadth_first_from(&start)
            .map(|r| r.map(|n| *n))
            .collect::<Result<_, _>>()
            .unwrap();

        let mut theirs = BTreeSet::new();
        if reference.contains_node(start) {
            let mut dfs = Dfs::new(&reference, start);
            while let Some(n) = dfs.next(&reference) {
                theirs.insert(n);
            }
        }

        prop_assert_eq!(&ours_dfs, &theirs);
        prop_assert_eq!(&ours_bfs, &theirs);
    }

    #[test]
    fn test_add_node_idempotent(values in proptest::collection::vec(any::<u8>(), 1..64)) {
        let mut graph = Graph::natural();
        for &v in &values {
            let first = graph.add_node(v);
            let again = graph.add_node(v);
            prop_assert_eq!(first, again);
        }
        let distinct: BTreeSet<u8> = values.into_iter().collect();
        prop_assert_eq!(graph.len(), distinct.len());
    }
}
