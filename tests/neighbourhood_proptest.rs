use lattice_topology::{AdjacencyStore, DenseGraph, SparseGraph};
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn edge_list(max_node: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..max_node, 0..max_node), 0..120)
}

/// Reference distances from petgraph, restricted to `max_depth`.
fn reference_levels(node_count: usize, pairs: &[(usize, usize)], start: usize, max_depth: usize) -> Vec<BTreeSet<usize>> {
    let mut g = UnGraph::<(), ()>::with_capacity(node_count, pairs.len());
    for _ in 0..node_count {
        g.add_node(());
    }
    for &(i, j) in pairs {
        if i != j {
            g.update_edge(NodeIndex::new(i), NodeIndex::new(j), ());
        }
    }
    let mut levels = vec![BTreeSet::new(); max_depth + 1];
    for (node, dist) in dijkstra(&g, NodeIndex::new(start), None, |_| 1usize) {
        if dist <= max_depth {
            levels[dist].insert(node.index());
        }
    }
    levels
}

proptest! {
    #[test]
    fn levels_match_petgraph_shortest_paths(
        pairs in edge_list(40),
        start in 0usize..40,
        max_depth in 0usize..6,
    ) {
        let graph = SparseGraph::from_edges(&pairs);
        prop_assume!(start < graph.node_count());

        let levels = graph.neighbours(start, max_depth);
        let expected = reference_levels(graph.node_count(), &pairs, start, max_depth);
        prop_assert_eq!(levels.len(), max_depth + 1);
        for (depth, want) in expected.iter().enumerate() {
            let got: BTreeSet<usize> = levels.level(depth).iter().copied().collect();
            prop_assert_eq!(got.len(), levels.level(depth).len(), "duplicate at depth {}", depth);
            prop_assert_eq!(&got, want, "depth {}", depth);
        }
    }

    #[test]
    fn dense_and_sparse_stores_agree(
        pairs in edge_list(30),
        max_depth in 0usize..5,
    ) {
        let dense = DenseGraph::from_edges(&pairs);
        let sparse = SparseGraph::from_edges(&pairs);
        prop_assert_eq!(dense.node_count(), sparse.node_count());
        prop_assert_eq!(dense.edges().collect::<Vec<_>>(), sparse.edges().collect::<Vec<_>>());
        for node in 0..dense.node_count() {
            prop_assert_eq!(dense.neighbours(node, max_depth), sparse.neighbours(node, max_depth));
        }
    }

    #[test]
    fn built_graphs_are_symmetric_without_self_loops(pairs in edge_list(50)) {
        let graph = SparseGraph::from_edges(&pairs);
        let m = graph.matrix();
        for i in 0..graph.node_count() {
            prop_assert!(!m.has_edge(i, i));
            for j in m.row_neighbours(i) {
                prop_assert!(m.has_edge(j, i));
            }
        }
        let expected = pairs.iter().map(|&(a, b)| a.max(b) + 1).max().unwrap_or(0);
        prop_assert_eq!(graph.node_count(), expected);
    }

    #[test]
    fn out_of_range_queries_are_empty(
        pairs in edge_list(20),
        offset in 0usize..10,
        max_depth in 0usize..8,
    ) {
        let graph = SparseGraph::from_edges(&pairs);
        let levels = graph.neighbours(graph.node_count() + offset, max_depth);
        prop_assert_eq!(levels.len(), max_depth + 1);
        prop_assert_eq!(levels.reached(), 0);
    }
}
