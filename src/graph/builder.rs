//! Edge-list ingestion.

use crate::error::InvalidShape;
use crate::graph::Graph;
use crate::store::{AdjacencyStore, EdgeValue};

impl<S: AdjacencyStore + Default> Graph<S> {
    /// A graph whose shape precondition failed. Nothing is built.
    pub(crate) fn invalid(node_count: usize, reason: InvalidShape) -> Self {
        debug_event!(node_count, %reason, "topology left invalid");
        Self {
            node_count,
            matrix: S::default(),
            invalid_reason: Some(reason),
        }
    }

    /// A valid graph holding `node_count` nodes (or more, if `pairs` reach
    /// further) connected by the undirected edges in `pairs`.
    pub(crate) fn built(node_count: usize, pairs: &[(usize, usize)]) -> Self {
        let mut graph = Self {
            node_count,
            matrix: S::default(),
            invalid_reason: None,
        };
        graph.build_edges(pairs);
        debug_event!(
            nodes = graph.node_count,
            edges = graph.edge_count(),
            "topology built"
        );
        graph
    }
}

impl<S: AdjacencyStore> Graph<S> {
    /// Loads an undirected edge list into the adjacency store.
    ///
    /// The node count grows to cover the largest index in `pairs`; the store is
    /// then resized to `node_count x node_count` and cleared. Every pair `(i, j)`
    /// with `i != j` is written at both `(i, j)` and `(j, i)`; self-loops are
    /// skipped and duplicates are idempotent.
    pub(crate) fn build_edges(&mut self, pairs: &[(usize, usize)]) {
        let required = pairs
            .iter()
            .map(|&(i, j)| i.max(j) + 1)
            .max()
            .unwrap_or(0);
        if required > self.node_count {
            self.node_count = required;
        }

        self.matrix.resize(self.node_count, self.node_count);
        self.matrix.reset();

        let present = <S::Value as EdgeValue>::present();
        for &(i, j) in pairs {
            if i != j {
                self.matrix.set(i, j, present);
                self.matrix.set(j, i, present);
            }
        }
    }
}
