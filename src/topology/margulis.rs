//! Margulis expanders.

use super::exact_sqrt;
use crate::error::InvalidShape;
use crate::graph::Graph;
use crate::store::AdjacencyStore;

/// Margulis edges on the `side x side` torus.
///
/// Cell `(i, j)` (node `i * side + j`) links to `((i + 2j) mod s, j)`,
/// `(i, (2i + j) mod s)`, `(i, (2i + j + 1) mod s)` and `((i + 2j + 1) mod s, j)`.
pub fn margulis_edges(side: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(side * side * 4);
    for i in 0..side {
        for j in 0..side {
            let cell = i * side + j;
            pairs.push((cell, ((i + 2 * j) % side) * side + j));
            pairs.push((cell, i * side + (2 * i + j) % side));
            pairs.push((cell, i * side + (2 * i + j + 1) % side));
            pairs.push((cell, ((i + 2 * j + 1) % side) * side + j));
        }
    }
    pairs
}

impl<S: AdjacencyStore + Default> Graph<S> {
    /// The Margulis expander on `nodes` vertices.
    ///
    /// Invalid unless `nodes` is a perfect square.
    pub fn margulis(nodes: usize) -> Self {
        match exact_sqrt(nodes) {
            Some(side) => Self::built(nodes, &margulis_edges(side)),
            None => Self::invalid(nodes, InvalidShape::NotPerfectSquare { nodes }),
        }
    }
}
