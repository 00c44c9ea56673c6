//! Paley graphs.

use super::primality::mod_mul;
use crate::error::InvalidShape;
use crate::graph::Graph;
use crate::store::AdjacencyStore;

/// Quadratic-residue edges: node `i` links to `(i + k² mod n) mod n` for
/// every `k` in `0..(n - 1) / 2`.
///
/// `k = 0` contributes only self-loops, which the builder drops.
pub fn paley_edges(nodes: usize) -> Vec<(usize, usize)> {
    if nodes == 0 {
        return Vec::new();
    }
    let residues: Vec<usize> = (0..(nodes - 1) / 2).map(|k| mod_mul(k, k, nodes)).collect();
    (0..nodes)
        .flat_map(|i| residues.iter().map(move |&q| (i, (i + q) % nodes)))
        .collect()
}

impl<S: AdjacencyStore + Default> Graph<S> {
    /// The Paley graph on `nodes` vertices.
    ///
    /// Invalid unless `nodes ≡ 1 (mod 4)`.
    pub fn paley(nodes: usize) -> Self {
        if nodes % 4 != 1 {
            return Self::invalid(nodes, InvalidShape::NotOneModFour { nodes });
        }
        Self::built(nodes, &paley_edges(nodes))
    }
}
