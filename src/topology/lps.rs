//! Lubotzky–Phillips–Sarnak style cycle-plus-inverse graphs.

use rand::Rng;

use super::primality::{is_probable_prime, mod_pow, MILLER_RABIN_ROUNDS};
use crate::error::InvalidShape;
use crate::graph::Graph;
use crate::store::AdjacencyStore;

/// Edges on `Z/pZ`: each node links to its predecessor and successor on the
/// cycle, and every non-zero node to its multiplicative inverse `i^(p-2)`.
///
/// `nodes` is expected to be prime; fewer than two nodes yield no edges.
pub fn lps_edges(nodes: usize) -> Vec<(usize, usize)> {
    if nodes < 2 {
        return Vec::new();
    }
    let mut pairs = Vec::with_capacity(nodes * 3);
    pairs.push((0, nodes - 1));
    pairs.push((0, 1));
    for i in 1..nodes {
        pairs.push((i, i - 1));
        pairs.push((i, (i + 1) % nodes));
        pairs.push((i, mod_pow(i, nodes - 2, nodes)));
    }
    pairs
}

impl<S: AdjacencyStore + Default> Graph<S> {
    /// The LPS graph on `nodes` vertices, testing primality with thread-local randomness.
    ///
    /// Invalid unless `nodes` passes a 20-round Miller–Rabin test.
    pub fn lps(nodes: usize) -> Self {
        Self::lps_with_rng(nodes, &mut rand::thread_rng())
    }

    /// Like [`Graph::lps`], drawing Miller–Rabin witnesses from `rng`.
    pub fn lps_with_rng<R: Rng + ?Sized>(nodes: usize, rng: &mut R) -> Self {
        if !is_probable_prime(nodes, MILLER_RABIN_ROUNDS, rng) {
            return Self::invalid(nodes, InvalidShape::NotPrime { nodes });
        }
        Self::built(nodes, &lps_edges(nodes))
    }
}
