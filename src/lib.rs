//! # `lattice-topology` - Lattice and Expander Topologies
//!
//! Deterministic neighbourhood structures for lattice-training algorithms such
//! as self-organizing maps. A trainer picks a topology, builds it once, and then
//! asks, for each node, which nodes lie at distance `1, 2, ..., k`.
//!
//! ## Topologies
//!
//! | Constructor | Size rule | Neighbourhood |
//! |-------------|-----------|---------------|
//! | [`Graph::grid4`] | perfect square (or `width x height`) | up, down, left, right |
//! | [`Graph::grid6`] | perfect square (or `width x height`) | hexagonal offset lattice |
//! | [`Graph::grid8`] | perfect square (or `width x height`) | all eight surrounding cells |
//! | [`Graph::paley`] | `n ≡ 1 (mod 4)` | quadratic residues |
//! | [`Graph::lps`] | `n` prime (Miller–Rabin) | cycle plus modular inverse |
//! | [`Graph::margulis`] | perfect square | Margulis expander on a torus |
//!
//! A size that breaks the rule does not panic or error: the graph comes back
//! with [`Graph::is_valid`] `== false` and [`Graph::invalid_reason`] set.
//!
//! ## Architecture
//!
//! 1. **Adjacency stores** ([`AdjacencyStore`]): [`DenseMatrix`] and
//!    [`SparseMatrix`], generic over the [`EdgeValue`] they hold.
//! 2. **Builder**: turns an edge list into a symmetric, self-loop-free store.
//! 3. **Explorer** ([`explore`]): one level-synchronous BFS for every store,
//!    written against `row_neighbours`. Weighted stores are declined.
//! 4. **Generators** (`topology`): pure edge-list rules plus the `Graph`
//!    constructors, and [`TopologySpec`] to describe them as data.
//!
//! ## Example
//!
//! ```rust
//! use lattice_topology::SparseGraph;
//!
//! let grid = SparseGraph::grid4(9);
//! assert!(grid.is_valid());
//!
//! let levels = grid.neighbours(4, 2);
//! let mut ring: Vec<_> = levels.level(1).to_vec();
//! ring.sort_unstable();
//! assert_eq!(ring, vec![1, 3, 5, 7]);
//! assert_eq!(levels.level(2).len(), 4);
//! ```
//!
//! ## Features
//!
//! - `parallel`: [`Graph::neighbourhoods`] runs per-node queries on rayon.
//! - `tracing`: emits `debug` events for construction outcomes and declined queries.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled.
macro_rules! debug_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
    };
}

pub mod error;
pub mod graph;
pub mod store;
pub mod topology;

pub use error::{ConfigError, InvalidShape, StoreError};
pub use graph::{explore, DenseGraph, Graph, NeighbourLevels, SparseGraph};
pub use store::{AdjacencyStore, DenseMatrix, EdgeValue, SparseMatrix};
pub use topology::{TopologyKind, TopologySpec};

// Compile-time checks on the store and result layouts.
const _: () = {
    use core::mem;

    // A sparse row entry for a boolean store is one index plus padding.
    assert!(mem::size_of::<(usize, bool)>() == 2 * mem::size_of::<usize>());

    // Levels are a thin wrapper around their vector.
    assert!(mem::size_of::<NeighbourLevels>() == mem::size_of::<Vec<Vec<usize>>>());
};
