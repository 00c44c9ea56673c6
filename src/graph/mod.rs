//! Immutable topologies over an adjacency store.
//!
//! A [`Graph`] is produced in one shot by a constructor (a topology generator,
//! [`Graph::from_edges`] or [`Graph::from_matrix`]) and never mutated afterwards.
//! Shape violations do not panic or return errors: the graph is simply left
//! invalid, with the reason available from [`Graph::invalid_reason`].
//!
//! The module is vertically split:
//! - `builder`: edge-list ingestion
//! - `explorer`: depth-limited neighbourhood enumeration
//! - `tests`: module-local tests

mod builder;
mod explorer;
pub(crate) mod access;

pub use explorer::{explore, NeighbourLevels};

use crate::error::InvalidShape;
use crate::store::{AdjacencyStore, DenseMatrix, SparseMatrix};

/// A topology over `S`, defaulting to a sparse boolean store.
///
/// The adjacency relation is symmetric and free of self-loops for every graph
/// built by this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<S = SparseMatrix<bool>> {
    node_count: usize,
    matrix: S,
    invalid_reason: Option<InvalidShape>,
}

/// A graph backed by a dense boolean matrix.
pub type DenseGraph = Graph<DenseMatrix<bool>>;

/// A graph backed by a sparse boolean matrix.
pub type SparseGraph = Graph<SparseMatrix<bool>>;

impl<S: AdjacencyStore + Default> Graph<S> {
    /// Builds a graph from an arbitrary undirected edge list.
    ///
    /// The node count is `1 +` the largest index referenced. The result is
    /// always valid.
    pub fn from_edges(pairs: &[(usize, usize)]) -> Self {
        Self::built(0, pairs)
    }
}

impl<S: AdjacencyStore> Graph<S> {
    /// Wraps an existing store. The node count is `matrix.rows()`.
    ///
    /// A non-square store yields an invalid graph; symmetry is not checked.
    pub fn from_matrix(matrix: S) -> Self {
        let (rows, columns) = (matrix.rows(), matrix.columns());
        let invalid_reason = (rows != columns).then_some(InvalidShape::NotSquareMatrix { rows, columns });
        Self {
            node_count: rows,
            matrix,
            invalid_reason,
        }
    }

    /// Number of nodes.
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// `true` when the shape precondition held and the topology was built.
    ///
    /// Neighbourhood queries on an invalid graph should not be trusted.
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.invalid_reason.is_none()
    }

    /// Why the graph is invalid, if it is.
    #[inline]
    pub fn invalid_reason(&self) -> Option<InvalidShape> {
        self.invalid_reason
    }

    /// Converts into a `Result`, keeping the graph when it is valid.
    pub fn validated(self) -> Result<Self, InvalidShape> {
        match self.invalid_reason {
            Some(reason) => Err(reason),
            None => Ok(self),
        }
    }

    /// Read access to the backing store.
    #[inline]
    pub fn matrix(&self) -> &S {
        &self.matrix
    }

    /// Consumes the graph, returning the backing store.
    pub fn into_matrix(self) -> S {
        self.matrix
    }

    /// Nodes within `max_depth` edges of `node`, grouped by distance.
    ///
    /// See [`explore`] for the weighted-store and out-of-range results; the
    /// store of every graph spans exactly its `node_count` nodes, or nothing
    /// when the graph is invalid.
    pub fn neighbours(&self, node: usize, max_depth: usize) -> NeighbourLevels {
        explore(&self.matrix, node, max_depth)
    }

    /// The neighbourhood levels of every node, in node order.
    #[cfg(not(feature = "parallel"))]
    pub fn neighbourhoods(&self, max_depth: usize) -> Vec<NeighbourLevels> {
        (0..self.node_count)
            .map(|node| self.neighbours(node, max_depth))
            .collect()
    }

    /// The neighbourhood levels of every node, in node order.
    ///
    /// Queries run on rayon's pool; they only read the store.
    #[cfg(feature = "parallel")]
    pub fn neighbourhoods(&self, max_depth: usize) -> Vec<NeighbourLevels>
    where
        S: Sync,
    {
        use rayon::prelude::*;

        (0..self.node_count)
            .into_par_iter()
            .map(|node| self.neighbours(node, max_depth))
            .collect()
    }

    /// Number of neighbours of `node` (0 when out of range).
    pub fn degree(&self, node: usize) -> usize {
        self.matrix.row_neighbours(node).count()
    }

    /// Iterates undirected edges `(i, j)` with `i < j`, ordered by `i` then `j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.matrix.rows()).flat_map(move |i| {
            self.matrix
                .row_neighbours(i)
                .filter(move |&j| j > i)
                .map(move |j| (i, j))
        })
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
