//! Adjacency storage backends.
//!
//! The graph engine never touches a concrete container directly. It talks to the
//! [`AdjacencyStore`] capability, which is deliberately small:
//! - dimensions (`rows`, `columns`) and `resize`/`reset`
//! - element `get`/`set`
//! - `row_neighbours`, the per-row neighbour iterator traversals are written against
//!
//! Two backends are provided:
//! - [`DenseMatrix`]: contiguous row-major storage, rows are scanned index by index
//! - [`SparseMatrix`]: per-row sorted entry lists, rows iterate stored entries only

mod dense;
mod sparse;
mod value;
#[cfg(test)]
mod tests;

pub use dense::{DenseMatrix, DenseRowNeighbours};
pub use sparse::{SparseMatrix, SparseRowNeighbours};
pub use value::EdgeValue;

/// A resizable square-or-rectangular matrix recording which node pairs are connected.
pub trait AdjacencyStore {
    /// Element type of the matrix.
    type Value: EdgeValue;

    /// Iterator over the column indices holding an edge in one row.
    type RowNeighbours<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn columns(&self) -> usize;

    /// Changes the dimensions, keeping the entries of the overlapping region.
    fn resize(&mut self, rows: usize, columns: usize);

    /// Clears every entry back to the "no edge" value, keeping the dimensions.
    fn reset(&mut self);

    /// Returns the entry at `(row, col)`, or `None` when out of range.
    fn get(&self, row: usize, col: usize) -> Option<Self::Value>;

    /// Writes the entry at `(row, col)`. Returns `false` (and writes nothing)
    /// when out of range.
    fn set(&mut self, row: usize, col: usize, value: Self::Value) -> bool;

    /// Iterates the column indices of `row` that hold an edge, in ascending order.
    ///
    /// An out-of-range row yields nothing.
    fn row_neighbours(&self, row: usize) -> Self::RowNeighbours<'_>;

    /// Whether the stored values are pure presence indicators.
    ///
    /// Weighted stores answer `false`; neighbourhood queries refuse them.
    #[inline]
    fn supports_boolean_adjacency(&self) -> bool {
        <Self::Value as EdgeValue>::PRESENCE_ONLY
    }

    /// Whether `(row, col)` holds an edge.
    #[inline]
    fn has_edge(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|v| v.is_present())
    }

    /// Number of `(row, col)` entries holding an edge.
    fn stored_edges(&self) -> usize {
        (0..self.rows()).map(|r| self.row_neighbours(r).count()).sum()
    }
}
