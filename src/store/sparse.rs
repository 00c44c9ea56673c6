//! `SparseMatrix`: per-row sorted entry lists.
//!
//! Only entries holding an edge are stored. Writing the "no edge" value removes
//! the entry, so row iteration never has to re-check presence.

use serde::{Deserialize, Serialize};

use super::{AdjacencyStore, EdgeValue};
use crate::error::StoreError;

/// A sparse `rows x cols` matrix with one sorted `(col, value)` list per row.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `get` | \(O(\log \text{degree})\) |
/// | `set` | \(O(\text{degree})\) (sorted insert) |
/// | `row_neighbours` | \(O(\text{degree})\) per row |
///
/// Deserialization rejects rows that break the invariants `set` maintains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "SparseParts<T>",
    bound(deserialize = "T: EdgeValue + Deserialize<'de>")
)]
pub struct SparseMatrix<T> {
    entries: Vec<Vec<(usize, T)>>,
    cols: usize,
}

/// Unchecked serialized form of a [`SparseMatrix`].
#[derive(Deserialize)]
struct SparseParts<T> {
    entries: Vec<Vec<(usize, T)>>,
    cols: usize,
}

impl<T: EdgeValue> TryFrom<SparseParts<T>> for SparseMatrix<T> {
    type Error = StoreError;

    fn try_from(parts: SparseParts<T>) -> Result<Self, StoreError> {
        let SparseParts { entries, cols } = parts;
        for (row, list) in entries.iter().enumerate() {
            if list.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
                return Err(StoreError::UnsortedRow { row });
            }
            for &(column, value) in list {
                if column >= cols {
                    return Err(StoreError::ColumnOutOfRange { row, column, columns: cols });
                }
                if !value.is_present() {
                    return Err(StoreError::AbsentEntry { row, column });
                }
            }
        }
        Ok(Self { entries, cols })
    }
}

impl<T: EdgeValue> SparseMatrix<T> {
    /// Creates a `rows x cols` matrix with no edges.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            entries: vec![Vec::new(); rows],
            cols,
        }
    }

    /// Returns the stored `(col, value)` entries of a row, sorted by column.
    pub fn row(&self, row: usize) -> Option<&[(usize, T)]> {
        self.entries.get(row).map(Vec::as_slice)
    }

    /// Number of stored entries.
    pub fn non_zeros(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }
}

impl<T: EdgeValue> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: EdgeValue> AdjacencyStore for SparseMatrix<T> {
    type Value = T;
    type RowNeighbours<'a> = SparseRowNeighbours<'a, T> where Self: 'a;

    #[inline(always)]
    fn rows(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    fn columns(&self) -> usize {
        self.cols
    }

    fn resize(&mut self, rows: usize, columns: usize) {
        self.entries.resize_with(rows, Vec::new);
        if columns < self.cols {
            for row in &mut self.entries {
                // Rows are sorted, so the out-of-range tail is contiguous.
                let keep = row.partition_point(|&(c, _)| c < columns);
                row.truncate(keep);
            }
        }
        self.cols = columns;
    }

    fn reset(&mut self) {
        for row in &mut self.entries {
            row.clear();
        }
    }

    fn get(&self, row: usize, col: usize) -> Option<T> {
        if col >= self.cols {
            return None;
        }
        let entries = self.entries.get(row)?;
        match entries.binary_search_by_key(&col, |&(c, _)| c) {
            Ok(pos) => Some(entries[pos].1),
            Err(_) => Some(T::default()),
        }
    }

    fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if col >= self.cols {
            return false;
        }
        let Some(entries) = self.entries.get_mut(row) else {
            return false;
        };
        match entries.binary_search_by_key(&col, |&(c, _)| c) {
            Ok(pos) => {
                if value.is_present() {
                    entries[pos].1 = value;
                } else {
                    entries.remove(pos);
                }
            }
            Err(pos) => {
                if value.is_present() {
                    entries.insert(pos, (col, value));
                }
            }
        }
        true
    }

    #[inline]
    fn row_neighbours(&self, row: usize) -> SparseRowNeighbours<'_, T> {
        SparseRowNeighbours {
            inner: self.row(row).unwrap_or(&[]).iter(),
        }
    }

    fn stored_edges(&self) -> usize {
        self.non_zeros()
    }
}

/// Row iterator for [`SparseMatrix`]: walks the stored entries of one row.
pub struct SparseRowNeighbours<'a, T> {
    inner: std::slice::Iter<'a, (usize, T)>,
}

impl<'a, T> Iterator for SparseRowNeighbours<'a, T> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.inner.next().map(|&(col, _)| col)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for SparseRowNeighbours<'a, T> {}
