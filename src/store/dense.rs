//! `DenseMatrix`: a contiguous row-major adjacency matrix.
//!
//! Every `(row, col)` pair owns a slot, so `get`/`set` are a single index
//! computation. Row iteration scans all `columns()` slots of the row and keeps
//! the ones whose value is present.

use serde::{Deserialize, Serialize};

use super::{AdjacencyStore, EdgeValue};
use crate::error::StoreError;

/// A dense `rows x cols` matrix stored row-major.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `get` / `set` | \(O(1)\) |
/// | `row_neighbours` | \(O(\text{cols})\) per row |
/// | `resize` | \(O(\text{rows} \cdot \text{cols})\) |
///
/// Deserialization rejects data whose length is not `rows * cols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "DenseParts<T>",
    bound(deserialize = "T: EdgeValue + Deserialize<'de>")
)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Unchecked serialized form of a [`DenseMatrix`].
#[derive(Deserialize)]
struct DenseParts<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: EdgeValue> TryFrom<DenseParts<T>> for DenseMatrix<T> {
    type Error = StoreError;

    fn try_from(parts: DenseParts<T>) -> Result<Self, StoreError> {
        let DenseParts { data, rows, cols } = parts;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(StoreError::DataLength {
                rows,
                columns: cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }
}

impl<T: EdgeValue> DenseMatrix<T> {
    /// Creates a `rows x cols` matrix with no edges.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Returns the raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: EdgeValue> Default for DenseMatrix<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: EdgeValue> AdjacencyStore for DenseMatrix<T> {
    type Value = T;
    type RowNeighbours<'a> = DenseRowNeighbours<'a, T> where Self: 'a;

    #[inline(always)]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    fn columns(&self) -> usize {
        self.cols
    }

    fn resize(&mut self, rows: usize, columns: usize) {
        if rows == self.rows && columns == self.cols {
            return;
        }
        let mut data = vec![T::default(); rows * columns];
        let keep_rows = rows.min(self.rows);
        let keep_cols = columns.min(self.cols);
        for r in 0..keep_rows {
            let src = r * self.cols;
            let dst = r * columns;
            data[dst..dst + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }
        self.data = data;
        self.rows = rows;
        self.cols = columns;
    }

    fn reset(&mut self) {
        self.data.fill(T::default());
    }

    #[inline(always)]
    fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    #[inline(always)]
    fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    #[inline]
    fn row_neighbours(&self, row: usize) -> DenseRowNeighbours<'_, T> {
        DenseRowNeighbours {
            row: self.row(row).unwrap_or(&[]),
            index: 0,
        }
    }
}

/// Row iterator for [`DenseMatrix`]: scans every slot and checks presence.
pub struct DenseRowNeighbours<'a, T> {
    row: &'a [T],
    index: usize,
}

impl<'a, T: EdgeValue> Iterator for DenseRowNeighbours<'a, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.index < self.row.len() {
            let col = self.index;
            self.index += 1;
            if self.row[col].is_present() {
                return Some(col);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.row.len() - self.index))
    }
}
