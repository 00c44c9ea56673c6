//! Rectangular lattices.
//!
//! Cells are numbered row-major: the cell in row `i`, column `j` of a
//! `width x height` lattice is node `i * width + j`. All neighbourhoods are
//! clipped at the boundary; there is no wrap-around. A `width x height` whose
//! cell count overflows `usize` yields no edges.

use super::exact_sqrt;
use crate::error::InvalidShape;
use crate::graph::Graph;
use crate::store::AdjacencyStore;

/// Pairs each cell with every in-bounds cell of its 3x3 block accepted by
/// `include(row_moved, col_moved)`.
fn block_edges(width: usize, height: usize, include: fn(bool, bool) -> bool) -> Vec<(usize, usize)> {
    let Some(cells) = width.checked_mul(height) else {
        return Vec::new();
    };
    let mut pairs = Vec::with_capacity(cells.saturating_mul(8));
    for i in 0..height {
        for j in 0..width {
            let cell = i * width + j;
            for ii in i.saturating_sub(1)..=(i + 1).min(height - 1) {
                for jj in j.saturating_sub(1)..=(j + 1).min(width - 1) {
                    if (ii, jj) != (i, j) && include(ii != i, jj != j) {
                        pairs.push((cell, ii * width + jj));
                    }
                }
            }
        }
    }
    pairs
}

/// Von Neumann neighbourhood: up, down, left, right.
pub fn grid4_edges(width: usize, height: usize) -> Vec<(usize, usize)> {
    block_edges(width, height, |row_moved, col_moved| !(row_moved && col_moved))
}

/// Moore neighbourhood: all eight surrounding cells.
pub fn grid8_edges(width: usize, height: usize) -> Vec<(usize, usize)> {
    block_edges(width, height, |_, _| true)
}

/// Hexagonal neighbourhood on an offset lattice.
///
/// Every cell links up, down, left and right. Even rows add the up-left and
/// down-left diagonals, odd rows the up-right and down-right ones.
pub fn grid6_edges(width: usize, height: usize) -> Vec<(usize, usize)> {
    let Some(cells) = width.checked_mul(height) else {
        return Vec::new();
    };
    let mut pairs = Vec::with_capacity(cells.saturating_mul(6));
    for i in 0..height {
        for j in 0..width {
            let cell = i * width + j;
            let up = i > 0;
            let down = i + 1 < height;
            let left = j > 0;
            let right = j + 1 < width;

            if up {
                pairs.push((cell, cell - width));
            }
            if down {
                pairs.push((cell, cell + width));
            }
            if left {
                pairs.push((cell, cell - 1));
            }
            if right {
                pairs.push((cell, cell + 1));
            }

            let diagonal = if i % 2 == 1 {
                right.then(|| j + 1)
            } else {
                left.then(|| j - 1)
            };
            if let Some(col) = diagonal {
                if up {
                    pairs.push((cell, (i - 1) * width + col));
                }
                if down {
                    pairs.push((cell, (i + 1) * width + col));
                }
            }
        }
    }
    pairs
}

macro_rules! square_lattice {
    ($square:ident, $rect:ident, $edges:ident, $name:literal) => {
        #[doc = concat!("A square ", $name, " lattice of `nodes` cells.")]
        ///
        /// Invalid unless `nodes` is a perfect square.
        pub fn $square(nodes: usize) -> Self {
            match exact_sqrt(nodes) {
                Some(side) => Self::$rect(side, side),
                None => Self::invalid(nodes, InvalidShape::NotPerfectSquare { nodes }),
            }
        }

        #[doc = concat!("A `width x height` ", $name, " lattice.")]
        ///
        /// Valid unless the cell count overflows `usize`; such a graph has no nodes.
        pub fn $rect(width: usize, height: usize) -> Self {
            match width.checked_mul(height) {
                Some(cells) => Self::built(cells, &$edges(width, height)),
                None => Self::invalid(0, InvalidShape::DimensionsOverflow { width, height }),
            }
        }
    };
}

impl<S: AdjacencyStore + Default> Graph<S> {
    square_lattice!(grid4, grid4_with_dimensions, grid4_edges, "4-connected");
    square_lattice!(grid6, grid6_with_dimensions, grid6_edges, "6-connected (hexagonal)");
    square_lattice!(grid8, grid8_with_dimensions, grid8_edges, "8-connected");
}
