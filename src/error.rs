//! Error types.
//!
//! Topology construction is fail-soft: a size that violates a shape rule
//! produces an invalid [`Graph`](crate::Graph) carrying an [`InvalidShape`]
//! reason instead of an error return. Only configuration parsing and store
//! deserialization return `Result`.

use serde::{Deserialize, Serialize};

use crate::topology::TopologyKind;

/// Why a topology constructor left its graph invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum InvalidShape {
    /// Square lattices and the Margulis construction need `n = s * s`.
    #[error("node count {nodes} is not a perfect square")]
    NotPerfectSquare {
        /// Requested node count.
        nodes: usize,
    },

    /// Paley graphs need `n ≡ 1 (mod 4)`.
    #[error("node count {nodes} is not congruent to 1 mod 4")]
    NotOneModFour {
        /// Requested node count.
        nodes: usize,
    },

    /// The LPS construction needs a prime node count.
    #[error("node count {nodes} is not prime")]
    NotPrime {
        /// Requested node count.
        nodes: usize,
    },

    /// `width * height` does not fit in `usize`.
    #[error("lattice of {width}x{height} cells overflows usize")]
    DimensionsOverflow {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A wrapped store was not square.
    #[error("adjacency store is {rows}x{columns}, not square")]
    NotSquareMatrix {
        /// Store rows.
        rows: usize,
        /// Store columns.
        columns: usize,
    },
}

/// Why a deserialized adjacency store was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StoreError {
    /// A dense store whose data length is not `rows * columns`.
    #[error("dense store is {rows}x{columns} but holds {len} values")]
    DataLength {
        /// Declared rows.
        rows: usize,
        /// Declared columns.
        columns: usize,
        /// Values actually present.
        len: usize,
    },

    /// A sparse row whose columns are not strictly ascending.
    #[error("sparse row {row} is not sorted by column")]
    UnsortedRow {
        /// Offending row.
        row: usize,
    },

    /// A sparse entry beyond the declared column count.
    #[error("sparse entry ({row}, {column}) is outside {columns} columns")]
    ColumnOutOfRange {
        /// Offending row.
        row: usize,
        /// Offending column.
        column: usize,
        /// Declared columns.
        columns: usize,
    },

    /// A sparse entry holding the "no edge" value.
    #[error("sparse entry ({row}, {column}) stores an absent edge")]
    AbsentEntry {
        /// Offending row.
        row: usize,
        /// Offending column.
        column: usize,
    },
}

/// Errors raised while reading a [`TopologySpec`](crate::TopologySpec).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid topology description: {0}")]
    Json(#[from] serde_json::Error),

    /// Neither `nodes` nor `width`/`height` was given.
    #[error("{kind} topology needs `nodes` or `width` and `height`")]
    MissingSize {
        /// Requested topology.
        kind: TopologyKind,
    },

    /// Only one of `width`/`height` was given.
    #[error("{kind} topology needs both `width` and `height`")]
    IncompleteDimensions {
        /// Requested topology.
        kind: TopologyKind,
    },

    /// Both a node count and explicit dimensions were given.
    #[error("{kind} topology takes either `nodes` or `width`/`height`, not both")]
    ConflictingSize {
        /// Requested topology.
        kind: TopologyKind,
    },

    /// Explicit dimensions were given for a non-lattice topology.
    #[error("{kind} topology does not accept `width`/`height`")]
    DimensionsUnsupported {
        /// Requested topology.
        kind: TopologyKind,
    },
}
