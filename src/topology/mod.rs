//! Deterministic topology generators.
//!
//! Each generator is a pure edge-list function (`*_edges`) plus `Graph`
//! constructors that check the size, build the edges once and record validity:
//! - `grid`: 4-, 6- and 8-connected lattices
//! - `paley`: quadratic-residue graphs, `n ≡ 1 (mod 4)`
//! - `lps`: cycle-plus-inverse graphs on a prime `n`
//! - `margulis`: expanders on a square torus
//!
//! [`TopologySpec`] describes any of them as data, e.g. from JSON.

mod grid;
mod lps;
mod margulis;
mod paley;
pub mod primality;

use core::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub use grid::{grid4_edges, grid6_edges, grid8_edges};
pub use lps::lps_edges;
pub use margulis::margulis_edges;
pub use paley::paley_edges;

use crate::error::ConfigError;
use crate::graph::Graph;
use crate::store::AdjacencyStore;

/// `Some(s)` when `n == s * s`.
pub(crate) fn exact_sqrt(n: usize) -> Option<usize> {
    let mut s = (n as f64).sqrt() as usize;
    // The float estimate can be off by one for large `n`.
    while !s.checked_mul(s).is_some_and(|sq| sq <= n) {
        s -= 1;
    }
    while (s + 1).checked_mul(s + 1).is_some_and(|sq| sq <= n) {
        s += 1;
    }
    (s * s == n).then_some(s)
}

/// The available topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    /// 4-connected square lattice.
    Grid4,
    /// 6-connected (hexagonal offset) lattice.
    Grid6,
    /// 8-connected square lattice.
    Grid8,
    /// Paley quadratic-residue graph.
    Paley,
    /// LPS-style cycle-plus-inverse graph on a prime.
    Lps,
    /// Margulis expander.
    Margulis,
}

impl TopologyKind {
    /// Every kind, in declaration order.
    pub const ALL: [TopologyKind; 6] = [
        TopologyKind::Grid4,
        TopologyKind::Grid6,
        TopologyKind::Grid8,
        TopologyKind::Paley,
        TopologyKind::Lps,
        TopologyKind::Margulis,
    ];

    /// Lowercase name, as used in serialized specs.
    pub fn name(self) -> &'static str {
        match self {
            TopologyKind::Grid4 => "grid4",
            TopologyKind::Grid6 => "grid6",
            TopologyKind::Grid8 => "grid8",
            TopologyKind::Paley => "paley",
            TopologyKind::Lps => "lps",
            TopologyKind::Margulis => "margulis",
        }
    }

    /// Whether the kind is a lattice that accepts explicit `width x height`.
    pub fn is_lattice(self) -> bool {
        matches!(self, TopologyKind::Grid4 | TopologyKind::Grid6 | TopologyKind::Grid8)
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A serializable description of a topology.
///
/// ```
/// use lattice_topology::{SparseGraph, TopologySpec};
///
/// let spec = TopologySpec::from_json(r#"{ "kind": "grid6", "width": 4, "height": 3 }"#).unwrap();
/// let graph: SparseGraph = spec.build().unwrap();
/// assert_eq!(graph.node_count(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopologySpec {
    /// Which generator to run.
    pub kind: TopologyKind,
    /// Requested node count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<usize>,
    /// Lattice width (lattices only, together with `height`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Lattice height (lattices only, together with `width`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    /// Seed for the LPS primality witnesses; thread-local randomness when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy)]
enum Size {
    Nodes(usize),
    Dimensions(usize, usize),
}

impl TopologySpec {
    /// A spec sized by node count.
    pub fn with_nodes(kind: TopologyKind, nodes: usize) -> Self {
        Self {
            kind,
            nodes: Some(nodes),
            width: None,
            height: None,
            seed: None,
        }
    }

    /// A lattice spec sized by explicit dimensions.
    pub fn with_dimensions(kind: TopologyKind, width: usize, height: usize) -> Self {
        Self {
            kind,
            nodes: None,
            width: Some(width),
            height: Some(height),
            seed: None,
        }
    }

    /// Sets the LPS witness seed.
    #[must_use]
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses and checks a JSON description.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let spec: Self = serde_json::from_str(json)?;
        spec.size()?;
        Ok(spec)
    }

    /// Serializes to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    fn size(&self) -> Result<Size, ConfigError> {
        let kind = self.kind;
        match (self.nodes, self.width, self.height) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(ConfigError::ConflictingSize { kind }),
            (Some(n), None, None) => Ok(Size::Nodes(n)),
            (None, Some(w), Some(h)) if kind.is_lattice() => Ok(Size::Dimensions(w, h)),
            (None, Some(_), _) | (None, _, Some(_)) if !kind.is_lattice() => {
                Err(ConfigError::DimensionsUnsupported { kind })
            }
            (None, Some(_), None) | (None, None, Some(_)) => Err(ConfigError::IncompleteDimensions { kind }),
            _ => Err(ConfigError::MissingSize { kind }),
        }
    }

    /// Runs the generator.
    ///
    /// Only a malformed spec is an error; a size the topology rejects yields an
    /// invalid graph, as the constructors do.
    pub fn build<S: AdjacencyStore + Default>(&self) -> Result<Graph<S>, ConfigError> {
        let graph = match (self.kind, self.size()?) {
            (TopologyKind::Grid4, Size::Nodes(n)) => Graph::grid4(n),
            (TopologyKind::Grid4, Size::Dimensions(w, h)) => Graph::grid4_with_dimensions(w, h),
            (TopologyKind::Grid6, Size::Nodes(n)) => Graph::grid6(n),
            (TopologyKind::Grid6, Size::Dimensions(w, h)) => Graph::grid6_with_dimensions(w, h),
            (TopologyKind::Grid8, Size::Nodes(n)) => Graph::grid8(n),
            (TopologyKind::Grid8, Size::Dimensions(w, h)) => Graph::grid8_with_dimensions(w, h),
            (TopologyKind::Paley, Size::Nodes(n)) => Graph::paley(n),
            (TopologyKind::Lps, Size::Nodes(n)) => match self.seed {
                Some(seed) => Graph::lps_with_rng(n, &mut StdRng::seed_from_u64(seed)),
                None => Graph::lps(n),
            },
            (TopologyKind::Margulis, Size::Nodes(n)) => Graph::margulis(n),
            (kind, Size::Dimensions(..)) => return Err(ConfigError::DimensionsUnsupported { kind }),
        };
        Ok(graph)
    }
}
