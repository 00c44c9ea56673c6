//! Depth-limited neighbourhood enumeration.
//!
//! One level-synchronous BFS serves every [`AdjacencyStore`]: the only
//! storage-specific part is `row_neighbours`, which a dense store answers by
//! scanning the row and a sparse store by walking its stored entries.

use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::graph::access::visited::VisitedSet;
use crate::store::AdjacencyStore;

/// Nodes grouped by their shortest edge distance from a query node.
///
/// `level(0)` holds the query node itself and `level(d)` the nodes first
/// reached after `d` edges. Within a level nodes are in discovery order.
/// A query against a weighted store yields a value with no levels at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NeighbourLevels {
    levels: Vec<Vec<usize>>,
}

impl NeighbourLevels {
    /// `depths` empty levels.
    pub(crate) fn empty(depths: usize) -> Self {
        Self {
            levels: vec![Vec::new(); depths],
        }
    }

    /// Number of levels (`max_depth + 1` for a regular query).
    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// `true` when there are no levels, which only happens for weighted stores.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Nodes at exactly `depth` edges. Empty for depths beyond the query.
    pub fn level(&self, depth: usize) -> &[usize] {
        self.levels.get(depth).map_or(&[][..], Vec::as_slice)
    }

    /// All levels, indexed by depth.
    #[inline]
    pub fn levels(&self) -> &[Vec<usize>] {
        &self.levels
    }

    /// Iterates `(depth, nodes)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.levels.iter().map(Vec::as_slice).enumerate()
    }

    /// Total number of nodes across all levels, the query node included.
    pub fn reached(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// Depth at which `node` was reached, if it was.
    pub fn depth_of(&self, node: usize) -> Option<usize> {
        self.levels.iter().position(|level| level.contains(&node))
    }

    /// Unwraps into the raw per-depth vectors.
    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.levels
    }
}

impl Index<usize> for NeighbourLevels {
    type Output = [usize];

    fn index(&self, depth: usize) -> &[usize] {
        &self.levels[depth]
    }
}

impl IntoIterator for NeighbourLevels {
    type Item = Vec<usize>;
    type IntoIter = std::vec::IntoIter<Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.into_iter()
    }
}

impl From<NeighbourLevels> for Vec<Vec<usize>> {
    fn from(levels: NeighbourLevels) -> Self {
        levels.levels
    }
}

/// Enumerates the nodes within `max_depth` edges of `start`, level by level.
///
/// - weighted store: no levels (weighted neighbourhoods are not defined)
/// - `start` outside the store: `max_depth + 1` empty levels
/// - otherwise `max_depth + 1` levels, each node in the level of its shortest distance
///
/// Nodes are marked visited when first discovered, before they are expanded,
/// so a node reachable along several paths lands only in its nearest level.
pub fn explore<S>(store: &S, start: usize, max_depth: usize) -> NeighbourLevels
where
    S: AdjacencyStore + ?Sized,
{
    if !store.supports_boolean_adjacency() {
        debug_event!(start, max_depth, "neighbourhood query declined for weighted store");
        return NeighbourLevels::default();
    }

    let bound = store.rows().min(store.columns());
    let mut result = NeighbourLevels::empty(max_depth.saturating_add(1));
    if start >= bound {
        return result;
    }

    let mut visited = VisitedSet::new(bound);
    debug_assert_eq!(visited.len(), bound);
    visited.try_visit(start);
    result.levels[0].push(start);

    for depth in 1..=max_depth {
        // The previous level is the frontier; the current one collects the next.
        let (done, rest) = result.levels.split_at_mut(depth);
        let frontier = &done[depth - 1];
        if frontier.is_empty() {
            break;
        }
        let next = &mut rest[0];
        for &node in frontier {
            for neighbour in store.row_neighbours(node) {
                if visited.try_visit(neighbour) {
                    next.push(neighbour);
                }
            }
        }
    }

    debug_assert_eq!(visited.count(), result.reached());
    result
}
