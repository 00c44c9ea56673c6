//! Word-packed visited set for traversals over fixed-size graphs.
//!
//! Traversals keep their "seen" bookkeeping in one place so the storage choice
//! (one bit per node) does not leak into the algorithms.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense visited set, one bit per node.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    bits: usize,
}

impl VisitedSet {
    #[inline]
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0; (bits + WORD_BITS - 1) / WORD_BITS],
            bits,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.bits
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    ///
    /// Nodes outside the set are never reported as newly visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        if node >= self.bits {
            return false;
        }
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// Number of visited nodes.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::VisitedSet;

    #[test]
    fn visited_set_marks_once() {
        let mut v = VisitedSet::new(130);
        assert_eq!(v.len(), 130);
        assert!(v.try_visit(0));
        assert!(v.try_visit(129));
        assert!(!v.try_visit(129));
        assert!(!v.try_visit(0));
        assert!(v.try_visit(64));
        assert_eq!(v.count(), 3);
    }

    #[test]
    fn visited_set_ignores_out_of_range() {
        let mut v = VisitedSet::new(3);
        assert!(!v.try_visit(3));
        assert_eq!(v.count(), 0);
    }
}
