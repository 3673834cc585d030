/*!
# Packed Triangular Indexing

A simple undirected adjacency matrix over `n` vertices needs `n^2` cells, but only the cells
strictly above the diagonal carry information if every connection is stored once under its
canonical pair `lo < hi` and loops are forbidden. [`TriangularIndex`] maps these pairs to a
dense range `0..n(n-1)/2`:

```text
slot(lo, hi) = lo * (n - 1) + hi - 1 - lo * (lo + 1) / 2
```

Slots are laid out row by row: all pairs `(0, 1), (0, 2), ..., (0, n-1)` come first, then
`(1, 2), ..., (1, n-1)` and so on. Consequently the slots of a single row `lo` form a
contiguous range, which [`TriangularIndex::row`] exposes for fast iteration.
*/

use std::ops::Range;

use crate::node::{Node, NumNodes};

/// Bijection between pairs `0 <= lo < hi < n` and `0..n(n-1)/2`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TriangularIndex {
    n: usize,
}

impl TriangularIndex {
    /// Creates the index for a `n x n` matrix.
    /// Returns `None` if the number of slots does not fit into `usize`.
    pub fn new(n: NumNodes) -> Option<Self> {
        let n = usize::try_from(n).ok()?;
        n.checked_mul(n.saturating_sub(1))?;
        Some(Self { n })
    }

    /// Dimension `n` of the underlying matrix
    pub fn dimension(&self) -> NumNodes {
        self.n as NumNodes
    }

    /// Number of slots, ie. `n(n-1)/2`
    pub fn len(&self) -> usize {
        self.n * self.n.saturating_sub(1) / 2
    }

    /// Returns *true* if there are no pairs at all (`n <= 1`)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First slot of row `lo`, ie. the slot of `(lo, lo + 1)`
    fn row_start(&self, lo: usize) -> usize {
        // lo * (n - 1) + (lo + 1) - 1 - lo * (lo + 1) / 2
        lo * self.n - lo * (lo + 1) / 2
    }

    /// Returns the slot of the canonical pair `(lo, hi)`.
    /// ** Panics in debug builds if not `lo < hi < n` **
    #[inline]
    pub fn slot_of(&self, lo: Node, hi: Node) -> usize {
        debug_assert!(lo < hi, "pair ({lo}, {hi}) is not canonical");
        debug_assert!((hi as usize) < self.n);

        let (lo, hi) = (lo as usize, hi as usize);
        lo * (self.n - 1) + hi - 1 - lo * (lo + 1) / 2
    }

    /// Returns the slot of the pair `{u, v}` in either order.
    /// ** Panics in debug builds if `u == v` **
    #[inline]
    pub fn slot_of_unordered(&self, u: Node, v: Node) -> usize {
        self.slot_of(u.min(v), u.max(v))
    }

    /// Inverse of [`TriangularIndex::slot_of`]: returns the canonical pair stored at `slot`.
    /// ** Panics in debug builds if `slot >= self.len()` **
    pub fn pair_of(&self, slot: usize) -> (Node, Node) {
        debug_assert!(slot < self.len());

        // rows are non-empty for lo in 0..n-1 and row_start is strictly increasing there:
        // find the last row starting at or before `slot`
        let (mut lb, mut ub) = (0usize, self.n - 1);
        while ub - lb > 1 {
            let mid = lb + (ub - lb) / 2;
            if self.row_start(mid) <= slot {
                lb = mid;
            } else {
                ub = mid;
            }
        }

        let hi = lb + 1 + (slot - self.row_start(lb));
        (lb as Node, hi as Node)
    }

    /// Returns the slots of all pairs `(lo, hi)` with `lo < hi < end`.
    /// The slot of `(lo, hi)` is `row.start + (hi - lo - 1)`.
    pub fn row(&self, lo: Node, end: Node) -> Range<usize> {
        debug_assert!((end as usize) <= self.n);

        let start = self.row_start(lo as usize);
        start..start + (end as usize).saturating_sub(lo as usize + 1)
    }
}
