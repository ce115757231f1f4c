//! Block partitioning of a global axis across ranks
use crate::error::ConfigError;
use std::ops::Range;

/// Contiguous sub-range of a global axis owned by one rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSlice {
    /// Global index of the first owned point
    pub start: usize,
    /// Number of owned points
    pub count: usize,
}

impl AxisSlice {
    /// One past the last owned global index
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    /// Owned global index range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The staggered sub-range paired with this collocated sub-range.
    ///
    /// Staggered point `i` sits between collocated points `i` and `i + 1`
    /// and belongs to the rank owning its lower neighbour, so the slice is
    /// this one clipped to the staggered array length.
    pub fn staggered(&self, staggered_len: usize) -> AxisSlice {
        let end = self.end().min(staggered_len);
        AxisSlice {
            start: self.start,
            count: end - self.start,
        }
    }
}

/// Split `points` across `ranks`, giving the remainder to the lowest ranks.
///
/// Every rank receives `points / ranks` points and the `points % ranks`
/// lowest-indexed ranks one more, so the slices are disjoint, contiguous,
/// and cover the axis exactly. Every rank can compute every other rank's
/// slice from the same three integers, so no communication is needed.
pub fn block_partition(points: usize, ranks: usize, rank: usize) -> Result<AxisSlice, ConfigError> {
    if ranks == 0 || ranks > points {
        return Err(ConfigError::Indivisible { points, ranks });
    }
    debug_assert!(rank < ranks);
    let base = points / ranks;
    let remainder = points % ranks;
    let count = base + usize::from(rank < remainder);
    let start = rank * base + rank.min(remainder);
    Ok(AxisSlice { start, count })
}
