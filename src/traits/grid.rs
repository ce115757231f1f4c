//! Traits for staggered grids
use crate::types::{Axis, RealScalar};

/// Read-only view of staggered coordinate arrays
pub trait Grid {
    /// Scalar type
    type T: RealScalar;

    /// Collocated (cell-vertex) coordinates along an axis
    fn collocated(&self, axis: Axis) -> &[Self::T];

    /// Staggered (cell-face) coordinates along an axis
    fn staggered(&self, axis: Axis) -> &[Self::T];

    /// Number of collocated points along an axis
    fn point_count(&self, axis: Axis) -> usize {
        self.collocated(axis).len()
    }

    /// Number of staggered points along an axis
    fn staggered_count(&self, axis: Axis) -> usize {
        self.staggered(axis).len()
    }
}
