//! Types

mod spacing;
pub use spacing::MeshSpacing;

use mpi::traits::Equivalence;
use num::Float;
use std::fmt::Debug;

/// Scalar types that grid coordinates can be computed with
pub trait RealScalar: Float + Debug + Equivalence + 'static {}

impl RealScalar for f32 {}
impl RealScalar for f64 {}

/// Coordinate axes of the grid
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Axis {
    /// First decomposed axis
    X,
    /// Second decomposed axis
    Y,
    /// Replicated axis; never decomposed across ranks
    Z,
}

impl Axis {
    /// All axes in storage order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Storage index of this axis
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}
