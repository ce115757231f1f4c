//! Collocated and staggered coordinates along one axis
use crate::{
    axis::AxisSlice,
    config::AxisConfig,
    types::{MeshSpacing, RealScalar},
};
use itertools::Itertools;
use log::warn;

/// Coordinate arrays of a single axis.
///
/// `collocated` holds the cell-vertex coordinates, `staggered` the cell-face
/// coordinates halfway between them. Staggered points exist only between
/// collocated neighbours (no clamped boundary points), so
/// `staggered.len() == collocated.len() - 1`. Both sequences are strictly
/// increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisCoords<T: RealScalar> {
    collocated: Vec<T>,
    staggered: Vec<T>,
}

impl<T: RealScalar> AxisCoords<T> {
    /// Generate the coordinate arrays for one axis.
    ///
    /// Uniform axes place `collocated[i] = length * i / (n - 1)`. Clustered
    /// axes map the uniform parametric index through a tanh transform that
    /// concentrates points near both ends. A zero stretch factor always
    /// degenerates to uniform spacing.
    pub fn generate(config: &AxisConfig<T>) -> Self {
        let n = config.point_count();
        let collocated = match config.spacing {
            MeshSpacing::TanhClustered if config.beta > T::zero() => {
                tanh_clustered(n, config.length, config.beta)
            }
            MeshSpacing::TanhClustered => {
                warn!("tanh clustering requested with a zero stretch factor, spacing is uniform");
                uniform(n, config.length)
            }
            MeshSpacing::Uniform => uniform(n, config.length),
        };
        Self::from_collocated(collocated)
    }

    /// Build from an explicit collocated sequence; staggered points are its
    /// pairwise midpoints.
    pub(crate) fn from_collocated(collocated: Vec<T>) -> Self {
        let two = T::one() + T::one();
        let staggered = collocated
            .iter()
            .tuple_windows()
            .map(|(&a, &b)| (a + b) / two)
            .collect();
        Self {
            collocated,
            staggered,
        }
    }

    /// Copy out the sub-ranges owned by one rank
    pub(crate) fn slice(&self, collocated: AxisSlice, staggered: AxisSlice) -> Self {
        Self {
            collocated: self.collocated[collocated.range()].to_vec(),
            staggered: self.staggered[staggered.range()].to_vec(),
        }
    }

    /// Collocated (cell-vertex) coordinates
    pub fn collocated(&self) -> &[T] {
        &self.collocated
    }

    /// Staggered (cell-face) coordinates
    pub fn staggered(&self) -> &[T] {
        &self.staggered
    }

    /// Number of collocated points
    pub fn point_count(&self) -> usize {
        self.collocated.len()
    }

    /// Number of staggered points
    pub fn staggered_count(&self) -> usize {
        self.staggered.len()
    }
}

fn uniform<T: RealScalar>(n: usize, length: T) -> Vec<T> {
    let den = T::from(n - 1).unwrap();
    (0..n)
        .map(|i| length * T::from(i).unwrap() / den)
        .collect()
}

/// Map the uniform parametric grid `xi in [0, 1]` through
/// `x = length * (1 + tanh(beta * (xi - 1/2)) / tanh(beta / 2)) / 2`.
///
/// tanh is steepest at `xi = 1/2`, so the image spacing is widest mid-axis
/// and tightest at both ends; monotonicity of tanh keeps the sequence
/// strictly increasing for every positive `beta`.
fn tanh_clustered<T: RealScalar>(n: usize, length: T, beta: T) -> Vec<T> {
    let two = T::one() + T::one();
    let half = T::one() / two;
    let den = T::from(n - 1).unwrap();
    let norm = (beta * half).tanh();
    (0..n)
        .map(|i| {
            let xi = T::from(i).unwrap() / den;
            length * (T::one() + (beta * (xi - half)).tanh() / norm) / two
        })
        .collect()
}
