//! Mesh spacing

/// Distribution of grid points along an axis
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeshSpacing {
    /// Equally spaced points
    Uniform,
    /// Points clustered towards both ends of the axis by a tanh transform
    TanhClustered,
}
