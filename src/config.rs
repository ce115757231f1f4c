//! Grid configuration
use crate::{
    error::ConfigError,
    types::{Axis, MeshSpacing, RealScalar},
};

/// Largest accepted resolution exponent. `2^30 + 1` points is already far
/// beyond what a single axis array can usefully hold.
pub const MAX_SIZE_INDEX: u32 = 30;

/// Number of entries in the positional integer parameter buffer
pub const INT_PARAM_LEN: usize = 8;
/// Number of entries in the positional real parameter buffer
pub const REAL_PARAM_LEN: usize = 6;

/// Resolution, spacing, and extent of a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisConfig<T: RealScalar> {
    /// Resolution exponent; the axis has `2^size_index + 1` collocated points
    pub size_index: u32,
    /// Point distribution along the axis
    pub spacing: MeshSpacing,
    /// Physical extent of the axis
    pub length: T,
    /// Tanh stretch factor; `0` gives uniform spacing regardless of `spacing`
    pub beta: T,
}

impl<T: RealScalar> AxisConfig<T> {
    /// A uniformly spaced axis
    pub fn uniform(size_index: u32, length: T) -> Self {
        Self {
            size_index,
            spacing: MeshSpacing::Uniform,
            length,
            beta: T::zero(),
        }
    }

    /// An axis with points clustered towards both ends
    pub fn tanh_clustered(size_index: u32, length: T, beta: T) -> Self {
        Self {
            size_index,
            spacing: MeshSpacing::TanhClustered,
            length,
            beta,
        }
    }

    /// Number of collocated points on the global axis
    pub fn point_count(&self) -> usize {
        (1usize << self.size_index) + 1
    }

    /// Number of staggered points on the global axis
    pub fn staggered_count(&self) -> usize {
        1usize << self.size_index
    }

    fn validate(&self, axis: &str) -> Result<(), ConfigError> {
        if !(1..=MAX_SIZE_INDEX).contains(&self.size_index) {
            return Err(ConfigError::InvalidValue(format!(
                "{axis} size index must be between 1 and {MAX_SIZE_INDEX}, got {}",
                self.size_index
            )));
        }
        if self.length <= T::zero() || !self.length.is_finite() {
            return Err(ConfigError::InvalidValue(format!(
                "{axis} length must be positive and finite, got {:?}",
                self.length
            )));
        }
        if self.beta < T::zero() || !self.beta.is_finite() {
            return Err(ConfigError::InvalidValue(format!(
                "{axis} stretch factor must be non-negative and finite, got {:?}",
                self.beta
            )));
        }
        Ok(())
    }
}

/// Rectangular arrangement of ranks over the x and y axes.
///
/// Ranks are linearised x-fastest: rank `r` sits at
/// `(r % nop_x, r / nop_x)`. The z axis is replicated on every rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcGrid {
    /// Ranks along the x axis
    pub nop_x: usize,
    /// Ranks along the y axis
    pub nop_y: usize,
}

impl ProcGrid {
    /// Total number of ranks the grid expects
    pub fn size(&self) -> usize {
        self.nop_x * self.nop_y
    }

    /// Position of a linear rank in the processor grid
    pub fn coords(&self, rank: usize) -> (usize, usize) {
        (rank % self.nop_x, rank / self.nop_x)
    }
}

/// Full grid configuration, immutable once validated.
///
/// Built either from named fields or decoded from the two positional
/// parameter buffers via [`GridConfig::from_buffers`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<T: RealScalar> {
    /// x axis configuration
    pub x: AxisConfig<T>,
    /// y axis configuration
    pub y: AxisConfig<T>,
    /// z axis configuration
    pub z: AxisConfig<T>,
    /// Processor grid shape
    pub proc_grid: ProcGrid,
}

impl<T: RealScalar> GridConfig<T> {
    /// Decode the positional parameter buffers.
    ///
    /// `int_params` holds exactly eight values,
    /// `{x_index, y_index, z_index, x_mesh, y_mesh, z_mesh, nop_x, nop_y}`,
    /// and `real_params` exactly six,
    /// `{x_len, y_len, z_len, beta_x, beta_y, beta_z}`. The order is the
    /// entire contract of this format; prefer building the struct directly.
    pub fn from_buffers(int_params: &[i32], real_params: &[T]) -> Result<Self, ConfigError> {
        if int_params.len() != INT_PARAM_LEN {
            return Err(ConfigError::WrongArity {
                buffer: "integer parameter",
                expected: INT_PARAM_LEN,
                actual: int_params.len(),
            });
        }
        if real_params.len() != REAL_PARAM_LEN {
            return Err(ConfigError::WrongArity {
                buffer: "real parameter",
                expected: REAL_PARAM_LEN,
                actual: real_params.len(),
            });
        }

        let mut axes = Vec::with_capacity(3);
        for (i, axis) in ["x", "y", "z"].iter().enumerate() {
            axes.push(AxisConfig {
                size_index: decode_size_index(int_params[i], axis)?,
                spacing: decode_spacing(int_params[3 + i], axis)?,
                length: real_params[i],
                beta: real_params[3 + i],
            });
        }

        let config = Self {
            x: axes[0],
            y: axes[1],
            z: axes[2],
            proc_grid: ProcGrid {
                nop_x: decode_rank_count(int_params[6], "x")?,
                nop_y: decode_rank_count(int_params[7], "y")?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its documented range.
    ///
    /// Pure and deterministic, so identical inputs give the identical
    /// verdict on every rank. The communicator-size check lives in
    /// [`crate::grid::ParallelGrid::new`] since it needs the communicator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.x.validate("x")?;
        self.y.validate("y")?;
        self.z.validate("z")?;
        if self.proc_grid.nop_x == 0 || self.proc_grid.nop_y == 0 {
            return Err(ConfigError::InvalidValue(format!(
                "processor grid must be non-empty, got {}x{}",
                self.proc_grid.nop_x, self.proc_grid.nop_y
            )));
        }
        if self.proc_grid.nop_x > self.x.point_count() {
            return Err(ConfigError::Indivisible {
                points: self.x.point_count(),
                ranks: self.proc_grid.nop_x,
            });
        }
        if self.proc_grid.nop_y > self.y.point_count() {
            return Err(ConfigError::Indivisible {
                points: self.y.point_count(),
                ranks: self.proc_grid.nop_y,
            });
        }
        Ok(())
    }

    /// Configuration of one axis
    pub fn axis(&self, axis: Axis) -> &AxisConfig<T> {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

fn decode_size_index(raw: i32, axis: &str) -> Result<u32, ConfigError> {
    u32::try_from(raw).ok().filter(|&i| i > 0).ok_or_else(|| {
        ConfigError::InvalidValue(format!("{axis} size index must be positive, got {raw}"))
    })
}

fn decode_spacing(raw: i32, axis: &str) -> Result<MeshSpacing, ConfigError> {
    match raw {
        0 => Ok(MeshSpacing::Uniform),
        1 => Ok(MeshSpacing::TanhClustered),
        _ => Err(ConfigError::InvalidValue(format!(
            "{axis} mesh flag must be 0 (uniform) or 1 (tanh), got {raw}"
        ))),
    }
}

fn decode_rank_count(raw: i32, axis: &str) -> Result<usize, ConfigError> {
    usize::try_from(raw).ok().filter(|&n| n > 0).ok_or_else(|| {
        ConfigError::InvalidValue(format!("{axis} rank count must be positive, got {raw}"))
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn int_params() -> [i32; 8] {
        [6, 6, 6, 0, 0, 0, 2, 2]
    }

    fn real_params() -> [f64; 6] {
        [1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
    }

    #[test]
    fn test_decode_smoke_parameters() {
        let config = GridConfig::from_buffers(&int_params(), &real_params()).unwrap();
        assert_eq!(config.x.point_count(), 65);
        assert_eq!(config.x.staggered_count(), 64);
        assert_eq!(config.x.spacing, MeshSpacing::Uniform);
        assert_eq!(config.proc_grid, ProcGrid { nop_x: 2, nop_y: 2 });
        assert_eq!(config.proc_grid.size(), 4);
    }

    #[test]
    fn test_decode_mesh_flags() {
        let mut ints = int_params();
        ints[4] = 1;
        let config = GridConfig::from_buffers(&ints, &real_params()).unwrap();
        assert_eq!(config.x.spacing, MeshSpacing::Uniform);
        assert_eq!(config.y.spacing, MeshSpacing::TanhClustered);

        ints[4] = 7;
        assert!(matches!(
            GridConfig::from_buffers(&ints, &real_params()),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_wrong_arity() {
        let err = GridConfig::from_buffers(&int_params(), &[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::WrongArity {
                buffer: "real parameter",
                expected: 6,
                actual: 5
            }
        );

        let err = GridConfig::<f64>::from_buffers(&[6, 6, 6], &real_params()).unwrap_err();
        assert!(matches!(err, ConfigError::WrongArity { expected: 8, .. }));
    }

    #[test]
    fn test_invalid_values() {
        let mut ints = int_params();
        ints[0] = 0;
        assert!(matches!(
            GridConfig::from_buffers(&ints, &real_params()),
            Err(ConfigError::InvalidValue(_))
        ));

        let mut reals = real_params();
        reals[1] = -1.0;
        assert!(matches!(
            GridConfig::from_buffers(&int_params(), &reals),
            Err(ConfigError::InvalidValue(_))
        ));

        let mut reals = real_params();
        reals[5] = -0.5;
        assert!(matches!(
            GridConfig::from_buffers(&int_params(), &reals),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_indivisible() {
        let config = GridConfig {
            x: AxisConfig::uniform(1, 1.0),
            y: AxisConfig::uniform(6, 1.0),
            z: AxisConfig::uniform(6, 1.0),
            proc_grid: ProcGrid { nop_x: 4, nop_y: 1 },
        };
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::Indivisible {
                points: 3,
                ranks: 4
            }
        );
    }

    #[test]
    fn test_rank_linearisation() {
        let proc_grid = ProcGrid { nop_x: 2, nop_y: 2 };
        assert_eq!(proc_grid.coords(0), (0, 0));
        assert_eq!(proc_grid.coords(1), (1, 0));
        assert_eq!(proc_grid.coords(2), (0, 1));
        assert_eq!(proc_grid.coords(3), (1, 1));
    }
}
