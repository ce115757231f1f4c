//! Global staggered grid
use crate::{
    axis::AxisCoords,
    config::GridConfig,
    error::ConfigError,
    grid::LocalGrid,
    traits::Grid,
    types::{Axis, RealScalar},
};
use log::info;

/// Global coordinate arrays for all three axes.
///
/// Every rank generates the full global grid independently; for identical
/// configurations the arrays are identical on every rank, which is what the
/// communication-free partitioning relies on.
#[derive(Debug, Clone)]
pub struct GlobalGrid<T: RealScalar> {
    config: GridConfig<T>,
    axes: [AxisCoords<T>; 3],
}

impl<T: RealScalar> GlobalGrid<T> {
    /// Validate the configuration and generate the global coordinate arrays
    pub fn new(config: GridConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        let axes = [
            AxisCoords::generate(&config.x),
            AxisCoords::generate(&config.y),
            AxisCoords::generate(&config.z),
        ];
        info!(
            "generated {}x{}x{} global grid for a {}x{} processor grid",
            axes[0].point_count(),
            axes[1].point_count(),
            axes[2].point_count(),
            config.proc_grid.nop_x,
            config.proc_grid.nop_y,
        );
        Ok(Self { config, axes })
    }

    /// The validated configuration
    pub fn config(&self) -> &GridConfig<T> {
        &self.config
    }

    /// Coordinate arrays of one axis
    pub fn axis_coords(&self, axis: Axis) -> &AxisCoords<T> {
        &self.axes[axis.index()]
    }

    /// Derive the sub-grid owned by `rank` in the processor grid.
    ///
    /// Deterministic in `rank` alone, so any rank can compute any other
    /// rank's slice.
    pub fn partition(&self, rank: usize) -> Result<LocalGrid<T>, ConfigError> {
        LocalGrid::from_global(self, rank)
    }
}

impl<T: RealScalar> Grid for GlobalGrid<T> {
    type T = T;

    fn collocated(&self, axis: Axis) -> &[T] {
        self.axes[axis.index()].collocated()
    }

    fn staggered(&self, axis: Axis) -> &[T] {
        self.axes[axis.index()].staggered()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{AxisConfig, ProcGrid};

    #[test]
    fn test_global_point_counts() {
        let grid = GlobalGrid::new(GridConfig {
            x: AxisConfig::<f64>::uniform(6, 1.0),
            y: AxisConfig::uniform(5, 2.0),
            z: AxisConfig::tanh_clustered(4, 1.0, 1.2),
            proc_grid: ProcGrid { nop_x: 1, nop_y: 1 },
        })
        .unwrap();

        assert_eq!(grid.point_count(Axis::X), 65);
        assert_eq!(grid.point_count(Axis::Y), 33);
        assert_eq!(grid.point_count(Axis::Z), 17);
        for axis in Axis::ALL {
            assert_eq!(grid.staggered_count(axis), grid.point_count(axis) - 1);
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = GlobalGrid::new(GridConfig {
            x: AxisConfig::<f64>::uniform(6, -1.0),
            y: AxisConfig::uniform(6, 1.0),
            z: AxisConfig::uniform(6, 1.0),
            proc_grid: ProcGrid { nop_x: 1, nop_y: 1 },
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}
