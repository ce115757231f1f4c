//! Per-rank grid slice
use crate::{
    axis::{block_partition, AxisCoords, AxisSlice},
    error::ConfigError,
    grid::GlobalGrid,
    traits::Grid,
    types::{Axis, RealScalar},
};
use log::debug;

/// The sub-grid owned by one rank.
///
/// X and y hold this rank's contiguous slice of the global coordinate
/// arrays; z is replicated in full since it is never decomposed. Immutable
/// once derived.
#[derive(Debug, Clone)]
pub struct LocalGrid<T: RealScalar> {
    rank: usize,
    proc_coords: (usize, usize),
    axes: [AxisCoords<T>; 3],
    collocated_slices: [AxisSlice; 3],
    staggered_slices: [AxisSlice; 3],
}

impl<T: RealScalar> LocalGrid<T> {
    pub(crate) fn from_global(global: &GlobalGrid<T>, rank: usize) -> Result<Self, ConfigError> {
        let config = global.config();
        let proc_grid = &config.proc_grid;
        if rank >= proc_grid.size() {
            return Err(ConfigError::InvalidValue(format!(
                "rank {rank} is outside the {}x{} processor grid",
                proc_grid.nop_x, proc_grid.nop_y
            )));
        }
        let (x_rank, y_rank) = proc_grid.coords(rank);

        let x = block_partition(config.x.point_count(), proc_grid.nop_x, x_rank)?;
        let y = block_partition(config.y.point_count(), proc_grid.nop_y, y_rank)?;
        let z = AxisSlice {
            start: 0,
            count: config.z.point_count(),
        };
        let collocated_slices = [x, y, z];
        let staggered_slices = [
            x.staggered(config.x.staggered_count()),
            y.staggered(config.y.staggered_count()),
            z.staggered(config.z.staggered_count()),
        ];

        let axes = [
            global
                .axis_coords(Axis::X)
                .slice(collocated_slices[0], staggered_slices[0]),
            global
                .axis_coords(Axis::Y)
                .slice(collocated_slices[1], staggered_slices[1]),
            global.axis_coords(Axis::Z).clone(),
        ];

        debug!(
            "rank {rank} at ({x_rank},{y_rank}) owns x [{}..{}) and y [{}..{})",
            x.start,
            x.end(),
            y.start,
            y.end(),
        );

        Ok(Self {
            rank,
            proc_coords: (x_rank, y_rank),
            axes,
            collocated_slices,
            staggered_slices,
        })
    }

    /// Linear rank this slice belongs to
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Position of this rank in the processor grid, x coordinate first
    pub fn proc_coords(&self) -> (usize, usize) {
        self.proc_coords
    }

    /// Global extent of the collocated points owned along an axis
    pub fn collocated_slice(&self, axis: Axis) -> AxisSlice {
        self.collocated_slices[axis.index()]
    }

    /// Global extent of the staggered points owned along an axis
    pub fn staggered_slice(&self, axis: Axis) -> AxisSlice {
        self.staggered_slices[axis.index()]
    }
}

impl<T: RealScalar> Grid for LocalGrid<T> {
    type T = T;

    fn collocated(&self, axis: Axis) -> &[T] {
        self.axes[axis.index()].collocated()
    }

    fn staggered(&self, axis: Axis) -> &[T] {
        self.axes[axis.index()].staggered()
    }
}
