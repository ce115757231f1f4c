//! Ready-made grids
use crate::{
    config::{AxisConfig, GridConfig, ProcGrid},
    grid::GlobalGrid,
    types::RealScalar,
};

const SERIAL: ProcGrid = ProcGrid { nop_x: 1, nop_y: 1 };

/// Create a uniform grid over the unit cube.
///
/// Each axis has `2^size_index + 1` collocated points between 0 and 1.
///
/// # Panics
///
/// Panics if `size_index` is outside the supported range.
pub fn unit_cube<T: RealScalar>(size_index: u32) -> GlobalGrid<T> {
    let axis = AxisConfig::uniform(size_index, T::one());
    match GlobalGrid::new(GridConfig {
        x: axis,
        y: axis,
        z: axis,
        proc_grid: SERIAL,
    }) {
        Ok(grid) => grid,
        Err(e) => panic!("Unsupported cube configuration: {e}"),
    }
}

/// Create a unit cube grid with tanh clustering towards every face.
///
/// # Panics
///
/// Panics if `size_index` or `beta` is outside the supported range.
pub fn stretched_cube<T: RealScalar>(size_index: u32, beta: T) -> GlobalGrid<T> {
    let axis = AxisConfig::tanh_clustered(size_index, T::one(), beta);
    match GlobalGrid::new(GridConfig {
        x: axis,
        y: axis,
        z: axis,
        proc_grid: SERIAL,
    }) {
        Ok(grid) => grid,
        Err(e) => panic!("Unsupported cube configuration: {e}"),
    }
}

/// Create a channel-flow grid: uniform streamwise (x) and spanwise (y)
/// axes, wall-normal (z) points clustered towards both walls.
///
/// # Panics
///
/// Panics if `size_index`, a length, or `beta_z` is outside the supported
/// range.
pub fn channel<T: RealScalar>(size_index: u32, lengths: [T; 3], beta_z: T) -> GlobalGrid<T> {
    match GlobalGrid::new(GridConfig {
        x: AxisConfig::uniform(size_index, lengths[0]),
        y: AxisConfig::uniform(size_index, lengths[1]),
        z: AxisConfig::tanh_clustered(size_index, lengths[2], beta_z),
        proc_grid: SERIAL,
    }) {
        Ok(grid) => grid,
        Err(e) => panic!("Unsupported channel configuration: {e}"),
    }
}
