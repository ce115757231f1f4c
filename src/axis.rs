//! Per-axis coordinate generation and partitioning

mod coords;
mod partition;

pub use coords::AxisCoords;
pub use partition::{block_partition, AxisSlice};
