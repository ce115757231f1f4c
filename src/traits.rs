//! Trait definitions

mod grid;
mod parallel;

pub use grid::Grid;
pub use parallel::ParallelGrid;
