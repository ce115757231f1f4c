//! Traits for MPI parallel grids
use super::Grid;
use mpi::traits::Communicator;

pub trait ParallelGrid {
    //! MPI parallel grid

    /// MPI communicator type
    type C: Communicator;

    /// Local grid type
    type LocalGrid: Grid;

    /// MPI communicator
    fn comm(&self) -> &Self::C;

    /// This process's rank
    fn rank(&self) -> usize {
        self.comm().rank() as usize
    }

    /// Local grid on the current process
    fn local_grid(&self) -> &Self::LocalGrid;
}
