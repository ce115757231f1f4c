//! MPI parallel grids
use crate::{
    config::GridConfig,
    error::ConfigError,
    grid::{GlobalGrid, LocalGrid},
    traits,
    traits::Grid,
    types::{Axis, RealScalar},
};
use log::debug;
use mpi::{
    collective::SystemOperation,
    traits::{Communicator, CommunicatorCollectives},
};

/// A grid distributed over a rectangular processor grid on an MPI
/// communicator.
///
/// Holds the redundantly computed global arrays alongside this rank's
/// slice; both are immutable after construction.
pub struct ParallelGrid<'a, C: Communicator, T: RealScalar> {
    comm: &'a C,
    global: GlobalGrid<T>,
    local: LocalGrid<T>,
}

impl<'a, C: Communicator, T: RealScalar> ParallelGrid<'a, C, T> {
    /// Validate `config` collectively and build this rank's grid.
    ///
    /// Collective over `comm`: every rank must call this, including ranks
    /// whose local validation failed. The single max-reduction inside is
    /// both the only communication and the agreement point on failure, so
    /// either every rank receives a grid or every rank receives an error
    /// and nobody stalls.
    pub fn new(comm: &'a C, config: GridConfig<T>) -> Result<Self, ConfigError> {
        let local_check = check_local(comm, &config);

        let code = local_check.as_ref().err().map_or(0, ConfigError::code);
        let mut peer_code = 0;
        comm.all_reduce_into(&code, &mut peer_code, SystemOperation::max());

        local_check?;
        if peer_code != 0 {
            return Err(ConfigError::InvalidValue(
                "configuration rejected on a peer rank".to_string(),
            ));
        }

        let global = GlobalGrid::new(config)?;
        let local = global.partition(comm.rank() as usize)?;
        debug!(
            "rank {} of {} holds {}x{}x{} collocated points",
            comm.rank(),
            comm.size(),
            local.point_count(Axis::X),
            local.point_count(Axis::Y),
            local.point_count(Axis::Z),
        );
        Ok(Self {
            comm,
            global,
            local,
        })
    }

    /// Global grid, identical on every rank
    pub fn global_grid(&self) -> &GlobalGrid<T> {
        &self.global
    }
}

fn check_local<C: Communicator, T: RealScalar>(
    comm: &C,
    config: &GridConfig<T>,
) -> Result<(), ConfigError> {
    config.validate()?;
    let world_size = comm.size() as usize;
    if config.proc_grid.size() != world_size {
        return Err(ConfigError::ProcessGridMismatch {
            nop_x: config.proc_grid.nop_x,
            nop_y: config.proc_grid.nop_y,
            world_size,
        });
    }
    Ok(())
}

impl<C: Communicator, T: RealScalar> Grid for ParallelGrid<'_, C, T> {
    type T = T;

    fn collocated(&self, axis: Axis) -> &[T] {
        self.local.collocated(axis)
    }

    fn staggered(&self, axis: Axis) -> &[T] {
        self.local.staggered(axis)
    }
}

impl<C: Communicator, T: RealScalar> traits::ParallelGrid for ParallelGrid<'_, C, T> {
    type C = C;
    type LocalGrid = LocalGrid<T>;

    fn comm(&self) -> &C {
        self.comm
    }

    fn local_grid(&self) -> &LocalGrid<T> {
        &self.local
    }
}
