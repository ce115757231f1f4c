//! Parallel grid checks, run under mpirun.
use mpi::{
    datatype::PartitionMut,
    environment::Universe,
    traits::{Communicator, Root},
};
use stagrid::{
    axis::block_partition,
    traits::{Grid as _, ParallelGrid as _},
    types::{Axis, MeshSpacing},
    AxisConfig, ConfigError, GridConfig, ParallelGrid, ProcGrid,
};

fn row_config(comm: &impl Communicator) -> GridConfig<f64> {
    GridConfig {
        x: AxisConfig::uniform(6, 1.0),
        y: AxisConfig::uniform(6, 1.0),
        z: AxisConfig::uniform(6, 1.0),
        proc_grid: ProcGrid {
            nop_x: comm.size() as usize,
            nop_y: 1,
        },
    }
}

/// Gathering every rank's local x slice in rank order must reconstruct the
/// global axis bit-for-bit.
fn test_axis_round_trip<C: Communicator>(comm: &C) {
    let size = comm.size() as usize;
    let grid = ParallelGrid::new(comm, row_config(comm)).unwrap();
    let local_x = grid.local_grid().collocated(Axis::X);

    let n = grid.global_grid().point_count(Axis::X);
    if comm.rank() == 0 {
        let counts = (0..size)
            .map(|rank| block_partition(n, size, rank).unwrap().count as i32)
            .collect::<Vec<_>>();
        let displs = counts
            .iter()
            .scan(0, |acc, &c| {
                let old = *acc;
                *acc += c;
                Some(old)
            })
            .collect::<Vec<_>>();

        let mut gathered = vec![0f64; n];
        let mut partition = PartitionMut::new(&mut gathered[..], &counts[..], &displs[..]);
        comm.this_process()
            .gather_varcount_into_root(local_x, &mut partition);

        assert_eq!(gathered, grid.global_grid().collocated(Axis::X));
    } else {
        comm.process_at_rank(0).gather_varcount_into(local_x);
    }
}

/// A processor grid that does not match the communicator size must fail on
/// every rank.
fn test_process_grid_mismatch<C: Communicator>(comm: &C) {
    let size = comm.size() as usize;
    let mut config = row_config(comm);
    config.proc_grid = ProcGrid {
        nop_x: size + 1,
        nop_y: 1,
    };
    let err = ParallelGrid::new(comm, config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::ProcessGridMismatch {
            nop_x: size + 1,
            nop_y: 1,
            world_size: size,
        }
    );
}

/// A rank failing local validation must not stall its peers, and the peers
/// must observe the failure too.
fn test_peer_failure_is_observed_everywhere<C: Communicator>(comm: &C) {
    if comm.size() < 2 {
        return;
    }
    let mut config = row_config(comm);
    if comm.rank() == 0 {
        config.x.beta = -1.0;
    }
    let err = ParallelGrid::new(comm, config).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue(_)));
}

/// The concrete 2x2 scenario: 65-point axes split 33/32, uniform spacing
/// 1/64, full z axis replicated on every rank.
fn test_quadrant_scenario<C: Communicator>(comm: &C) {
    if comm.size() != 4 {
        return;
    }
    let config = GridConfig {
        x: AxisConfig::uniform(6, 1.0),
        y: AxisConfig::uniform(6, 1.0),
        z: AxisConfig::uniform(6, 1.0),
        proc_grid: ProcGrid { nop_x: 2, nop_y: 2 },
    };
    assert_eq!(config.x.spacing, MeshSpacing::Uniform);

    let grid = ParallelGrid::new(comm, config).unwrap();
    let local = grid.local_grid();
    let (x_rank, y_rank) = local.proc_coords();

    let expected = |axis_rank: usize| if axis_rank == 0 { 33 } else { 32 };
    assert_eq!(local.point_count(Axis::X), expected(x_rank));
    assert_eq!(local.point_count(Axis::Y), expected(y_rank));
    assert_eq!(local.point_count(Axis::Z), 65);
    assert_eq!(local.staggered_count(Axis::Z), 64);

    let x = local.collocated(Axis::X);
    for i in 1..x.len() {
        assert!((x[i] - x[i - 1] - 1.0 / 64.0).abs() < 1e-14);
    }
}

fn main() {
    let universe: Universe = mpi::initialize().unwrap();
    let world = universe.world();
    let rank = world.rank();

    if rank == 0 {
        println!("Testing axis round trip");
    }
    test_axis_round_trip(&world);

    if rank == 0 {
        println!("Testing process grid mismatch");
    }
    test_process_grid_mismatch(&world);

    if rank == 0 {
        println!("Testing peer failure agreement");
    }
    test_peer_failure_is_observed_everywhere(&world);

    if rank == 0 {
        println!("Testing quadrant scenario");
    }
    test_quadrant_scenario(&world);
}
