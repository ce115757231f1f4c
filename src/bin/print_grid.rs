//! Smoke program: build a grid and print the z staggered coordinates.
use mpi::traits::Communicator;
use stagrid::{traits::Grid as _, traits::ParallelGrid as _, types::Axis, StaggeredGridBuilder};

fn main() {
    let universe = mpi::initialize().unwrap();
    let world = universe.world();
    let size = world.size();

    // The classic smoke configuration: 64^3 uniform unit cube. The domain
    // is decomposed along x only so the program runs at any process count.
    let int_params = [6, 6, 6, 0, 0, 0, size, 1];
    let real_params = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0];

    let mut builder = StaggeredGridBuilder::new();
    builder.init(&int_params, &real_params).unwrap();
    let grid = builder.create_parallel_grid(&world).unwrap();

    if grid.rank() == 0 {
        for z in grid.local_grid().staggered(Axis::Z) {
            print!("{z:.4} ");
        }
        println!();
    }
}
