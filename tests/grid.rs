//! End-to-end checks of grid generation and partitioning (serial paths;
//! the MPI paths are exercised by the `test_parallel_grid` binary under
//! `mpirun`).
use approx::assert_relative_eq;
use itertools::Itertools;
use stagrid::{
    traits::Grid,
    types::{Axis, MeshSpacing},
    AxisConfig, ConfigError, GlobalGrid, GridConfig, ProcGrid, StaggeredGridBuilder,
};

fn quadrant_config() -> GridConfig<f64> {
    GridConfig {
        x: AxisConfig::uniform(6, 1.0),
        y: AxisConfig::uniform(6, 1.0),
        z: AxisConfig::uniform(6, 1.0),
        proc_grid: ProcGrid { nop_x: 2, nop_y: 2 },
    }
}

#[test]
fn uniform_axes_have_constant_spacing() {
    let grid = GlobalGrid::new(quadrant_config()).unwrap();
    for axis in Axis::ALL {
        for (a, b) in grid.collocated(axis).iter().tuple_windows() {
            assert_relative_eq!(b - a, 1.0 / 64.0, epsilon = 1e-14);
        }
        for (a, b) in grid.staggered(axis).iter().tuple_windows() {
            assert_relative_eq!(b - a, 1.0 / 64.0, epsilon = 1e-14);
        }
    }
}

#[test]
fn stretched_axis_clusters_at_both_ends() {
    let grid = GlobalGrid::new(GridConfig {
        x: AxisConfig::tanh_clustered(6, 1.0, 2.0),
        y: AxisConfig::uniform(6, 1.0),
        z: AxisConfig::uniform(6, 1.0),
        proc_grid: ProcGrid { nop_x: 1, nop_y: 1 },
    })
    .unwrap();

    let spacings = grid
        .collocated(Axis::X)
        .iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect_vec();
    let mid = spacings.len() / 2;

    // Strictly positive everywhere, widening towards the middle and
    // narrowing back towards the far end.
    for d in &spacings {
        assert!(*d > 0.0);
    }
    for i in 0..mid {
        assert!(spacings[i] <= spacings[i + 1] + 1e-15);
    }
    for i in mid..spacings.len() - 1 {
        assert!(spacings[i] >= spacings[i + 1] - 1e-15);
    }
    assert!(spacings[0] < spacings[mid] / 2.0);
}

#[test]
fn staggered_points_interleave_collocated_points() {
    let grid = GlobalGrid::new(GridConfig {
        x: AxisConfig::tanh_clustered(5, 2.0, 1.5),
        y: AxisConfig::uniform(5, 1.0),
        z: AxisConfig::tanh_clustered(5, 1.0, 3.0),
        proc_grid: ProcGrid { nop_x: 1, nop_y: 1 },
    })
    .unwrap();

    for axis in Axis::ALL {
        let c = grid.collocated(axis);
        let s = grid.staggered(axis);
        assert_eq!(s.len(), c.len() - 1);
        for i in 0..s.len() {
            assert!(c[i] < s[i] && s[i] < c[i + 1]);
        }
    }
}

#[test]
fn local_slices_reconstruct_global_axes_exactly() {
    for beta in [0.0, 1.7] {
        let spacing = if beta > 0.0 {
            MeshSpacing::TanhClustered
        } else {
            MeshSpacing::Uniform
        };
        let grid = GlobalGrid::new(GridConfig {
            x: AxisConfig {
                size_index: 6,
                spacing,
                length: 1.0,
                beta,
            },
            y: AxisConfig::uniform(5, 1.0),
            z: AxisConfig::uniform(4, 1.0),
            proc_grid: ProcGrid { nop_x: 3, nop_y: 2 },
        })
        .unwrap();

        // Walk one row of the processor grid and concatenate the x slices.
        let mut collocated = Vec::new();
        let mut staggered = Vec::new();
        for x_rank in 0..3 {
            let local = grid.partition(x_rank).unwrap();
            collocated.extend_from_slice(local.collocated(Axis::X));
            staggered.extend_from_slice(local.staggered(Axis::X));
        }
        assert_eq!(collocated, grid.collocated(Axis::X));
        assert_eq!(staggered, grid.staggered(Axis::X));
    }
}

#[test]
fn quadrant_scenario_extents() {
    let grid = GlobalGrid::new(quadrant_config()).unwrap();

    let expected = |axis_rank: usize| if axis_rank == 0 { 33 } else { 32 };
    for rank in 0..4 {
        let local = grid.partition(rank).unwrap();
        let (x_rank, y_rank) = local.proc_coords();
        assert_eq!(local.point_count(Axis::X), expected(x_rank));
        assert_eq!(local.point_count(Axis::Y), expected(y_rank));

        // z replicated in full.
        assert_eq!(local.collocated(Axis::Z), grid.collocated(Axis::Z));
        assert_eq!(local.staggered_count(Axis::Z), 64);
    }

    assert_eq!(grid.partition(0).unwrap().proc_coords(), (0, 0));
    assert_eq!(grid.partition(3).unwrap().proc_coords(), (1, 1));
}

#[test]
fn builder_decodes_the_positional_buffers() {
    let mut builder = StaggeredGridBuilder::new();
    builder
        .init(&[6, 6, 6, 0, 0, 0, 2, 2], &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0])
        .unwrap();
    let grid = builder.create_grid().unwrap();
    assert_eq!(grid.point_count(Axis::X), 65);
    // Mesh flags say uniform, so the betas are ignored.
    assert_relative_eq!(
        grid.collocated(Axis::X)[1] - grid.collocated(Axis::X)[0],
        1.0 / 64.0,
        epsilon = 1e-14
    );
}

#[test]
fn short_real_buffer_fails_with_wrong_arity() {
    let mut builder = StaggeredGridBuilder::<f64>::new();
    let err = builder
        .init(&[6, 6, 6, 0, 0, 0, 2, 2], &[1.0, 1.0, 1.0, 1.0, 1.0])
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::WrongArity {
            buffer: "real parameter",
            expected: 6,
            actual: 5,
        }
    );
}

#[test]
fn queries_before_init_fail_with_not_initialized() {
    let builder = StaggeredGridBuilder::<f64>::new();
    assert!(matches!(
        builder.create_grid(),
        Err(ConfigError::NotInitialized)
    ));
    assert!(matches!(
        builder.config(),
        Err(ConfigError::NotInitialized)
    ));
}

#[test]
fn too_many_ranks_for_an_axis_fails_with_indivisible() {
    let config = GridConfig {
        x: AxisConfig::<f64>::uniform(1, 1.0),
        y: AxisConfig::uniform(6, 1.0),
        z: AxisConfig::uniform(6, 1.0),
        proc_grid: ProcGrid { nop_x: 5, nop_y: 1 },
    };
    assert_eq!(
        GlobalGrid::new(config).unwrap_err(),
        ConfigError::Indivisible { points: 3, ranks: 5 }
    );
}

#[cfg(feature = "serde")]
#[test]
fn ron_round_trip_preserves_the_configuration() {
    let config = GridConfig {
        x: AxisConfig::<f64>::tanh_clustered(6, 2.0, 1.1),
        y: AxisConfig::uniform(5, 1.0),
        z: AxisConfig::uniform(4, 0.5),
        proc_grid: ProcGrid { nop_x: 3, nop_y: 2 },
    };
    assert_eq!(
        GridConfig::<f64>::from_ron_string(&config.to_ron_string()),
        config
    );
}
