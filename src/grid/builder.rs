//! Grid builder
use crate::{
    config::GridConfig,
    error::ConfigError,
    grid::{GlobalGrid, ParallelGrid},
    types::RealScalar,
};
use mpi::traits::Communicator;

/// Builder for staggered grids.
///
/// A builder starts unconfigured; [`init`](StaggeredGridBuilder::init) or
/// [`with_config`](StaggeredGridBuilder::with_config) moves it to the ready
/// state, and grid creation before that fails with
/// [`ConfigError::NotInitialized`]. A builder carries one configuration for
/// its whole life: re-initialising an already configured builder is an
/// error, use a new builder for a different domain.
#[derive(Debug)]
pub struct StaggeredGridBuilder<T: RealScalar> {
    config: Option<GridConfig<T>>,
}

impl<T: RealScalar> StaggeredGridBuilder<T> {
    /// Create an unconfigured builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Create a builder from a named configuration
    pub fn with_config(config: GridConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config: Some(config),
        })
    }

    /// Decode and validate the positional parameter buffers.
    ///
    /// The buffer layout is documented on [`GridConfig::from_buffers`].
    pub fn init(
        &mut self,
        int_params: &[i32],
        real_params: &[T],
    ) -> Result<&GridConfig<T>, ConfigError> {
        if self.config.is_some() {
            return Err(ConfigError::InvalidValue(
                "builder is already initialised".to_string(),
            ));
        }
        let config = GridConfig::from_buffers(int_params, real_params)?;
        Ok(self.config.insert(config))
    }

    /// The decoded configuration
    pub fn config(&self) -> Result<&GridConfig<T>, ConfigError> {
        self.config.as_ref().ok_or(ConfigError::NotInitialized)
    }

    /// Create the global (serial) grid
    pub fn create_grid(&self) -> Result<GlobalGrid<T>, ConfigError> {
        GlobalGrid::new(self.config()?.clone())
    }

    /// Create the distributed grid for this process.
    ///
    /// Collective over `comm`; see [`ParallelGrid::new`].
    pub fn create_parallel_grid<'a, C: Communicator>(
        &self,
        comm: &'a C,
    ) -> Result<ParallelGrid<'a, C, T>, ConfigError> {
        ParallelGrid::new(comm, self.config()?.clone())
    }
}

impl<T: RealScalar> Default for StaggeredGridBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
