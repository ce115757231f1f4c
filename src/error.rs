//! Error types
use thiserror::Error;

/// Errors raised while configuring a grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A parameter buffer does not have the documented length
    #[error("{buffer} buffer has {actual} entries, expected {expected}")]
    WrongArity {
        /// Name of the offending buffer
        buffer: &'static str,
        /// Documented length
        expected: usize,
        /// Length that was passed in
        actual: usize,
    },
    /// A parameter is outside its valid range
    #[error("invalid configuration: {0}")]
    InvalidValue(String),
    /// The processor grid does not match the number of running processes
    #[error("processor grid {nop_x}x{nop_y} does not match {world_size} running processes")]
    ProcessGridMismatch {
        /// Ranks along the x axis
        nop_x: usize,
        /// Ranks along the y axis
        nop_y: usize,
        /// Size of the communicator
        world_size: usize,
    },
    /// More ranks than points along a decomposed axis
    #[error("cannot distribute {points} points across {ranks} ranks")]
    Indivisible {
        /// Points on the global axis
        points: usize,
        /// Ranks assigned to the axis
        ranks: usize,
    },
    /// The builder was queried before a successful initialisation
    #[error("grid has not been initialised")]
    NotInitialized,
}

impl ConfigError {
    /// Nonzero discriminant reduced across ranks so that all ranks agree on failure
    pub(crate) fn code(&self) -> i32 {
        match self {
            ConfigError::WrongArity { .. } => 1,
            ConfigError::InvalidValue(_) => 2,
            ConfigError::ProcessGridMismatch { .. } => 3,
            ConfigError::Indivisible { .. } => 4,
            ConfigError::NotInitialized => 5,
        }
    }
}
