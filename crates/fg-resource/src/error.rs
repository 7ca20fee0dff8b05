use thiserror::Error;

use fg_grid::GridError;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("invalid resource definition {name:?}: {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("resource catalog must define at least one resource type")]
    EmptyCatalog,

    #[error("resource {0:?} is defined more than once")]
    DuplicateName(String),

    #[error("unknown resource type {0:?}")]
    UnknownResource(String),

    #[error("spawn probability for {name:?} must lie in [0, 1], got {probability}")]
    InvalidSpawnProbability { name: String, probability: f64 },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type ResourceResult<T> = Result<T, ResourceError>;
