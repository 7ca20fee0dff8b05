use fg_behavior::BehaviorError;
use fg_core::{AgentId, CoreError};
use fg_grid::GridError;
use fg_resource::ResourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("living agent {0} is not on the grid")]
    AgentNotPlaced(AgentId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
