use thiserror::Error;
use wg_core::{CoreError, MoverId};
use wg_registry::RegistryError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("mover {0} is not in the registry")]
    UnknownMover(MoverId),
}

pub type SimResult<T> = Result<T, SimError>;
