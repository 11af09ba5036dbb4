use thiserror::Error;
use wg_core::MoverId;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("mover {0} is not in the registry")]
    UnknownMover(MoverId),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
