use crate::schedule::ScheduleError;
use crate::store::StoreError;
use crate::types::{ItemId, ItemNameError, ItemTypeError, PageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by repository operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid cleaning interval: {0}")]
    InvalidInterval(#[from] ScheduleError),

    #[error("invalid pagination: {0}")]
    InvalidPagination(#[from] PageError),

    #[error("clothing item not found: {0}")]
    NotFound(ItemId),

    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Schedule(schedule) => Error::InvalidInterval(schedule),
            other => Error::Store(other),
        }
    }
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid name: {0}")]
    Name(#[from] ItemNameError),

    #[error("invalid clothing item type: {0}")]
    ItemType(#[from] ItemTypeError),

    #[error("last_cleaned predates the unix epoch")]
    LastCleanedBeforeEpoch,
}
