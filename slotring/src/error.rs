use std::collections::TryReserveError;

use thiserror::Error;

use crate::position::Position;

/// Errors returned by [`RingBuffer`](crate::RingBuffer) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// `resize` was asked for fewer slots than the buffer already has.
    #[error("cannot shrink ring buffer from {current} to {requested} slots")]
    Shrink { requested: usize, current: usize },

    #[error("ring buffer capacity must be greater than zero")]
    ZeroCapacity,

    /// The position was taken before the storage was last reallocated.
    #[error("position {position:?} is stale, storage is at generation {current}")]
    StalePosition { position: Position, current: u64 },

    #[error("offset {offset} is out of range for capacity {capacity}")]
    OutOfRange { offset: usize, capacity: usize },

    #[error("failed to allocate ring buffer storage: {0}")]
    Alloc(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, RingError>;
