//! Error types for the trellis library.
//!
//! Only genuine precondition violations are errors. Missing nodes, missing
//! edges and empty queues are reported through `Option` or `bool`.

use thiserror::Error;

/// Failures raised by [`BoundedQueue`](crate::collections::BoundedQueue).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `add` was called while the queue held `capacity` items.
    #[error("queue has reached its capacity of {capacity} items")]
    CapacityExceeded {
        /// The configured limit that was hit.
        capacity: usize,
    },
}

/// All errors that can occur in the trellis library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A traversal or queue operation overran a bounded queue.
    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// Convenience result type for trellis operations.
pub type Result<T> = core::result::Result<T, Error>;
