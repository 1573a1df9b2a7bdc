//! Queues carrying items from the producer to the workers.
//!
//! [`BoundedQueue`] is a fixed-capacity FIFO built on crossbeam channels.
//! It supports an explicit close signal so consumers can detect exhaustion
//! without polling. The same type backs the job queue and the completion
//! sink.

mod bounded;

pub use bounded::BoundedQueue;

use crate::core::Item;

/// The queue feeding items to workers.
pub type JobQueue = BoundedQueue<Item>;

/// Result type for queue operations.
pub type QueueResult<T, I> = std::result::Result<T, QueueError<I>>;

/// Errors that can occur during queue operations.
///
/// The rejected item is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
    /// Queue is full (for `try_enqueue`)
    Full(T),
    /// Queue is closed and not accepting new items
    Closed(T),
}

impl<T> QueueError<T> {
    /// Recovers the rejected item.
    pub fn into_inner(self) -> T {
        match self {
            QueueError::Full(item) | QueueError::Closed(item) => item,
        }
    }
}

impl<T> std::fmt::Display for QueueError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueError::Full(_) => write!(f, "queue is full"),
            QueueError::Closed(_) => write!(f, "queue is closed"),
        }
    }
}

impl<T: std::fmt::Debug> std::error::Error for QueueError<T> {}
