//! Completion sink: an observational stream of finished items.

use crate::core::Item;
use crate::queue::{BoundedQueue, QueueError};
use log::{error, warn};
use std::time::Duration;

/// Published by a worker after it finishes one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionRecord {
    /// Worker that processed the item
    pub worker_id: usize,
    /// The processed item
    pub item: Item,
    /// Time spent processing the item
    pub elapsed: Duration,
}

/// Bounded stream of [`CompletionRecord`]s.
///
/// The sink is sized to the workload, so publishing never blocks and is never
/// rejected in a correct run. Counting does not depend on it.
#[derive(Debug)]
pub struct CompletionSink {
    queue: BoundedQueue<CompletionRecord>,
}

impl CompletionSink {
    /// Creates a sink holding up to `capacity` records.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: BoundedQueue::new(capacity),
        }
    }

    /// Publishes a record without blocking.
    ///
    /// A full sink drops the record with a warning. Publishing into a closed
    /// sink means a worker outlived the barrier join and is logged as an
    /// error.
    pub fn publish(&self, record: CompletionRecord) {
        match self.queue.try_enqueue(record) {
            Ok(()) => {}
            Err(QueueError::Full(record)) => {
                warn!(
                    "completion sink full ({} records), dropping record from worker {}",
                    self.queue.capacity(),
                    record.worker_id
                );
            }
            Err(QueueError::Closed(record)) => {
                error!(
                    "worker {} published a completion after the sink was closed",
                    record.worker_id
                );
            }
        }
    }

    /// Closes the sink. Returns `true` for the call that closed it.
    pub fn close(&self) -> bool {
        self.queue.close()
    }

    /// Removes every buffered record.
    pub fn drain(&self) -> Vec<CompletionRecord> {
        self.queue.drain()
    }

    /// Number of buffered records.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no records are buffered.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
