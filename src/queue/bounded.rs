//! Bounded, closable FIFO queue.

use super::{QueueError, QueueResult};
use crossbeam::channel::{self, Receiver, Sender, TrySendError};
use parking_lot::Mutex;

/// A bounded FIFO queue with an explicit close signal.
///
/// Any number of threads may consume from the queue. Closing drops the
/// internal sender, so consumers blocked in [`dequeue`](Self::dequeue) wake
/// up once the remaining items have been drained and observe `None`.
///
/// # Example
///
/// ```rust
/// use assembly_line::queue::{BoundedQueue, QueueError};
///
/// let queue = BoundedQueue::new(2);
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
///
/// // Queue is now full - try_enqueue hands the item back
/// match queue.try_enqueue(3) {
///     Err(QueueError::Full(item)) => assert_eq!(item, 3),
///     _ => panic!("expected Full error"),
/// }
///
/// queue.close();
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct BoundedQueue<T> {
    sender: Mutex<Option<Sender<T>>>,
    receiver: Receiver<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates a new bounded queue with the specified capacity.
    ///
    /// A capacity of 0 is raised to 1 so the queue never degrades into a
    /// rendezvous channel.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, receiver) = channel::bounded(capacity);
        Self {
            sender: Mutex::new(Some(sender)),
            receiver,
            capacity,
        }
    }

    /// Returns the maximum capacity of this queue.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends an item, blocking while the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Closed`] with the item if the queue was closed.
    pub fn enqueue(&self, item: T) -> QueueResult<(), T> {
        // Send on a clone so a blocked send never holds the lock `close` needs.
        let sender = self.sender.lock().clone();
        match sender {
            Some(sender) => sender.send(item).map_err(|e| QueueError::Closed(e.0)),
            None => Err(QueueError::Closed(item)),
        }
    }

    /// Appends an item without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Full`] if there is no room and
    /// [`QueueError::Closed`] if the queue was closed. The item is handed back
    /// in both cases.
    pub fn try_enqueue(&self, item: T) -> QueueResult<(), T> {
        let guard = self.sender.lock();
        match guard.as_ref() {
            Some(sender) => sender.try_send(item).map_err(|e| match e {
                TrySendError::Full(item) => QueueError::Full(item),
                TrySendError::Disconnected(item) => QueueError::Closed(item),
            }),
            None => Err(QueueError::Closed(item)),
        }
    }

    /// Signals that no more items will arrive.
    ///
    /// Never waits on a producer blocked in [`enqueue`](Self::enqueue); that
    /// item is still delivered once there is room.
    ///
    /// Returns `true` for the call that closed the queue and `false` for any
    /// later call.
    pub fn close(&self) -> bool {
        self.sender.lock().take().is_some()
    }

    /// Whether the queue has been closed. Items may still be buffered.
    pub fn is_closed(&self) -> bool {
        self.sender.lock().is_none()
    }

    /// Removes the next item, blocking while the queue is empty and open.
    ///
    /// Returns `None` once the queue is closed and drained.
    pub fn dequeue(&self) -> Option<T> {
        self.receiver.recv().ok()
    }

    /// Removes every buffered item without blocking.
    pub fn drain(&self) -> Vec<T> {
        self.receiver.try_iter().collect()
    }

    /// Number of buffered items.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether no items are buffered.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl<T> std::fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("closed", &self.is_closed())
            .finish()
    }
}
