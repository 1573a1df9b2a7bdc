//! Simulated processing of a single item.

use crate::core::Item;
use std::thread;

/// The work a worker performs on each dequeued item.
///
/// `process` blocks the calling worker until the item is done. The default
/// [`SleepProcessor`] sleeps for the item's catalog duration; any other
/// blocking operation can stand in for it.
///
/// Closures taking the worker id and the item implement this trait:
///
/// ```rust
/// use assembly_line::pool::Processor;
/// use assembly_line::Item;
///
/// let noop = |_worker_id: usize, _item: Item| {};
/// noop.process(1, Item::Light);
/// ```
pub trait Processor: Send + Sync {
    /// Process `item` on behalf of worker `worker_id`.
    fn process(&self, worker_id: usize, item: Item);
}

impl<F> Processor for F
where
    F: Fn(usize, Item) + Send + Sync,
{
    fn process(&self, worker_id: usize, item: Item) {
        self(worker_id, item)
    }
}

/// Sleeps for each item's catalog duration, scaled by `time_scale`.
#[derive(Clone, Copy, Debug)]
pub struct SleepProcessor {
    time_scale: f64,
}

impl SleepProcessor {
    /// Sleeps for exactly the catalog duration.
    pub fn new() -> Self {
        Self { time_scale: 1.0 }
    }

    /// Sleeps for the catalog duration multiplied by `time_scale`.
    ///
    /// The scale is expected to be finite and non-negative; configuration
    /// validation enforces this for the assembly line.
    pub fn scaled(time_scale: f64) -> Self {
        Self { time_scale }
    }

    /// The scale factor applied to catalog durations.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }
}

impl Default for SleepProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for SleepProcessor {
    fn process(&self, _worker_id: usize, item: Item) {
        thread::sleep(item.duration().mul_f64(self.time_scale));
    }
}
