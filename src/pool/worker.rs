//! Worker thread implementation

use crate::core::{error::panic_message, LineError, Result};
use crate::pool::processor::Processor;
use crate::pool::sink::{CompletionRecord, CompletionSink};
use crate::queue::JobQueue;
use log::{debug, info};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Lifecycle of a worker: `Idle -> Processing -> Idle ... -> Stopped`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WorkerState {
    /// Waiting on the job queue
    Idle,
    /// Processing an item
    Processing,
    /// Queue closed and drained; the worker has exited
    Stopped,
}

#[derive(Debug)]
struct Progress {
    state: WorkerState,
    processed: u64,
    busy: Duration,
}

/// Statistics for a worker thread.
///
/// Only the owning worker writes these. Every write and read goes through the
/// lock; the processed count never decreases.
#[derive(Debug)]
pub struct WorkerStats {
    progress: Mutex<Progress>,
}

impl Default for WorkerStats {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkerStats {
    /// Create new worker statistics
    pub fn new() -> Self {
        Self {
            progress: Mutex::new(Progress {
                state: WorkerState::Idle,
                processed: 0,
                busy: Duration::ZERO,
            }),
        }
    }

    /// Record one processed item and the time it took
    pub fn record_processed(&self, elapsed: Duration) {
        let mut progress = self.progress.lock();
        progress.processed += 1;
        progress.busy += elapsed;
    }

    fn transition(&self, state: WorkerState) {
        let mut progress = self.progress.lock();
        debug_assert!(
            progress.state != WorkerState::Stopped,
            "stopped worker changed state"
        );
        progress.state = state;
    }

    /// Get total items processed
    pub fn processed(&self) -> u64 {
        self.progress.lock().processed
    }

    /// Get total time spent processing items
    pub fn busy_time(&self) -> Duration {
        self.progress.lock().busy
    }

    /// Get the current lifecycle state
    pub fn state(&self) -> WorkerState {
        self.progress.lock().state
    }
}

/// Point-in-time copy of a worker's statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorkerSnapshot {
    /// Worker id
    pub id: usize,
    /// Items processed
    pub processed: u64,
    /// Total time spent processing
    pub busy: Duration,
    /// Lifecycle state when the snapshot was taken
    pub state: WorkerState,
}

impl WorkerSnapshot {
    fn capture(id: usize, stats: &WorkerStats) -> Self {
        let progress = stats.progress.lock();
        Self {
            id,
            processed: progress.processed,
            busy: progress.busy,
            state: progress.state,
        }
    }
}

/// A worker thread that drains the job queue
#[derive(Debug)]
pub struct Worker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
    stats: Arc<WorkerStats>,
}

impl Worker {
    /// Create and start a new worker.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier for this worker, starting at 1
    /// * `name_prefix` - Thread name prefix; the thread is named `<prefix>-<id>`
    /// * `queue` - Job queue shared with the other workers
    /// * `sink` - Where completion records are published
    /// * `processor` - The simulated work applied to each item
    ///
    /// The worker exits once the queue is closed and empty.
    pub fn spawn(
        id: usize,
        name_prefix: &str,
        queue: Arc<JobQueue>,
        sink: Arc<CompletionSink>,
        processor: Arc<dyn Processor>,
    ) -> Result<Self> {
        let stats = Arc::new(WorkerStats::new());
        let stats_clone = Arc::clone(&stats);

        let thread = thread::Builder::new()
            .name(format!("{}-{}", name_prefix, id))
            .spawn(move || {
                Self::run(id, &queue, &sink, processor.as_ref(), &stats_clone);
            })
            .map_err(|e| LineError::spawn_with_source(id, "Cannot create worker thread", e))?;

        Ok(Self {
            id,
            thread: Some(thread),
            stats,
        })
    }

    /// Get worker ID
    pub fn id(&self) -> usize {
        self.id
    }

    /// Get worker statistics
    pub fn stats(&self) -> Arc<WorkerStats> {
        Arc::clone(&self.stats)
    }

    /// Wait for the worker to stop and return its final statistics.
    pub fn join(mut self) -> Result<WorkerSnapshot> {
        if let Some(thread) = self.thread.take() {
            thread.join().map_err(|payload| {
                LineError::worker_panic(self.id, panic_message(payload.as_ref()))
            })?;
        }
        Ok(WorkerSnapshot::capture(self.id, &self.stats))
    }

    /// Main worker loop
    fn run(
        id: usize,
        queue: &JobQueue,
        sink: &CompletionSink,
        processor: &dyn Processor,
        stats: &WorkerStats,
    ) {
        debug!("worker {} started", id);

        while let Some(item) = queue.dequeue() {
            stats.transition(WorkerState::Processing);
            info!("worker {} started {} item", id, item);

            let start = Instant::now();
            processor.process(id, item);
            let elapsed = start.elapsed();

            stats.record_processed(elapsed);
            info!("worker {} finished {} item in {:?}", id, item, elapsed);

            sink.publish(CompletionRecord {
                worker_id: id,
                item,
                elapsed,
            });
            stats.transition(WorkerState::Idle);
        }

        stats.transition(WorkerState::Stopped);
        debug!("worker {} stopped after {} items", id, stats.processed());
    }
}
