//! The orchestrator: wires the workload, queue, workers and sink together.

pub mod config;
pub mod report;

pub use config::LineConfig;
pub use report::{RunReport, TIMESTAMP_FORMAT};

use crate::core::{error::panic_message, Item, LineError, Result, Workload};
use crate::pool::{CompletionSink, Processor, SleepProcessor, WorkerPool};
use crate::queue::JobQueue;
use chrono::Local;
use log::{debug, info};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// A single-run assembly line.
///
/// # Example
///
/// ```rust
/// use assembly_line::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = LineConfig::new(4).with_items_per_kind(5).with_seed(1);
/// let report = AssemblyLine::new(config)?
///     .with_processor(|_worker_id: usize, _item: Item| {})
///     .run()?;
///
/// assert_eq!(report.total_processed(), 15);
/// # Ok(())
/// # }
/// ```
pub struct AssemblyLine {
    config: LineConfig,
    processor: Arc<dyn Processor>,
}

impl std::fmt::Debug for AssemblyLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssemblyLine")
            .field("config", &self.config)
            .field("processor", &"<processor>")
            .finish()
    }
}

impl AssemblyLine {
    /// Create an assembly line with a validated configuration.
    ///
    /// Processing sleeps for each item's catalog duration, scaled by
    /// [`LineConfig::time_scale`].
    pub fn new(config: LineConfig) -> Result<Self> {
        config.validate()?;
        let processor: Arc<dyn Processor> = Arc::new(SleepProcessor::scaled(config.time_scale));
        Ok(Self { config, processor })
    }

    /// Replace the simulated work performed on each item.
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_processor<P: Processor + 'static>(mut self, processor: P) -> Self {
        self.processor = Arc::new(processor);
        self
    }

    /// The configuration this line runs with.
    pub fn config(&self) -> &LineConfig {
        &self.config
    }

    /// Run the whole pipeline once and report per-worker totals.
    ///
    /// Blocks until every worker has drained the queue and stopped.
    pub fn run(&self) -> Result<RunReport> {
        let seed = self.config.seed.unwrap_or_else(|| fastrand::u64(..));
        let mut workload = Workload::generate(self.config.items_per_kind);
        workload.shuffle(&mut fastrand::Rng::with_seed(seed));
        let total_items = workload.len();
        let composition = workload.composition();
        debug!(
            "workload of {} items shuffled with seed {} ({:?} of simulated work)",
            total_items,
            seed,
            workload.total_duration()
        );

        let queue = Arc::new(JobQueue::new(total_items));
        let sink = Arc::new(CompletionSink::new(total_items));

        let started_at = Local::now();
        let start = Instant::now();
        info!(
            "started at {} with {} workers",
            started_at.format(TIMESTAMP_FORMAT),
            self.config.num_workers
        );

        let pool = WorkerPool::spawn(
            self.config.num_workers,
            &self.config.thread_name_prefix,
            &queue,
            &sink,
            &self.processor,
        )?;

        let producer = match Self::spawn_producer(Arc::clone(&queue), workload.into_items()) {
            Ok(producer) => producer,
            Err(e) => {
                // Nothing was enqueued; closing lets the workers exit.
                queue.close();
                pool.join()?;
                return Err(e);
            }
        };

        let workers = pool.join();
        let produced = producer
            .join()
            .map_err(|payload| LineError::producer_panic(panic_message(payload.as_ref())))?;
        let workers = workers?;
        produced?;

        let elapsed = start.elapsed();
        let finished_at = Local::now();

        sink.close();
        let completions = sink.drain().len();

        let report = RunReport {
            seed,
            started_at,
            finished_at,
            elapsed,
            total_items,
            composition,
            completions,
            workers,
        };

        let processed = report.total_processed();
        if processed != total_items as u64 {
            return Err(LineError::conservation(total_items, processed));
        }

        info!(
            "finished at {}: {} items in {:?}",
            finished_at.format(TIMESTAMP_FORMAT),
            processed,
            elapsed
        );
        Ok(report)
    }

    /// Enqueue every item in order, then close the queue.
    ///
    /// The queue is closed on every exit path.
    fn spawn_producer(
        queue: Arc<JobQueue>,
        items: Vec<Item>,
    ) -> Result<thread::JoinHandle<Result<usize>>> {
        thread::Builder::new()
            .name("producer".to_string())
            .spawn(move || {
                let total = items.len();
                let mut sent = 0;
                let mut result = Ok(total);
                for item in items {
                    if queue.enqueue(item).is_err() {
                        result = Err(LineError::queue_closed(total - sent));
                        break;
                    }
                    sent += 1;
                }
                queue.close();
                debug!("producer enqueued {} of {} items", sent, total);
                result
            })
            .map_err(|e| LineError::spawn_with_source(0, "Cannot create producer thread", e))
    }
}
