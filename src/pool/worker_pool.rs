//! Fixed-size pool of workers sharing one job queue.

use crate::core::{LineError, Result};
use crate::pool::processor::Processor;
use crate::pool::sink::CompletionSink;
use crate::pool::worker::{Worker, WorkerSnapshot, WorkerStats};
use crate::queue::JobQueue;
use log::debug;
use std::sync::Arc;

/// A fixed number of workers draining one [`JobQueue`].
///
/// The pool never grows or shrinks. [`join`](Self::join) is a barrier: it
/// returns only after every worker has stopped.
#[derive(Debug)]
pub struct WorkerPool {
    workers: Vec<Worker>,
}

impl WorkerPool {
    /// Starts `num_workers` workers with ids `1..=num_workers`.
    ///
    /// If a worker fails to spawn, the queue is closed and the workers already
    /// started are joined before the error is returned.
    pub fn spawn(
        num_workers: usize,
        name_prefix: &str,
        queue: &Arc<JobQueue>,
        sink: &Arc<CompletionSink>,
        processor: &Arc<dyn Processor>,
    ) -> Result<Self> {
        let mut workers = Vec::with_capacity(num_workers);
        for id in 1..=num_workers {
            let worker = Worker::spawn(
                id,
                name_prefix,
                Arc::clone(queue),
                Arc::clone(sink),
                Arc::clone(processor),
            );
            match worker {
                Ok(worker) => workers.push(worker),
                Err(e) => {
                    Self::abort(queue, workers);
                    return Err(e);
                }
            }
        }
        debug!("started {} workers", workers.len());
        Ok(Self { workers })
    }

    /// Closes the queue and joins a partially started pool.
    fn abort(queue: &JobQueue, workers: Vec<Worker>) {
        queue.close();
        let started = workers.len();
        // Panics are already logged by `join`.
        let _ = Self { workers }.join();
        debug!("joined {} workers after a failed start", started);
    }

    /// Number of workers in the pool.
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Whether the pool has no workers.
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Live statistics of every worker, in id order.
    pub fn stats(&self) -> Vec<Arc<WorkerStats>> {
        self.workers.iter().map(Worker::stats).collect()
    }

    /// Waits for every worker to stop and returns their final statistics.
    ///
    /// All workers are joined even if one of them panicked; the first panic
    /// is then reported as [`LineError::WorkerPanic`].
    pub fn join(self) -> Result<Vec<WorkerSnapshot>> {
        let mut snapshots = Vec::with_capacity(self.workers.len());
        let mut first_error: Option<LineError> = None;

        for worker in self.workers {
            match worker.join() {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => {
                    log::error!("{}", e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(snapshots),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Item;
    use crate::pool::worker::WorkerState;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    fn fill(queue: &JobQueue, per_kind: usize) {
        for _ in 0..per_kind {
            for item in Item::ALL {
                queue.enqueue(item).unwrap();
            }
        }
        queue.close();
    }

    #[test]
    fn test_pool_ids_start_at_one() {
        let queue = Arc::new(JobQueue::new(1));
        let sink = Arc::new(CompletionSink::new(1));
        let processor: Arc<dyn Processor> = Arc::new(|_: usize, _: Item| {});

        let pool = WorkerPool::spawn(4, "worker", &queue, &sink, &processor).unwrap();
        assert_eq!(pool.len(), 4);
        queue.close();

        let ids: Vec<_> = pool.join().unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pool_processes_every_item_once() {
        let queue = Arc::new(JobQueue::new(300));
        let sink = Arc::new(CompletionSink::new(300));
        let executed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&executed);
        let processor: Arc<dyn Processor> = Arc::new(move |_: usize, _: Item| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let pool = WorkerPool::spawn(8, "worker", &queue, &sink, &processor).unwrap();
        fill(&queue, 100);
        let snapshots = pool.join().unwrap();

        let total: u64 = snapshots.iter().map(|s| s.processed).sum();
        assert_eq!(total, 300);
        assert_eq!(executed.load(Ordering::SeqCst), 300);
        assert_eq!(sink.drain().len(), 300);
        assert!(snapshots.iter().all(|s| s.state == WorkerState::Stopped));
    }

    #[test]
    fn test_join_waits_for_slow_worker() {
        let queue = Arc::new(JobQueue::new(6));
        let sink = Arc::new(CompletionSink::new(6));
        let processor: Arc<dyn Processor> = Arc::new(|worker_id: usize, _: Item| {
            if worker_id == 1 {
                thread::sleep(Duration::from_millis(150));
            }
        });

        let pool = WorkerPool::spawn(2, "worker", &queue, &sink, &processor).unwrap();
        let stats = pool.stats();
        fill(&queue, 2);

        let snapshots = pool.join().unwrap();
        assert!(stats.iter().all(|s| s.state() == WorkerState::Stopped));
        assert_eq!(snapshots.iter().map(|s| s.processed).sum::<u64>(), 6);
    }

    #[test]
    fn test_abort_joins_started_workers() {
        let queue = Arc::new(JobQueue::new(6));
        let sink = Arc::new(CompletionSink::new(6));
        let executed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&executed);
        let processor: Arc<dyn Processor> = Arc::new(move |_: usize, _: Item| {
            thread::sleep(Duration::from_millis(10));
            counter.fetch_add(1, Ordering::SeqCst);
        });
        for item in Item::ALL {
            queue.enqueue(item).unwrap();
        }

        let workers: Vec<_> = (1..=2)
            .map(|id| {
                Worker::spawn(
                    id,
                    "worker",
                    Arc::clone(&queue),
                    Arc::clone(&sink),
                    Arc::clone(&processor),
                )
                .unwrap()
            })
            .collect();
        let stats: Vec<_> = workers.iter().map(Worker::stats).collect();

        WorkerPool::abort(&queue, workers);

        assert!(queue.is_closed());
        assert!(stats.iter().all(|s| s.state() == WorkerState::Stopped));
        assert_eq!(executed.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_join_reports_panicking_worker() {
        let queue = Arc::new(JobQueue::new(6));
        let sink = Arc::new(CompletionSink::new(6));
        let processor: Arc<dyn Processor> = Arc::new(|_: usize, item: Item| {
            if item == Item::Heavy {
                panic!("heavy item jammed the line");
            }
            thread::sleep(Duration::from_millis(5));
        });

        let pool = WorkerPool::spawn(3, "worker", &queue, &sink, &processor).unwrap();
        fill(&queue, 2);

        // At most two workers panic; the third drains the rest, so join returns.
        match pool.join() {
            Err(LineError::WorkerPanic { worker_id, message }) => {
                assert!((1..=3).contains(&worker_id));
                assert!(message.contains("jammed"));
            }
            other => panic!("expected WorkerPanic, got {:?}", other),
        }
    }
}
