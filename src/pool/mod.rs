//! Worker pool, per-worker statistics and the completion sink

pub mod processor;
pub mod sink;
pub mod worker;
pub mod worker_pool;

pub use processor::{Processor, SleepProcessor};
pub use sink::{CompletionRecord, CompletionSink};
pub use worker::{Worker, WorkerSnapshot, WorkerState, WorkerStats};
pub use worker_pool::WorkerPool;
