//! # Assembly Line
//!
//! A simulated assembly line: a fixed, shuffled workload of typed items is
//! drained by a fixed pool of worker threads, and per-worker throughput is
//! reported.
//!
//! ## Features
//!
//! - **Item Catalog**: a closed set of item kinds with fixed processing costs
//! - **Workload Generator**: equal counts per kind, uniformly shuffled with a
//!   reproducible seed
//! - **Job Queue**: bounded, closable FIFO built on crossbeam channels
//! - **Worker Pool**: fixed-size pool with lock-guarded per-worker statistics
//! - **Completion Sink**: observational stream of finished items
//! - **Barrier Join**: the run returns only once every worker has stopped
//!
//! ## Quick Start
//!
//! ```rust
//! use assembly_line::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // 5 workers, 10 items of each kind, processing sped up 100x
//! let config = LineConfig::default().with_time_scale(0.01);
//! let report = AssemblyLine::new(config)?.run()?;
//!
//! assert_eq!(report.total_processed(), 30);
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Processing
//!
//! ```rust
//! use assembly_line::prelude::*;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let processed = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&processed);
//!
//! let report = AssemblyLine::new(LineConfig::new(3).with_seed(7))?
//!     .with_processor(move |_worker_id: usize, _item: Item| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     })
//!     .run()?;
//!
//! assert_eq!(processed.load(Ordering::SeqCst), 30);
//! for worker in &report.workers {
//!     println!("Worker {}: {} items", worker.id, worker.processed);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod core;
pub mod line;
pub mod pool;
pub mod prelude;
pub mod queue;

pub use crate::core::{Item, LineError, Result, Workload};
pub use line::{AssemblyLine, LineConfig, RunReport};
pub use pool::{CompletionRecord, Processor, SleepProcessor, WorkerSnapshot, WorkerState};
