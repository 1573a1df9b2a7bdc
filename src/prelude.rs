//! Convenient re-exports for common types and traits

pub use crate::core::{Item, LineError, Result, Workload};
pub use crate::line::{AssemblyLine, LineConfig, RunReport};
pub use crate::pool::{Processor, SleepProcessor, WorkerSnapshot, WorkerState};
