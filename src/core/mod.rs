//! Core types for the assembly line: items, workloads and errors

pub mod error;
pub mod item;
pub mod workload;

pub use error::{LineError, Result};
pub use item::Item;
pub use workload::Workload;
