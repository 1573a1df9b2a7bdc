//! Error types for the assembly line

/// Result type for assembly line operations
pub type Result<T> = std::result::Result<T, LineError>;

/// Errors that can occur while running the assembly line.
///
/// None of these are transient. Each one means a configuration mistake or a
/// broken invariant, and callers are expected to treat them as fatal.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LineError {
    /// Invalid configuration with parameter
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Configuration parameter name
        parameter: String,
        /// Error message
        message: String,
    },

    /// Failed to spawn a worker or producer thread
    #[error("Failed to spawn worker thread #{worker_id}: {message}")]
    SpawnError {
        /// ID of the worker that failed to spawn (0 for the producer)
        worker_id: usize,
        /// Error message
        message: String,
        /// Source IO error
        #[source]
        source: Option<std::io::Error>,
    },

    /// A worker thread panicked before reaching the stopped state
    #[error("Worker thread #{worker_id} panicked: {message}")]
    WorkerPanic {
        /// ID of the panicked worker
        worker_id: usize,
        /// Panic message
        message: String,
    },

    /// The producer thread panicked
    #[error("Producer thread panicked: {message}")]
    ProducerPanic {
        /// Panic message
        message: String,
    },

    /// An item was enqueued after the job queue had been closed
    #[error("Job queue closed with {pending} items still to enqueue")]
    QueueClosed {
        /// Number of items that could not be enqueued
        pending: usize,
    },

    /// Processed counts do not add up to the workload size
    #[error("Processed {actual} items but the workload held {expected}")]
    Conservation {
        /// Items in the workload
        expected: usize,
        /// Sum of per-worker processed counts
        actual: u64,
    },
}

impl LineError {
    /// Create an invalid config error
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        LineError::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a spawn error with source
    pub fn spawn_with_source(
        worker_id: usize,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LineError::SpawnError {
            worker_id,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a worker panic error
    pub fn worker_panic(worker_id: usize, message: impl Into<String>) -> Self {
        LineError::WorkerPanic {
            worker_id,
            message: message.into(),
        }
    }

    /// Create a producer panic error
    pub fn producer_panic(message: impl Into<String>) -> Self {
        LineError::ProducerPanic {
            message: message.into(),
        }
    }

    /// Create a queue closed error
    pub fn queue_closed(pending: usize) -> Self {
        LineError::QueueClosed { pending }
    }

    /// Create a conservation error
    pub fn conservation(expected: usize, actual: u64) -> Self {
        LineError::Conservation { expected, actual }
    }
}

/// Extracts a readable message from a thread panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LineError::invalid_config("num_workers", "must be positive");
        assert!(matches!(err, LineError::InvalidConfig { .. }));

        let err = LineError::worker_panic(3, "boom");
        assert!(matches!(err, LineError::WorkerPanic { worker_id: 3, .. }));

        let err = LineError::queue_closed(7);
        assert!(matches!(err, LineError::QueueClosed { pending: 7 }));
    }

    #[test]
    fn test_error_display() {
        let err = LineError::invalid_config("num_workers", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'num_workers': must be positive"
        );

        let err = LineError::conservation(30, 29);
        assert_eq!(err.to_string(), "Processed 29 items but the workload held 30");

        let err = LineError::producer_panic("oops");
        assert_eq!(err.to_string(), "Producer thread panicked: oops");
    }

    #[test]
    fn test_spawn_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::WouldBlock, "no threads left");
        let err = LineError::spawn_with_source(2, "Cannot create thread", io_err);

        assert!(err.to_string().contains("worker thread #2"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("static str");
        assert_eq!(panic_message(payload.as_ref()), "static str");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn std::any::Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "Unknown panic");
    }
}
