//! Configuration for the assembly line

use crate::core::{Item, LineError, Result};

/// Configuration for an assembly line run.
///
/// # Example
///
/// ```rust
/// use assembly_line::LineConfig;
///
/// let config = LineConfig::new(8)
///     .with_items_per_kind(20)
///     .with_seed(42)
///     .with_time_scale(0.01);
/// assert_eq!(config.total_items(), 60);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LineConfig {
    /// Number of workers
    pub num_workers: usize,
    /// Items generated for every kind in the catalog
    pub items_per_kind: usize,
    /// Seed for the workload shuffle (None = drawn at random and reported)
    pub seed: Option<u64>,
    /// Thread name prefix
    pub thread_name_prefix: String,
    /// Multiplier applied to catalog durations by the default processor
    pub time_scale: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            num_workers: 5,
            items_per_kind: 10,
            seed: None,
            thread_name_prefix: "worker".to_string(),
            time_scale: 1.0,
        }
    }
}

impl LineConfig {
    /// Create a new configuration with the specified number of workers
    #[must_use]
    pub fn new(num_workers: usize) -> Self {
        Self {
            num_workers,
            ..Default::default()
        }
    }

    /// Set the number of items generated per kind
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_items_per_kind(mut self, items_per_kind: usize) -> Self {
        self.items_per_kind = items_per_kind;
        self
    }

    /// Fix the shuffle seed so runs are reproducible
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set thread name prefix
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_thread_name_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.thread_name_prefix = prefix.into();
        self
    }

    /// Scale the simulated processing durations.
    ///
    /// `1.0` keeps the catalog durations, `0.0` turns processing into a no-op.
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Total number of items in the workload, saturating at `usize::MAX`
    pub fn total_items(&self) -> usize {
        self.items_per_kind.saturating_mul(Item::ALL.len())
    }

    /// Validate configuration
    ///
    /// Zero workers is accepted only for an empty workload; with items to
    /// process it would never finish.
    pub fn validate(&self) -> Result<()> {
        if self.items_per_kind.checked_mul(Item::ALL.len()).is_none() {
            return Err(LineError::invalid_config(
                "items_per_kind",
                format!(
                    "{} items per kind overflows the workload size",
                    self.items_per_kind
                ),
            ));
        }
        if self.num_workers == 0 && self.total_items() > 0 {
            return Err(LineError::invalid_config(
                "num_workers",
                format!(
                    "Number of workers must be greater than 0 to process {} items",
                    self.total_items()
                ),
            ));
        }
        if !self.time_scale.is_finite() || self.time_scale < 0.0 {
            return Err(LineError::invalid_config(
                "time_scale",
                "Time scale must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LineConfig::default();
        assert_eq!(config.num_workers, 5);
        assert_eq!(config.items_per_kind, 10);
        assert_eq!(config.total_items(), 30);
        assert_eq!(config.seed, None);
        assert_eq!(config.thread_name_prefix, "worker");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = LineConfig::new(3)
            .with_items_per_kind(4)
            .with_seed(9)
            .with_thread_name_prefix("station")
            .with_time_scale(0.5);
        assert_eq!(config.num_workers, 3);
        assert_eq!(config.total_items(), 12);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.thread_name_prefix, "station");
        assert_eq!(config.time_scale, 0.5);
    }

    #[test]
    fn test_zero_workers_with_items_is_rejected() {
        let err = LineConfig::new(0).validate().unwrap_err();
        match err {
            LineError::InvalidConfig { parameter, .. } => assert_eq!(parameter, "num_workers"),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_workers_without_items_is_accepted() {
        let config = LineConfig::new(0).with_items_per_kind(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_oversized_workload_is_rejected() {
        let config = LineConfig::new(4).with_items_per_kind(usize::MAX);
        assert_eq!(config.total_items(), usize::MAX);
        match config.validate() {
            Err(LineError::InvalidConfig { parameter, .. }) => {
                assert_eq!(parameter, "items_per_kind")
            }
            other => panic!("expected InvalidConfig, got {:?}", other),
        }

        let largest = usize::MAX / Item::ALL.len();
        assert!(LineConfig::new(4).with_items_per_kind(largest).validate().is_ok());
    }

    #[test]
    fn test_invalid_time_scale() {
        assert!(LineConfig::default().with_time_scale(-1.0).validate().is_err());
        assert!(LineConfig::default().with_time_scale(f64::NAN).validate().is_err());
        assert!(LineConfig::default().with_time_scale(f64::INFINITY).validate().is_err());
        assert!(LineConfig::default().with_time_scale(0.0).validate().is_ok());
    }
}
