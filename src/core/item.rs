//! Item catalog.
//!
//! The catalog is closed: every item belongs to one of a fixed set of kinds,
//! each with its own simulated processing duration. Items carry no payload
//! and are interchangeable within a kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A unit of simulated work on the assembly line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Item {
    /// Processed in 100ms.
    Light,
    /// Processed in 200ms.
    Medium,
    /// Processed in 300ms.
    Heavy,
}

impl Item {
    /// Every item kind, in catalog order.
    pub const ALL: [Item; 3] = [Item::Light, Item::Medium, Item::Heavy];

    /// Fixed simulated processing duration for this kind.
    pub const fn duration(self) -> Duration {
        match self {
            Item::Light => Duration::from_millis(100),
            Item::Medium => Duration::from_millis(200),
            Item::Heavy => Duration::from_millis(300),
        }
    }

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            Item::Light => "light",
            Item::Medium => "medium",
            Item::Heavy => "heavy",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
