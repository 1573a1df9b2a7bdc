//! Workload generation and shuffling.

use super::item::Item;
use std::collections::BTreeMap;
use std::time::Duration;

/// The job sequence fed to the assembly line.
///
/// A workload always holds the same number of items of every kind.
/// Shuffling permutes the sequence in place and never changes that
/// composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Workload {
    items: Vec<Item>,
}

impl Workload {
    /// Builds `items_per_kind` items of every kind, one of each kind per round.
    pub fn generate(items_per_kind: usize) -> Self {
        let items = std::iter::repeat(Item::ALL)
            .take(items_per_kind)
            .flatten()
            .collect();
        Self { items }
    }

    /// Builds a workload and shuffles it with a generator seeded by `seed`.
    pub fn generate_shuffled(items_per_kind: usize, seed: u64) -> Self {
        let mut workload = Self::generate(items_per_kind);
        workload.shuffle(&mut fastrand::Rng::with_seed(seed));
        workload
    }

    /// Applies a uniformly random permutation.
    pub fn shuffle(&mut self, rng: &mut fastrand::Rng) {
        rng.shuffle(&mut self.items);
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the workload holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in job order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items of the given kind.
    pub fn count_of(&self, kind: Item) -> usize {
        self.items.iter().filter(|&&item| item == kind).count()
    }

    /// Count per kind, including kinds with no items.
    pub fn composition(&self) -> BTreeMap<Item, usize> {
        let mut counts: BTreeMap<Item, usize> = Item::ALL.iter().map(|&kind| (kind, 0)).collect();
        for item in &self.items {
            *counts.entry(*item).or_insert(0) += 1;
        }
        counts
    }

    /// Sum of the simulated processing time of every item.
    pub fn total_duration(&self) -> Duration {
        self.items.iter().map(|item| item.duration()).sum()
    }

    /// Consumes the workload, yielding the items in job order.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_composition() {
        let workload = Workload::generate(10);
        assert_eq!(workload.len(), 30);
        for kind in Item::ALL {
            assert_eq!(workload.count_of(kind), 10);
        }
        assert_eq!(workload.total_duration(), Duration::from_millis(6000));
    }

    #[test]
    fn test_generate_empty() {
        let workload = Workload::generate(0);
        assert!(workload.is_empty());
        assert_eq!(workload.total_duration(), Duration::ZERO);
        assert!(workload.composition().values().all(|&count| count == 0));
    }

    #[test]
    fn test_shuffle_preserves_composition() {
        let mut workload = Workload::generate(25);
        let before = workload.composition();
        workload.shuffle(&mut fastrand::Rng::with_seed(7));
        assert_eq!(workload.composition(), before);
        assert_eq!(workload.len(), 75);
    }

    #[test]
    fn test_shuffle_is_deterministic_for_seed() {
        let a = Workload::generate_shuffled(10, 42);
        let b = Workload::generate_shuffled(10, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_changes_order() {
        // 30 items with 10 of each kind: the chance a shuffle leaves the
        // round-robin order intact is negligible.
        let ordered = Workload::generate(10);
        let shuffled = Workload::generate_shuffled(10, 1234);
        assert_ne!(ordered.items(), shuffled.items());
    }
}
