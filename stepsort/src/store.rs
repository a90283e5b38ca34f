//! In-memory sequence store.
//!
//! Owns the mutable value sequence for the lifetime of a run. During a run
//! the store is mutated only through the instrumented primitives of
//! [`crate::channel::StepChannel`]; everything else reads immutable
//! snapshots.

use parking_lot::RwLock;
use std::sync::Arc;

/// Shared, lock-protected value sequence.
#[derive(Clone, Default)]
pub struct SequenceStore {
    values: Arc<RwLock<Vec<u32>>>,
}

impl SequenceStore {
    /// Create a store holding `values`.
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values: Arc::new(RwLock::new(values)),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// True when the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// Read-only copy of the current values.
    pub fn snapshot(&self) -> Vec<u32> {
        self.values.read().clone()
    }

    /// Value at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.values.read().get(index).copied()
    }

    /// Overwrite the slot at `index`. Returns false when out of bounds.
    pub fn set(&self, index: usize, value: u32) -> bool {
        let mut values = self.values.write();
        match values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Exchange two slots. Returns false when either index is out of bounds.
    pub fn swap(&self, i: usize, j: usize) -> bool {
        let mut values = self.values.write();
        if i >= values.len() || j >= values.len() {
            return false;
        }
        values.swap(i, j);
        true
    }

    /// Replace the whole sequence.
    pub fn replace(&self, values: Vec<u32>) {
        *self.values.write() = values;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_detached() {
        let store = SequenceStore::new(vec![3, 1, 2]);
        let snap = store.snapshot();
        store.set(0, 99);
        assert_eq!(snap, vec![3, 1, 2]);
        assert_eq!(store.snapshot(), vec![99, 1, 2]);
    }

    #[test]
    fn test_swap_and_bounds() {
        let store = SequenceStore::new(vec![5, 7]);
        assert!(store.swap(0, 1));
        assert_eq!(store.snapshot(), vec![7, 5]);
        assert!(!store.swap(0, 2));
        assert!(!store.set(9, 1));
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn test_replace() {
        let store = SequenceStore::new(vec![1]);
        store.replace(vec![4, 5, 6]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.snapshot(), vec![4, 5, 6]);
    }
}
