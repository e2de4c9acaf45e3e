use std::collections::BinaryHeap;
use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use super::{QueueElement, TieBreak};
use crate::graphs::Cost;

/// Priority queue over (priority, key) pairs with O(1) membership tests and
/// re-prioritization of keys that are already queued.
///
/// The backing binary heap only supports insert and extract-min, so updates
/// and removals are realized through lazy deletion: `live` maps each key to
/// the sequence number of its one authoritative entry, and `pop` discards
/// heap slots whose sequence no longer matches. Stale slots keep occupying
/// heap space until they surface, which keeps push and pop at O(log n)
/// amortized over all pushes ever performed instead of O(n)
/// search-and-update.
pub struct IndexedQueue<K> {
    heap: BinaryHeap<QueueElement<K>>,
    live: HashMap<K, i64>,
    sequence: i64,
    step: i64,
}

impl<K: Eq + Hash + Clone> Default for IndexedQueue<K> {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}

impl<K: Eq + Hash + Clone> IndexedQueue<K> {
    pub fn new(tie_break: TieBreak) -> IndexedQueue<K> {
        let step = match tie_break {
            TieBreak::LeastRecentFirst => 1,
            TieBreak::MostRecentFirst => -1,
        };

        IndexedQueue {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            sequence: 0,
            step,
        }
    }

    /// Inserts `key` with `priority`. A key that is already queued is
    /// re-prioritized: its old entry is invalidated and a fresh one inserted.
    pub fn push(&mut self, priority: Cost, key: K) {
        let sequence = self.sequence;
        self.sequence += self.step;

        self.live.insert(key.clone(), sequence);
        self.heap.push(QueueElement::new(priority, sequence, key));
    }

    /// Removes and returns the live entry with the smallest
    /// (priority, tie-break-adjusted sequence) pair, or `None` if no live
    /// entries remain.
    pub fn pop(&mut self) -> Option<(Cost, K)> {
        while let Some(element) = self.heap.pop() {
            if self.live.get(&element.key) == Some(&element.sequence) {
                self.live.remove(&element.key);
                return Some((element.priority, element.key));
            }
            // stale slot, drop it
        }

        None
    }

    /// Invalidates the entry for `key` without restructuring the heap; the
    /// slot is discarded once it surfaces during `pop`.
    pub fn remove(&mut self, key: &K) {
        self.live.remove(key);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.live.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
        self.sequence = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwritten_entry_never_resurfaces() {
        let mut queue = IndexedQueue::new(TieBreak::LeastRecentFirst);
        queue.push(3.0, "a");
        queue.push(1.0, "a");

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop(), Some((1.0, "a")));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn removed_entry_is_skipped() {
        let mut queue = IndexedQueue::new(TieBreak::LeastRecentFirst);
        queue.push(1.0, "a");
        queue.push(2.0, "b");

        queue.remove(&"a");
        assert!(!queue.contains(&"a"));
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.pop(), Some((2.0, "b")));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn default_policy_is_least_recent_first() {
        let mut queue = IndexedQueue::default();
        queue.push(1.0, "a");
        queue.push(1.0, "b");

        assert_eq!(queue.pop(), Some((1.0, "a")));
        assert_eq!(queue.pop(), Some((1.0, "b")));
    }

    #[test]
    fn clear_drops_all_entries() {
        let mut queue = IndexedQueue::new(TieBreak::MostRecentFirst);
        queue.push(1.0, "a");
        queue.push(2.0, "b");

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn pop_returns_the_effective_priority() {
        let mut queue = IndexedQueue::new(TieBreak::LeastRecentFirst);
        queue.push(5.0, "a");
        queue.push(2.5, "b");
        queue.push(4.0, "b");

        assert_eq!(queue.pop(), Some((4.0, "b")));
        assert_eq!(queue.pop(), Some((5.0, "a")));
    }
}
