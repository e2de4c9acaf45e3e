use std::cmp::Ordering;

use crate::graphs::Cost;

pub mod indexed_queue;

/// Decides which key pops first when two entries carry exactly equal
/// priorities. Fixed at queue construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Equal priorities pop in push order.
    #[default]
    LeastRecentFirst,
    /// Equal priorities pop in reverse push order.
    MostRecentFirst,
}

#[derive(Clone, Debug)]
pub struct QueueElement<K> {
    pub priority: Cost,
    pub sequence: i64,
    pub key: K,
}

impl<K> QueueElement<K> {
    pub fn new(priority: Cost, sequence: i64, key: K) -> QueueElement<K> {
        QueueElement {
            priority,
            sequence,
            key,
        }
    }
}

// The key plays no part in the ordering, so equality must ignore it as well
// to stay consistent with `Ord`. Sequence numbers are unique within a queue.
impl<K> PartialEq for QueueElement<K> {
    fn eq(&self, other: &Self) -> bool {
        self.priority.to_bits() == other.priority.to_bits() && self.sequence == other.sequence
    }
}

impl<K> Eq for QueueElement<K> {}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl<K> Ord for QueueElement<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that we flip the ordering on priorities. Ties are broken by
        // the sequence number, ascending, so the counter direction chosen at
        // construction decides whether earlier or later pushes win.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

// `PartialOrd` needs to be implemented as well.
impl<K> PartialOrd for QueueElement<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
