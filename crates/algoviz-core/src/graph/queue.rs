//! Stable min-priority queue
//!
//! Entries with equal priority come out in insertion order. There is no
//! decrease-key: enqueuing an item that is already queued adds a second
//! entry, and consumers skip stale entries when they dequeue them (lazy
//! deletion).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct QueueEntry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for QueueEntry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T, P: Ord> Eq for QueueEntry<T, P> {}

impl<T, P: Ord> PartialOrd for QueueEntry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for QueueEntry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue with insertion-order tie-breaking
#[derive(Debug)]
pub struct PriorityQueue<T, P: Ord> {
    heap: BinaryHeap<Reverse<QueueEntry<T, P>>>,
    next_seq: u64,
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn enqueue(&mut self, item: T, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(QueueEntry {
            priority,
            seq,
            item,
        }));
    }

    /// Remove the lowest-priority entry, oldest first among equals
    pub fn dequeue(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
