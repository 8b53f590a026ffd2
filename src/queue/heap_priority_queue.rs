//! Array-backed binary heap implementing a min-priority queue.

use crate::error::QueueError;
use std::cmp::Ordering;

// =#========================================================================#=
// ENTRY
// =#========================================================================#=
/// A `(priority, value)` pair stored in a [HeapPriorityQueue].
///
/// Besides key and value, each entry carries the sequence number it was
/// inserted with, used to break ties between equal keys.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    key: K,
    value: V,
    sequence: u64,
}

impl<K, V> Entry<K, V> {
    /// Returns the priority of this entry.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of this entry.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the entry, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the entry, returning `(key, value)`.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Ord, V> Entry<K, V> {
    /// Heap order: smaller key first, then earlier insertion first.
    fn precedes(&self, other: &Self) -> bool {
        match self.key.cmp(&other.key) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.sequence < other.sequence,
        }
    }
}

// =#========================================================================#=
// HEAP PRIORITY QUEUE
// =#========================================================================#=
/// Min-priority queue over `(K, V)` pairs, implemented as binary heap in a [Vec].
///
/// # Complexity
/// - [insert](HeapPriorityQueue::insert) and
///   [remove_min](HeapPriorityQueue::remove_min): `O(log n)`
/// - [min](HeapPriorityQueue::min), [size](HeapPriorityQueue::size),
///   [is_empty](HeapPriorityQueue::is_empty): `O(1)`
///
/// # Ties
/// Entries with equal keys leave the queue in the order they were inserted
/// (FIFO). The queue orders on `(key, insertion sequence)`, so for identical
/// insertion order the extraction order, and hence the shape of any tree
/// built from it, is identical across runs.
///
/// # Example
/// ```
/// use huffwick::queue::HeapPriorityQueue;
///
/// let mut queue = HeapPriorityQueue::new();
/// queue.insert(5, 'b');
/// queue.insert(1, 'a');
/// queue.insert(5, 'c');
///
/// assert_eq!(queue.remove_min().unwrap().into_value(), 'a');
/// assert_eq!(queue.remove_min().unwrap().into_value(), 'b');
/// assert_eq!(queue.remove_min().unwrap().into_value(), 'c');
/// assert!(queue.remove_min().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HeapPriorityQueue<K, V> {
    /// Heap-ordered entries; children of `i` at `2i+1` and `2i+2`
    heap: Vec<Entry<K, V>>,
    /// Sequence number handed to the next inserted entry
    next_sequence: u64,
}

impl<K: Ord, V> HeapPriorityQueue<K, V> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        HeapPriorityQueue {
            heap: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        HeapPriorityQueue {
            heap: Vec::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    /// Builds a queue from `(key, value)` pairs with bottom-up heapify in `O(n)`.
    ///
    /// Ties are broken by position in `entries`, as if inserted one by one.
    pub fn from_entries<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut queue = HeapPriorityQueue::new();
        for (key, value) in entries {
            let sequence = queue.take_sequence();
            queue.heap.push(Entry { key, value, sequence });
        }
        for i in (0..queue.heap.len() / 2).rev() {
            queue.sift_down(i);
        }
        queue
    }

    /// Returns the number of entries.
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue has no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the entry with smallest key without removing it, or `None` if empty.
    pub fn min(&self) -> Option<&Entry<K, V>> {
        self.heap.first()
    }

    /// Inserts `value` with priority `key`.
    pub fn insert(&mut self, key: K, value: V) {
        let sequence = self.take_sequence();
        self.heap.push(Entry { key, value, sequence });
        let last = self.heap.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the entry with smallest key.
    ///
    /// # Errors
    /// [QueueError::EmptyQueue] if the queue has no entries.
    pub fn remove_min(&mut self) -> Result<Entry<K, V>, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::EmptyQueue);
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop().ok_or(QueueError::EmptyQueue)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    fn take_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < n && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == i {
                break;
            }

            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<K: Ord, V> Default for HeapPriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
