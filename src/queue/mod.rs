//! Min-priority queue supplying ordered extraction for the greedy merge.
//!
//! [HeapPriorityQueue] is an array-backed binary min-heap over
//! `(priority, value)` [Entry]s. Entries with equal priority are extracted
//! in insertion order, which makes code construction reproducible.

pub mod heap_priority_queue;

pub use heap_priority_queue::{Entry, HeapPriorityQueue};
