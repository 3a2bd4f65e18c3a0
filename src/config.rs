//! Heap construction settings
//!
//! [`HeapConfig`] bundles the two knobs a heap is created with: its
//! [`HeapKind`] and the number of slots to allocate up front.
//!
//! ```rust
//! use pqheap::{BinaryHeap, DefaultComparator, HeapConfig, Value};
//!
//! let config = HeapConfig::default().max_heap().with_initial_capacity(64);
//! let heap: BinaryHeap<Value, _> = BinaryHeap::with_config(config, DefaultComparator);
//! assert_eq!(heap.capacity(), 64);
//! ```

use crate::traits::HeapKind;

/// Smallest capacity a heap ever holds
pub const MIN_CAPACITY: usize = 4;

/// Initial capacity used when none is given
pub const DEFAULT_CAPACITY: usize = 16;

/// Settings for [`BinaryHeap`](crate::BinaryHeap) construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Min-heap or max-heap ordering
    pub kind: HeapKind,
    /// Requested number of preallocated slots
    pub initial_capacity: usize,
}

impl HeapConfig {
    pub fn new(kind: HeapKind) -> Self {
        Self {
            kind,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn min_heap(mut self) -> Self {
        self.kind = HeapKind::Min;
        self
    }

    pub fn max_heap(mut self) -> Self {
        self.kind = HeapKind::Max;
        self
    }

    /// The capacity actually allocated: the request, floored at [`MIN_CAPACITY`]
    pub fn effective_capacity(&self) -> usize {
        self.initial_capacity.max(MIN_CAPACITY)
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(HeapKind::Min)
    }
}
