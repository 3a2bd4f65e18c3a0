//! Common traits and types for the priority queue
//!
//! This module provides the pieces every heap operation is written against:
//!
//! - [`Comparator`]: the ordering strategy injected at construction
//! - [`HeapKind`]: selects min-heap or max-heap semantics
//! - [`HeapError`]: the recoverable failure conditions of heap operations
//!
//! A comparator only ever answers "how do these two elements compare". Whether
//! the smaller or the larger element is extracted first is decided by the
//! [`HeapKind`], so the same comparator serves both heap kinds.

use std::cmp::Ordering;
use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `pop` was called on an empty heap
    EmptyQueue,
    /// Growing the backing storage failed
    OutOfMemory {
        /// The slot count that could not be allocated
        requested: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyQueue => {
                write!(f, "heap is empty (check is_empty() before peek or pop)")
            }
            HeapError::OutOfMemory { requested } => {
                write!(f, "failed to allocate storage for {} heap slots", requested)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Whether the heap yields its smallest or its largest element first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapKind {
    /// The root is the smallest element under the comparator
    #[default]
    Min,
    /// The root is the largest element under the comparator
    Max,
}

impl HeapKind {
    /// Orients a comparator result so that `Less` always means "closer to the root"
    ///
    /// This is the effective order used by the sift routines: for a min-heap it
    /// is the comparator result itself, for a max-heap it is reversed.
    #[inline]
    pub fn orient(self, ord: Ordering) -> Ordering {
        match self {
            HeapKind::Min => ord,
            HeapKind::Max => ord.reverse(),
        }
    }

    /// Returns true for [`HeapKind::Min`]
    pub fn is_min(self) -> bool {
        self == HeapKind::Min
    }
}

impl fmt::Display for HeapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapKind::Min => f.write_str("MinHeap"),
            HeapKind::Max => f.write_str("MaxHeap"),
        }
    }
}

/// Three-way ordering strategy over heap elements
///
/// The comparator decides both heap order and element identity: `delete`
/// matches the first stored element that compares `Equal` to the probe.
///
/// Implementations must describe a consistent total order (a strict weak
/// ordering is sufficient). The heap neither detects nor guards against an
/// inconsistent comparator; heap order and delete matching are simply
/// unspecified in that case.
///
/// Any `Fn(&V, &V) -> Ordering` closure is a comparator:
///
/// ```rust
/// use pqheap::{BinaryHeap, HeapKind};
///
/// let mut heap = BinaryHeap::new(HeapKind::Min, 8, |a: &i32, b: &i32| b.cmp(a));
/// heap.push(1);
/// heap.push(3);
/// assert_eq!(heap.peek(), Ok(&3));
/// ```
pub trait Comparator<V> {
    /// Compares `a` against `b`
    fn compare(&self, a: &V, b: &V) -> Ordering;
}

impl<V, F> Comparator<V> for F
where
    F: Fn(&V, &V) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &V, b: &V) -> Ordering {
        self(a, b)
    }
}

/// Comparator using the element's own [`Ord`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<V: Ord> Comparator<V> for Natural {
    #[inline]
    fn compare(&self, a: &V, b: &V) -> Ordering {
        a.cmp(b)
    }
}
