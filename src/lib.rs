//! Binary priority queue with a pluggable comparator
//!
//! This crate provides an array-backed binary heap that can run as either a
//! min-heap or a max-heap, ordered by a comparator chosen at construction
//! rather than by the element's `Ord` implementation.
//!
//! # Features
//!
//! - **Min or max ordering** from the same comparator, selected by [`HeapKind`]
//! - **Explicit capacity policy**: doubling on overflow, halving once a pop
//!   leaves the heap half empty, never below [`MIN_CAPACITY`]
//! - **Removal by value**: [`BinaryHeap::delete`] and [`BinaryHeap::remove`]
//!   match elements with the comparator, not by identity
//! - **Array-order iteration** with early exit via [`BinaryHeap::iterate`]
//!
//! # Example
//!
//! ```rust
//! use pqheap::{BinaryHeap, DefaultComparator, Value};
//!
//! let mut heap = BinaryHeap::min(DefaultComparator);
//! heap.push(Value::new("termm4", 4, 400));
//! heap.push(Value::new("termm1", 1, 100));
//! assert_eq!(heap.peek().unwrap().payload, 1);
//!
//! let top = heap.pop().unwrap();
//! assert_eq!(top.term, "termm1");
//! assert_eq!(heap.len(), 1);
//! ```
//!
//! # Threading
//!
//! Every operation runs synchronously on the caller's thread. The heap does no
//! locking of its own; wrap it in a mutex to share it between threads.

pub mod binary;
pub mod config;
pub mod traits;
pub mod value;

pub use binary::BinaryHeap;
pub use config::{HeapConfig, DEFAULT_CAPACITY, MIN_CAPACITY};
pub use traits::{Comparator, HeapError, HeapKind, Natural};
pub use value::{DefaultComparator, Value};
