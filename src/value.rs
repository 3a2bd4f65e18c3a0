//! Default element type and its comparator
//!
//! [`Value`] is the element the priority queue is usually driven with: a text
//! key plus two integers. [`DefaultComparator`] orders values by `term`, then
//! `payload`, then `score`, each field only breaking ties of the previous one.
//!
//! # Example
//!
//! ```rust
//! use pqheap::{BinaryHeap, DefaultComparator, HeapKind, Value};
//!
//! let mut heap = BinaryHeap::new(HeapKind::Min, 16, DefaultComparator);
//! heap.push(Value::new("term2", 2, 200));
//! heap.push(Value::new("term1", 1, 100));
//!
//! assert_eq!(heap.pop().unwrap().payload, 1);
//! ```

use std::cmp::Ordering;

use crate::traits::Comparator;

/// An element owned by the heap once pushed
///
/// The term is copied into storage owned by the value, so a `Value` never
/// borrows from the caller. Dropping it releases that storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value {
    /// Text key, the primary sort field
    pub term: String,
    /// Secondary sort field
    pub payload: i32,
    /// Tertiary sort field
    pub score: i32,
}

impl Value {
    /// Creates a value, copying `term` into newly owned storage
    pub fn new(term: &str, payload: i32, score: i32) -> Self {
        Self {
            term: term.to_owned(),
            payload,
            score,
        }
    }
}

/// Lexicographic `term`, then `payload`, then `score`
///
/// Terms compare by bytes, so ordering is independent of locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultComparator;

impl Comparator<Value> for DefaultComparator {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        if std::ptr::eq(a, b) {
            return Ordering::Equal;
        }
        a.term
            .as_bytes()
            .cmp(b.term.as_bytes())
            .then_with(|| a.payload.cmp(&b.payload))
            .then_with(|| a.score.cmp(&b.score))
    }
}
