//! Array-backed binary heap
//!
//! A binary heap stored in a contiguous vector, ordered by an injected
//! [`Comparator`] and yielding either its smallest or its largest element
//! first depending on the [`HeapKind`].
//!
//! Capacity is managed explicitly rather than left to `Vec`: it starts at the
//! configured initial capacity, doubles when a push finds every slot taken,
//! and halves after a pop leaves the heap at most half full. It never drops
//! below [`MIN_CAPACITY`].
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n) amortized |
//! | `pop`     | O(log n) amortized |
//! | `peek`    | O(1)       |
//! | `delete`  | O(n)       |
//! | `iterate` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use pqheap::{BinaryHeap, DefaultComparator, Value};
//!
//! let mut heap = BinaryHeap::max(DefaultComparator);
//! heap.push(Value::new("term1", 1, 0));
//! heap.push(Value::new("term3", 3, 0));
//! heap.push(Value::new("term2", 2, 0));
//!
//! assert_eq!(heap.peek().unwrap().term, "term3");
//! assert!(heap.delete(&Value::new("term3", 3, 0)));
//! assert_eq!(heap.pop().unwrap().term, "term2");
//! assert_eq!(heap.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::config::{HeapConfig, MIN_CAPACITY};
use crate::traits::{Comparator, HeapError, HeapKind};

/// A binary min-heap or max-heap over owned elements
///
/// Elements move into the heap on [`push`](Self::push) and move back out on
/// [`pop`](Self::pop) or [`remove`](Self::remove); no element is ever
/// reachable from both the caller and the heap. Elements still stored when
/// the heap is dropped or [`dispose`](Self::dispose)d are dropped with it.
///
/// The occupied slots always satisfy the heap property: for every slot `i`
/// with parent `p = (i - 1) / 2`, the element at `p` is no worse than the
/// element at `i` under the effective order (the comparator for a min-heap,
/// the reversed comparator for a max-heap).
pub struct BinaryHeap<V, C> {
    /// Occupied slots in heap order
    data: Vec<V>,
    /// Slot count the heap manages; `data` always has at least this much room
    capacity: usize,
    kind: HeapKind,
    compare: C,
}

impl<V, C: Comparator<V>> BinaryHeap<V, C> {
    /// Creates an empty heap with room for `initial_capacity` elements
    ///
    /// A capacity below [`MIN_CAPACITY`] is raised to it.
    pub fn new(kind: HeapKind, initial_capacity: usize, compare: C) -> Self {
        Self::with_config(
            HeapConfig::new(kind).with_initial_capacity(initial_capacity),
            compare,
        )
    }

    /// Creates an empty min-heap with the default capacity
    pub fn min(compare: C) -> Self {
        Self::with_config(HeapConfig::new(HeapKind::Min), compare)
    }

    /// Creates an empty max-heap with the default capacity
    pub fn max(compare: C) -> Self {
        Self::with_config(HeapConfig::new(HeapKind::Max), compare)
    }

    pub fn with_config(config: HeapConfig, compare: C) -> Self {
        let capacity = config.effective_capacity();
        if capacity != config.initial_capacity {
            log::debug!(
                "initial capacity {} raised to minimum {}",
                config.initial_capacity,
                capacity
            );
        }
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            kind: config.kind,
            compare,
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of slots the heap currently manages
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Returns the extreme element without removing it
    ///
    /// That is the minimum for a min-heap and the maximum for a max-heap.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the heap is empty.
    pub fn peek(&self) -> Result<&V, HeapError> {
        self.data.first().ok_or(HeapError::EmptyQueue)
    }

    /// Inserts an element, taking ownership of it
    ///
    /// Doubles the capacity first if every slot is taken. Allocation failure
    /// aborts the process like any other std collection; use
    /// [`try_push`](Self::try_push) to observe it instead.
    pub fn push(&mut self, value: V) {
        if self.data.len() >= self.capacity {
            let new_capacity = self.capacity.saturating_mul(2);
            self.data.reserve_exact(new_capacity - self.data.len());
            self.set_capacity(new_capacity);
        }
        self.insert(value);
    }

    /// Inserts an element, reporting allocation failure during growth
    ///
    /// # Errors
    /// Returns [`HeapError::OutOfMemory`] if the doubled storage cannot be
    /// allocated. The heap is left unchanged and `value` is dropped.
    pub fn try_push(&mut self, value: V) -> Result<(), HeapError> {
        if self.data.len() >= self.capacity {
            let new_capacity = self.capacity.saturating_mul(2);
            if let Err(err) = self.data.try_reserve_exact(new_capacity - self.data.len()) {
                log::warn!("cannot grow heap to {} slots: {}", new_capacity, err);
                return Err(HeapError::OutOfMemory {
                    requested: new_capacity,
                });
            }
            self.set_capacity(new_capacity);
        }
        self.insert(value);
        Ok(())
    }

    /// Removes and returns the extreme element
    ///
    /// Halves the capacity afterwards if the heap is at most half full and
    /// the result stays at or above [`MIN_CAPACITY`].
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the heap is empty.
    pub fn pop(&mut self) -> Result<V, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyQueue);
        }

        // The last element takes the root's slot
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        if self.data.len() * 2 <= self.capacity {
            self.shrink();
        }

        Ok(top)
    }

    /// Removes the first element comparing equal to `probe` and drops it
    ///
    /// Returns false, leaving the heap untouched, when nothing matches.
    /// See [`remove`](Self::remove) for the matching rules.
    pub fn delete(&mut self, probe: &V) -> bool {
        self.remove(probe).is_some()
    }

    /// Removes the first element comparing equal to `probe` and returns it
    ///
    /// Slots are scanned in array order, not sorted order, and matching uses
    /// the comparator only: `probe` can be a separately built copy of the
    /// element to remove. The tail element fills the vacated slot and is then
    /// moved up or down as needed. Capacity is left as is.
    ///
    /// # Time Complexity
    /// O(n) for the scan, plus O(log n) for the repair.
    pub fn remove(&mut self, probe: &V) -> Option<V> {
        let index = self
            .data
            .iter()
            .position(|v| self.compare.compare(probe, v) == Ordering::Equal)?;

        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.sift_up(index);
            self.sift_down(index);
        }

        Some(removed)
    }

    /// Visits the elements in internal array order until `visit` returns false
    ///
    /// The order is the heap's storage order, which is NOT sorted order; only
    /// the first element visited is guaranteed to be the extreme one. Any
    /// state the visitor needs travels in its captures:
    ///
    /// ```rust
    /// use pqheap::{BinaryHeap, Natural};
    ///
    /// let mut heap = BinaryHeap::min(Natural);
    /// heap.extend([5, 1, 4, 2]);
    ///
    /// let mut seen = 0;
    /// heap.iterate(|_| {
    ///     seen += 1;
    ///     seen < 3
    /// });
    /// assert_eq!(seen, 3);
    /// ```
    pub fn iterate<F>(&self, mut visit: F)
    where
        F: FnMut(&V) -> bool,
    {
        for value in &self.data {
            if !visit(value) {
                break;
            }
        }
    }

    /// Returns an iterator over the elements in internal array order
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.data.iter()
    }

    /// Drops every remaining element and releases the heap's storage
    pub fn dispose(self) {
        log::debug!(
            "disposing {} with {} remaining elements",
            self.kind,
            self.data.len()
        );
        drop(self);
    }

    /// Effective order: `Less` means `a` belongs closer to the root than `b`
    #[inline]
    fn order(&self, a: &V, b: &V) -> Ordering {
        self.kind.orient(self.compare.compare(a, b))
    }

    fn insert(&mut self, value: V) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.order(&self.data[parent], &self.data[index]) != Ordering::Greater {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // Left wins ties
            let child = if right < len
                && self.order(&self.data[right], &self.data[left]) == Ordering::Less
            {
                right
            } else {
                left
            };

            if self.order(&self.data[index], &self.data[child]) != Ordering::Greater {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }

    fn shrink(&mut self) {
        let new_capacity = self.capacity / 2;
        if new_capacity < MIN_CAPACITY {
            return;
        }
        self.data.shrink_to(new_capacity);
        self.set_capacity(new_capacity);
    }

    fn set_capacity(&mut self, new_capacity: usize) {
        log::trace!(
            "{} capacity {} -> {} (len {})",
            self.kind,
            self.capacity,
            new_capacity,
            self.data.len()
        );
        self.capacity = new_capacity;
    }
}

impl<V, C: Comparator<V> + Default> Default for BinaryHeap<V, C> {
    fn default() -> Self {
        Self::with_config(HeapConfig::default(), C::default())
    }
}

impl<V, C: Comparator<V>> Extend<V> for BinaryHeap<V, C> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, V, C> IntoIterator for &'a BinaryHeap<V, C> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<V: fmt::Debug, C> fmt::Debug for BinaryHeap<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("kind", &self.kind)
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Natural;
    use crate::value::{DefaultComparator, Value};

    fn assert_heap_property<V, C: Comparator<V>>(heap: &BinaryHeap<V, C>) {
        for i in 1..heap.data.len() {
            let parent = (i - 1) / 2;
            assert_ne!(
                heap.order(&heap.data[parent], &heap.data[i]),
                Ordering::Greater,
                "slot {} is better than its parent {}",
                i,
                parent
            );
        }
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryHeap::min(Natural);

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Ok(&1));

        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.pop(), Err(HeapError::EmptyQueue));
    }

    #[test]
    fn test_max_heap_order() {
        let mut heap = BinaryHeap::max(Natural);
        heap.extend([3, 9, 1, 7]);

        assert_eq!(heap.peek(), Ok(&9));
        assert_eq!(heap.pop(), Ok(9));
        assert_eq!(heap.pop(), Ok(7));
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.pop(), Ok(1));
    }

    #[test]
    fn test_empty_peek() {
        let heap: BinaryHeap<i32, Natural> = BinaryHeap::default();
        assert_eq!(heap.peek(), Err(HeapError::EmptyQueue));
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut heap = BinaryHeap::min(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));

        heap.push((1, 'a'));
        heap.push((1, 'b'));
        heap.push((1, 'c'));

        assert_eq!(heap.len(), 3);
        for _ in 0..3 {
            assert_eq!(heap.pop().map(|(p, _)| p), Ok(1));
        }
    }

    #[test]
    fn test_capacity_doubles_on_overflow() {
        let mut heap = BinaryHeap::new(HeapKind::Min, 4, Natural);
        assert_eq!(heap.capacity(), 4);

        heap.extend(0..4);
        assert_eq!(heap.capacity(), 4);

        heap.push(4);
        assert_eq!(heap.capacity(), 8);
        assert!(heap.data.capacity() >= 8);

        heap.extend(5..9);
        assert_eq!(heap.capacity(), 16);
    }

    #[test]
    fn test_capacity_halves_on_pop() {
        let mut heap = BinaryHeap::new(HeapKind::Min, 16, Natural);
        heap.extend(0..9);
        assert_eq!(heap.capacity(), 16);

        // 8 left: 8 * 2 <= 16
        heap.pop().unwrap();
        assert_eq!(heap.capacity(), 8);

        // 7 left: 14 > 8, no shrink
        heap.pop().unwrap();
        assert_eq!(heap.capacity(), 8);

        // 4 left: 8 * 2 <= 8
        for _ in 0..3 {
            heap.pop().unwrap();
        }
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.capacity(), 4);

        while heap.pop().is_ok() {}
        assert_eq!(heap.capacity(), MIN_CAPACITY);
    }

    #[test]
    fn test_capacity_floor() {
        let heap: BinaryHeap<i32, _> = BinaryHeap::new(HeapKind::Max, 1, Natural);
        assert_eq!(heap.capacity(), MIN_CAPACITY);
        assert_eq!(heap.kind(), HeapKind::Max);
    }

    #[test]
    fn test_delete_does_not_shrink() {
        let mut heap = BinaryHeap::new(HeapKind::Min, 8, Natural);
        heap.extend(0..6);
        assert!(heap.delete(&3));
        assert!(heap.delete(&4));
        assert!(heap.delete(&5));
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.capacity(), 8);
    }

    #[test]
    fn test_try_push() {
        let mut heap = BinaryHeap::new(HeapKind::Min, 4, Natural);
        for i in (0..10).rev() {
            assert_eq!(heap.try_push(i), Ok(()));
        }
        assert_eq!(heap.capacity(), 16);
        assert_eq!(heap.peek(), Ok(&0));
        assert_heap_property(&heap);
    }

    #[test]
    fn test_remove_returns_matched_element() {
        let mut heap = BinaryHeap::max(DefaultComparator);
        for i in 1..=4 {
            heap.push(Value::new(&format!("term{}", i), i, 0));
        }

        // The probe is a distinct copy; matching is by comparator
        let removed = heap.remove(&Value::new("term3", 3, 0));
        assert_eq!(removed, Some(Value::new("term3", 3, 0)));
        assert_eq!(heap.len(), 3);
        assert!(heap.iter().all(|v| v.term != "term3"));
        assert_heap_property(&heap);

        assert_eq!(heap.remove(&Value::new("term9", 9, 0)), None);
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn test_remove_repairs_upward() {
        // Removing from one subtree can pull a smaller tail element up
        let mut heap = BinaryHeap::min(Natural);
        heap.extend([0, 10, 1, 11, 12, 2, 3]);
        assert_heap_property(&heap);

        assert!(heap.delete(&11));
        assert_heap_property(&heap);
        assert_eq!(heap.iter().filter(|&&v| v == 3).count(), 1);

        let drained: Vec<_> = std::iter::from_fn(|| heap.pop().ok()).collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 10, 12]);
    }

    #[test]
    fn test_remove_last_slot() {
        let mut heap = BinaryHeap::min(Natural);
        heap.extend([1, 2, 3]);
        assert!(heap.delete(&3));
        assert_eq!(heap.len(), 2);
        assert_heap_property(&heap);
    }

    #[test]
    fn test_iterate_short_circuit() {
        let mut heap = BinaryHeap::min(Natural);
        heap.extend(0..10);

        let mut visited = Vec::new();
        heap.iterate(|v| {
            visited.push(*v);
            visited.len() < 4
        });
        assert_eq!(visited.len(), 4);
        assert_eq!(visited, heap.iter().take(4).copied().collect::<Vec<_>>());
    }

    #[test]
    fn test_iterate_array_order() {
        let mut heap = BinaryHeap::min(Natural);
        heap.extend([5, 3, 4, 1]);

        let mut visited = Vec::new();
        heap.iterate(|v| {
            visited.push(*v);
            true
        });
        assert_eq!(visited, heap.data);
        assert_eq!((&heap).into_iter().count(), 4);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = BinaryHeap::min(Natural);

        for i in 0..100 {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = BinaryHeap::max(Natural);

        for i in 0..100 {
            heap.push(i);
        }

        for i in (0..100).rev() {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_debug_output() {
        let mut heap = BinaryHeap::max(Natural);
        heap.push(1);
        let rendered = format!("{:?}", heap);
        assert!(rendered.contains("Max"));
        assert!(rendered.contains("data: [1]"));
    }
}
