//! `MinHeap`: an array-backed binary min-heap with arbitrary-element removal.
//!
//! Unlike `std::collections::BinaryHeap`, this heap can remove *any* matching
//! element in place, restoring the heap invariant from the vacated slot in both
//! directions. That is what lets `PriorityGraph` use one heap per vertex as its
//! adjacency storage and still delete edges without rebuilding.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | \(O(\log n)\) | amortized \(O(1)\) growth by doubling |
//! | `peek_min` | \(O(1)\) | root slot |
//! | `extract_min` | \(O(\log n)\) | last element to root, then sift down |
//! | `contains` | \(O(n)\) | linear scan |
//! | `remove` | \(O(n)\) | linear scan + \(O(\log n)\) repair |

mod cursor;

pub use cursor::HeapCursor;

use crate::error::{GraphError, Result};
use core::fmt;

/// Backing capacity of a heap created with [`MinHeap::new`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 11;

/// A binary min-heap.
///
/// The smallest element (by `Ord`) is always at the root. For every non-root
/// slot `i`, `data[(i - 1) / 2] <= data[i]`.
pub struct MinHeap<E> {
    data: Vec<E>,
    /// Logical backing capacity; doubles whenever an insert finds the heap full.
    capacity: usize,
}

impl<E: Ord> MinHeap<E> {
    /// Creates an empty heap with [`DEFAULT_INITIAL_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty heap with a specific initial capacity.
    ///
    /// A capacity of zero is clamped to one so that doubling always grows.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Inserts an element, growing the backing storage if it is full.
    pub fn insert(&mut self, element: E) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the smallest element, or `None` if the heap is empty.
    pub fn peek_min(&self) -> Option<&E> {
        self.data.first()
    }

    /// Removes and returns the smallest element, or `None` if the heap is empty.
    pub fn extract_min(&mut self) -> Option<E> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let item = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    /// Returns `true` if an element equal to `element` is stored.
    pub fn contains(&self, element: &E) -> bool {
        self.data.iter().any(|e| e == element)
    }

    /// Removes the first stored element equal to `element`.
    ///
    /// The last element takes over the vacated slot and is then sifted down and
    /// up, since it came from an arbitrary position and may violate the
    /// invariant in either direction. Returns whether a match was removed.
    pub fn remove(&mut self, element: &E) -> bool {
        match self.data.iter().position(|e| e == element) {
            Some(idx) => {
                self.remove_at(idx);
                true
            }
            None => false,
        }
    }

    /// Removes every element matching `pred`, returning them in removal order.
    ///
    /// Each removal goes through the same repair path as [`MinHeap::remove`].
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<E>
    where
        F: FnMut(&E) -> bool,
    {
        let mut removed = Vec::new();
        while let Some(idx) = self.data.iter().position(&mut pred) {
            removed.push(self.remove_at(idx));
        }
        removed
    }

    /// Returns a live cursor that can remove the element it last yielded.
    pub fn cursor_mut(&mut self) -> HeapCursor<'_, E> {
        HeapCursor::new(self)
    }

    /// Consumes the heap, returning its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<E> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(item) = self.extract_min() {
            out.push(item);
        }
        out
    }

    /// Checks the heap invariant over every parent/child pair.
    pub fn validate_invariants(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2] <= self.data[i])
    }

    /// Bulk membership test. Not supported by this heap.
    ///
    /// # Errors
    /// Always returns [`GraphError::UnsupportedOperation`].
    pub fn contains_all<I>(&self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = E>,
    {
        Err(GraphError::UnsupportedOperation("contains_all"))
    }

    /// Bulk insertion as a set operation. Not supported by this heap.
    ///
    /// Use [`Extend`] for element-wise insertion instead.
    ///
    /// # Errors
    /// Always returns [`GraphError::UnsupportedOperation`].
    pub fn add_all<I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = E>,
    {
        Err(GraphError::UnsupportedOperation("add_all"))
    }

    /// Bulk removal. Not supported by this heap.
    ///
    /// # Errors
    /// Always returns [`GraphError::UnsupportedOperation`].
    pub fn remove_all<I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = E>,
    {
        Err(GraphError::UnsupportedOperation("remove_all"))
    }

    /// Bulk retention. Not supported by this heap.
    ///
    /// # Errors
    /// Always returns [`GraphError::UnsupportedOperation`].
    pub fn retain_all<I>(&mut self, _items: I) -> Result<bool>
    where
        I: IntoIterator<Item = E>,
    {
        Err(GraphError::UnsupportedOperation("retain_all"))
    }

    /// Clearing the heap. Not supported by this heap.
    ///
    /// # Errors
    /// Always returns [`GraphError::UnsupportedOperation`].
    pub fn clear(&mut self) -> Result<()> {
        Err(GraphError::UnsupportedOperation("clear"))
    }

    /// Removes the element at `idx` and repairs the heap from that slot.
    pub(crate) fn remove_at(&mut self, idx: usize) -> E {
        let last_idx = self.data.len() - 1;
        self.data.swap(idx, last_idx);
        let item = self.data.swap_remove(last_idx);
        if idx < self.data.len() {
            self.sift_down(idx);
            self.sift_up(idx);
        }
        item
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        self.data.reserve_exact(new_capacity - self.data.len());
        trace_event!(trace, from = self.capacity, to = new_capacity, "min-heap grew");
        self.capacity = new_capacity;
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.data[node] < self.data[parent] {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.data[right] < self.data[left] {
                smaller = right;
            }

            if self.data[smaller] < self.data[node] {
                self.data.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }
}

impl<E> MinHeap<E> {
    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the logical backing capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over all elements in physical array order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.data.iter()
    }

    /// Copies the live elements in physical array order.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.data.clone()
    }

    pub(crate) fn slot(&self, idx: usize) -> Option<&E> {
        self.data.get(idx)
    }
}

impl<E: Clone> Clone for MinHeap<E> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend(self.data.iter().cloned());
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

impl<E: Ord> Default for MinHeap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord> Extend<E> for MinHeap<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<E: Ord> FromIterator<E> for MinHeap<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<'a, E> IntoIterator for &'a MinHeap<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for MinHeap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}
