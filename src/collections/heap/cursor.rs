//! Live cursor over a `MinHeap`.
//!
//! The cursor walks slots in physical order and can remove the element it last
//! yielded. A removal moves the heap's last element into the vacated slot and
//! repairs the invariant immediately, so the cursor steps back to re-examine
//! that slot. If the repair sifts the replacement *upward*, it lands in a slot
//! the cursor has already passed and will not be yielded again on this pass.

use super::MinHeap;
use crate::error::{GraphError, Result};

/// A cursor with a paired `remove_current` operation.
///
/// Obtained from [`MinHeap::cursor_mut`].
///
/// ```rust
/// use heapgraph::MinHeap;
///
/// let mut heap: MinHeap<i32> = [4, 1, 3].into_iter().collect();
/// let mut cursor = heap.cursor_mut();
/// while let Some(&x) = cursor.advance() {
///     if x == 3 {
///         cursor.remove_current().unwrap();
///     }
/// }
/// assert_eq!(heap.len(), 2);
/// assert!(!heap.contains(&3));
/// ```
pub struct HeapCursor<'a, E> {
    heap: &'a mut MinHeap<E>,
    next: usize,
    last: Option<usize>,
}

impl<'a, E: Ord> HeapCursor<'a, E> {
    pub(super) fn new(heap: &'a mut MinHeap<E>) -> Self {
        Self {
            heap,
            next: 0,
            last: None,
        }
    }

    /// Yields the next element in physical order.
    pub fn advance(&mut self) -> Option<&E> {
        let idx = self.next;
        let item = self.heap.slot(idx)?;
        self.last = Some(idx);
        self.next += 1;
        Some(item)
    }

    /// Removes the element most recently yielded by [`HeapCursor::advance`].
    ///
    /// Equivalent to [`MinHeap::remove`] on that element.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidArgument`] if nothing has been yielded since
    /// the last removal.
    pub fn remove_current(&mut self) -> Result<E> {
        let idx = self.last.take().ok_or_else(|| {
            GraphError::InvalidArgument("remove_current called without a current element".into())
        })?;
        self.next = idx;
        Ok(self.heap.remove_at(idx))
    }

    /// Rewinds the cursor to the first slot.
    pub fn reset(&mut self) {
        self.next = 0;
        self.last = None;
    }
}
