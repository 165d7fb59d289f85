//! Fixed-capacity binary min-heap
//!
//! [`StaticMinHeap`] keeps up to `N` elements in an inline array and never
//! allocates. Capacity is a const generic, so a heap can be placed in a
//! `static`, on the stack of a real-time task, or inside another struct.
//!
//! Ordering comes from a [`Compare`] implementation. The default,
//! [`NaturalOrder`], uses `Ord`; any `Fn(&T, &T) -> Ordering` works too.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert`  | O(log N)   |
//! | `remove`  | O(log N)   |
//! | `pop`     | O(log N)   |
//! | `peek`    | O(1)       |
//! | `clear`   | O(1) for `Copy` elements, O(len) otherwise |
//!
//! # Example
//!
//! ```rust
//! use static_min_heap::StaticMinHeap;
//!
//! let mut heap: StaticMinHeap<u32, 4> = StaticMinHeap::new();
//! heap.insert(5).unwrap();
//! heap.insert(3).unwrap();
//! heap.insert(8).unwrap();
//!
//! assert_eq!(heap.peek(), Some(&3));
//! let eight = heap.position(|&x| x == 8).unwrap();
//! assert_eq!(heap.remove(eight), Ok(8));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), None);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::compare::{Compare, NaturalOrder};
use crate::traits::{BoundedHeap, CapacityError, HeapError};

/// A binary min-heap holding at most `N` elements of type `T`
///
/// Slots `[0, len)` are initialized and satisfy the heap property under `C`:
/// no element compares less than its parent. Slots `[len, N)` are
/// uninitialized and never read.
///
/// Equal elements carry no relative order; the order in which they are
/// removed may change across inserts and removals.
pub struct StaticMinHeap<T, const N: usize, C = NaturalOrder> {
    len: usize,
    data: [MaybeUninit<T>; N],
    cmp: C,
}

impl<T: Ord, const N: usize> StaticMinHeap<T, N, NaturalOrder> {
    /// Creates an empty heap ordered by `Ord`
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, const N: usize, C> StaticMinHeap<T, N, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use core::cmp::Ordering;
    /// use static_min_heap::StaticMinHeap;
    ///
    /// // Latest deadline first
    /// let mut heap = StaticMinHeap::<u64, 8, _>::with_comparator(|a: &u64, b: &u64| b.cmp(a));
    /// heap.insert(10).unwrap();
    /// heap.insert(30).unwrap();
    /// assert_eq!(heap.peek(), Some(&30));
    /// ```
    pub const fn with_comparator(cmp: C) -> Self {
        Self {
            len: 0,
            // SAFETY: an array of `MaybeUninit` needs no initialization
            data: unsafe { MaybeUninit::<[MaybeUninit<T>; N]>::uninit().assume_init() },
            cmp,
        }
    }

    /// Maximum number of elements
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of elements currently stored
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no elements
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no further element can be inserted
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len >= N
    }

    /// Returns the minimum element, or `None` if the heap is empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The occupied slots in heap (array) order
    ///
    /// Index `i` in this slice is the index accepted by [`remove`](Self::remove).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized
        unsafe { slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    /// Iterates over the elements in heap order (not sorted)
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Index of the first element (heap order) matching `pred`
    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }

    /// The comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes every element
    ///
    /// Element destructors run in place; for `Copy` types this only resets the
    /// length.
    pub fn clear(&mut self) {
        let len = self.len;
        // Reset first so a panicking destructor leaks instead of double-dropping.
        self.len = 0;
        // SAFETY: slots [0, len) were initialized and are no longer reachable
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.data.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// # Safety
    /// `index < self.len`
    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        unsafe { self.data.get_unchecked(index).assume_init_ref() }
    }
}

impl<T, const N: usize, C: Compare<T>> StaticMinHeap<T, N, C> {
    /// Inserts `item`
    ///
    /// # Errors
    /// Returns the item inside a [`CapacityError`] when the heap is full. The
    /// heap is left unchanged.
    pub fn insert(&mut self, item: T) -> Result<(), CapacityError<T>> {
        if self.len >= N {
            trace!("insert rejected: heap full at capacity {}", N);
            return Err(CapacityError::new(item, N));
        }

        let cur = self.len;
        self.data[cur].write(item);
        self.len += 1;
        self.sift_up(cur);
        Ok(())
    }

    /// Removes and returns the element at `index` (heap order)
    ///
    /// `remove(0)` extracts the minimum. Other indices come from
    /// [`position`](Self::position) or [`as_slice`](Self::as_slice).
    ///
    /// # Errors
    /// Returns `HeapError::OutOfRange` when `index >= len()`, including every
    /// call on an empty heap. The heap is left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        if index >= self.len {
            trace!("remove rejected: index {} with length {}", index, self.len);
            return Err(HeapError::OutOfRange {
                index,
                len: self.len,
            });
        }

        // Move the removed element to the end, the last element into the hole.
        let last = self.len - 1;
        if last > 0 {
            self.data.swap(index, last);
        }
        self.len = last;
        // SAFETY: slot `last` was initialized and is now outside [0, len)
        let removed = unsafe { self.data[last].assume_init_read() };

        if index == self.len {
            return Ok(removed);
        }

        // SAFETY: index < len
        let moved = unsafe { self.get_unchecked(index) };
        match self.cmp.compare(moved, &removed) {
            Ordering::Less => self.sift_up(index),
            Ordering::Greater => self.sift_down(index),
            Ordering::Equal => {}
        }
        Ok(removed)
    }

    /// Removes the element at `index` and drops it
    ///
    /// # Errors
    /// Same as [`remove`](Self::remove).
    pub fn discard(&mut self, index: usize) -> Result<(), HeapError> {
        self.remove(index).map(drop)
    }

    /// Removes and returns the minimum element
    pub fn pop(&mut self) -> Option<T> {
        self.remove(0).ok()
    }

    /// # Safety
    /// `a < self.len && b < self.len`
    #[inline]
    unsafe fn less(&self, a: usize, b: usize) -> bool {
        unsafe { self.cmp.less(self.get_unchecked(a), self.get_unchecked(b)) }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            // SAFETY: parent < index < len
            if unsafe { self.less(index, parent) } {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// Descends only while the smaller child is strictly less than the
    /// current element.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.len;
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // SAFETY: left < right < len where compared
            let child = if right < len && unsafe { self.less(right, left) } {
                right
            } else {
                left
            };

            // SAFETY: child < len, index < child
            if unsafe { self.less(child, index) } {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T, const N: usize, C> Drop for StaticMinHeap<T, N, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize, C: Default> Default for StaticMinHeap<T, N, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, const N: usize, C: Clone> Clone for StaticMinHeap<T, N, C> {
    fn clone(&self) -> Self {
        let mut out = Self::with_comparator(self.cmp.clone());
        // Slot-for-slot copy keeps the heap layout, so no re-sifting.
        for (slot, item) in out.data.iter_mut().zip(self.as_slice()) {
            slot.write(item.clone());
            out.len += 1;
        }
        out
    }
}

impl<T: fmt::Debug, const N: usize, C> fmt::Debug for StaticMinHeap<T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticMinHeap")
            .field("capacity", &N)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<'a, T, const N: usize, C> IntoIterator for &'a StaticMinHeap<T, N, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone, const N: usize, C: Compare<T>> BoundedHeap for StaticMinHeap<T, N, C> {
    type Item = T;

    fn capacity(&self) -> usize {
        N
    }

    fn len(&self) -> usize {
        self.len
    }

    fn peek(&self) -> Option<&T> {
        StaticMinHeap::peek(self)
    }

    fn clear(&mut self) {
        StaticMinHeap::clear(self)
    }

    fn insert_from(&mut self, item: &T) -> Result<(), HeapError> {
        if self.is_full() {
            trace!("insert rejected: heap full at capacity {}", N);
            return Err(HeapError::Full { capacity: N });
        }
        self.insert(item.clone()).map_err(HeapError::from)
    }

    fn remove_into(&mut self, index: usize, out: Option<&mut T>) -> Result<(), HeapError> {
        let removed = self.remove(index)?;
        if let Some(out) = out {
            *out = removed;
        }
        Ok(())
    }
}
