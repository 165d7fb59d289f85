//! Byte-layout min-heap over borrowed storage
//!
//! [`ErasedMinHeap`] stores elements as raw byte records of a fixed size in a
//! caller-supplied buffer. It is the variant to reach for when the element
//! type is only known by its size at runtime, for example records shared with
//! a C interface or read from a memory-mapped region.
//!
//! The heap never allocates. Swapping two records exchanges their byte ranges
//! in place, so no scratch slot is reserved in the storage.
//!
//! # Example
//!
//! ```rust
//! use core::cmp::Ordering;
//! use static_min_heap::ErasedMinHeap;
//!
//! fn by_le_u16(a: &[u8], b: &[u8]) -> Ordering {
//!     u16::from_le_bytes([a[0], a[1]]).cmp(&u16::from_le_bytes([b[0], b[1]]))
//! }
//!
//! let mut storage = [0u8; 2 * 4];
//! let mut heap = ErasedMinHeap::new(&mut storage, 2, 4, by_le_u16).unwrap();
//! heap.insert(&300u16.to_le_bytes()).unwrap();
//! heap.insert(&7u16.to_le_bytes()).unwrap();
//!
//! let mut out = [0u8; 2];
//! heap.remove(0, Some(&mut out)).unwrap();
//! assert_eq!(u16::from_le_bytes(out), 7);
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::compare::Compare;
use crate::traits::{BoundedHeap, HeapError};

/// Comparator signature for byte records
pub type RawCompare = fn(&[u8], &[u8]) -> Ordering;

/// A binary min-heap of fixed-size byte records in borrowed storage
pub struct ErasedMinHeap<'a, C = RawCompare> {
    elem_size: usize,
    len: usize,
    capacity: usize,
    storage: &'a mut [u8],
    cmp: C,
}

impl<'a, C: Compare<[u8]>> ErasedMinHeap<'a, C> {
    /// Creates an empty heap of `capacity` records of `elem_size` bytes each
    ///
    /// Only the first `elem_size * capacity` bytes of `storage` are used.
    ///
    /// # Errors
    /// `HeapError::InvalidLayout` if `elem_size` is zero or `storage` is too
    /// short.
    pub fn new(
        storage: &'a mut [u8],
        elem_size: usize,
        capacity: usize,
        cmp: C,
    ) -> Result<Self, HeapError> {
        let fits = elem_size
            .checked_mul(capacity)
            .is_some_and(|needed| needed <= storage.len());
        if elem_size == 0 || !fits {
            debug!(
                "invalid layout: {} elements of {} bytes in {} bytes",
                capacity,
                elem_size,
                storage.len()
            );
            return Err(HeapError::InvalidLayout {
                elem_size,
                capacity,
                storage_len: storage.len(),
            });
        }

        Ok(Self {
            elem_size,
            len: 0,
            capacity,
            storage,
            cmp,
        })
    }

    /// Size of one record in bytes
    #[inline]
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Maximum number of records
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records currently stored
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no records
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no further record can be inserted
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }

    /// Returns the minimum record, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&[u8]> {
        (self.len > 0).then(|| self.slot(0))
    }

    /// Returns the record at `index` (heap order)
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        (index < self.len).then(|| self.slot(index))
    }

    /// Index of the first record (heap order) matching `pred`
    pub fn position<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&[u8]) -> bool,
    {
        (0..self.len).find(|&i| pred(self.slot(i)))
    }

    /// Forgets every record; the bytes are left as they are
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Copies `item` into the heap
    ///
    /// # Errors
    /// `HeapError::SizeMismatch` if `item` is not `elem_size` bytes long,
    /// `HeapError::Full` if the heap is at capacity. The heap is unchanged on
    /// error.
    pub fn insert(&mut self, item: &[u8]) -> Result<(), HeapError> {
        self.check_size(item.len())?;
        if self.len >= self.capacity {
            trace!("insert rejected: heap full at capacity {}", self.capacity);
            return Err(HeapError::Full {
                capacity: self.capacity,
            });
        }

        let cur = self.len;
        self.slot_mut(cur).copy_from_slice(item);
        self.len += 1;
        self.sift_up(cur);
        Ok(())
    }

    /// Removes the record at `index`, copying it into `out` if given
    ///
    /// # Errors
    /// `HeapError::SizeMismatch` if `out` is not `elem_size` bytes long,
    /// `HeapError::OutOfRange` if `index >= len()`. The heap is unchanged on
    /// error.
    pub fn remove(&mut self, index: usize, out: Option<&mut [u8]>) -> Result<(), HeapError> {
        if let Some(out) = out.as_deref() {
            self.check_size(out.len())?;
        }
        if index >= self.len {
            trace!("remove rejected: index {} with length {}", index, self.len);
            return Err(HeapError::OutOfRange {
                index,
                len: self.len,
            });
        }

        let last = self.len - 1;
        if last > 0 {
            self.swap(index, last);
        }
        self.len = last;
        if let Some(out) = out {
            out.copy_from_slice(self.slot(last));
        }

        if index == self.len {
            return Ok(());
        }

        // The removed record still sits in slot `last`, outside [0, len).
        match self.cmp.compare(self.slot(index), self.slot(last)) {
            Ordering::Less => self.sift_up(index),
            Ordering::Greater => self.sift_down(index),
            Ordering::Equal => {}
        }
        Ok(())
    }

    /// Removes the minimum record into `out`
    ///
    /// Returns false if the heap was empty or `out` has the wrong length.
    pub fn pop_into(&mut self, out: &mut [u8]) -> bool {
        self.remove(0, Some(out)).is_ok()
    }

    fn check_size(&self, found: usize) -> Result<(), HeapError> {
        if found == self.elem_size {
            Ok(())
        } else {
            trace!("buffer of {} bytes, element size {}", found, self.elem_size);
            Err(HeapError::SizeMismatch {
                expected: self.elem_size,
                found,
            })
        }
    }

    #[inline]
    fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.elem_size;
        &self.storage[start..start + self.elem_size]
    }

    #[inline]
    fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.elem_size;
        &mut self.storage[start..start + self.elem_size]
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.cmp.less(self.slot(a), self.slot(b))
    }

    /// Exchanges two records byte for byte
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let size = self.elem_size;
        let (head, tail) = self.storage.split_at_mut(hi * size);
        head[lo * size..(lo + 1) * size].swap_with_slice(&mut tail[..size]);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.len;
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };

            if self.less(child, index) {
                self.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<C> fmt::Debug for ErasedMinHeap<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedMinHeap")
            .field("elem_size", &self.elem_size)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<C: Compare<[u8]>> BoundedHeap for ErasedMinHeap<'_, C> {
    type Item = [u8];

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.len
    }

    fn peek(&self) -> Option<&[u8]> {
        ErasedMinHeap::peek(self)
    }

    fn clear(&mut self) {
        ErasedMinHeap::clear(self)
    }

    fn insert_from(&mut self, item: &[u8]) -> Result<(), HeapError> {
        self.insert(item)
    }

    fn remove_into(&mut self, index: usize, out: Option<&mut [u8]>) -> Result<(), HeapError> {
        self.remove(index, out)
    }
}
