//! Common traits and error types for the fixed-capacity heaps
//!
//! - [`BoundedHeap`]: the operation set shared by [`StaticMinHeap`](crate::StaticMinHeap)
//!   and [`ErasedMinHeap`](crate::ErasedMinHeap), used by the [`handle`](crate::handle)
//!   routines
//! - [`HeapError`]: every way an operation can be rejected
//! - [`CapacityError`]: a typed insert rejected because the heap is full,
//!   carrying the item back to the caller
//!
//! No operation ever panics on misuse. Failures are reported through these
//! error values and leave the heap untouched.

use core::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeapError {
    /// No heap was supplied to a handle operation
    InvalidHandle,
    /// The heap already holds `capacity` elements
    Full {
        /// Maximum number of elements the heap can hold
        capacity: usize,
    },
    /// The index does not name an occupied slot (`len == 0` means the heap is empty)
    OutOfRange {
        /// The requested index
        index: usize,
        /// Number of occupied slots at the time of the call
        len: usize,
    },
    /// No item was supplied to an insert through the handle routines
    AbsentItem,
    /// An item or output buffer does not match the heap's element size
    SizeMismatch {
        /// Element size of the heap in bytes
        expected: usize,
        /// Length of the supplied buffer in bytes
        found: usize,
    },
    /// The backing storage cannot hold `capacity` elements of `elem_size` bytes
    InvalidLayout {
        /// Requested element size in bytes
        elem_size: usize,
        /// Requested capacity in elements
        capacity: usize,
        /// Length of the supplied storage in bytes
        storage_len: usize,
    },
}

impl HeapError {
    /// Returns true for an out-of-range removal on an empty heap
    pub fn is_empty_heap(&self) -> bool {
        matches!(self, HeapError::OutOfRange { len: 0, .. })
    }
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidHandle => write!(f, "no heap was supplied"),
            HeapError::Full { capacity } => {
                write!(f, "heap is full (capacity {capacity})")
            }
            HeapError::OutOfRange { index, len: 0 } => {
                write!(f, "cannot remove index {index}: heap is empty")
            }
            HeapError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for heap of length {len}")
            }
            HeapError::AbsentItem => write!(f, "no item was supplied"),
            HeapError::SizeMismatch { expected, found } => {
                write!(f, "buffer of {found} bytes does not match element size {expected}")
            }
            HeapError::InvalidLayout {
                elem_size,
                capacity,
                storage_len,
            } => write!(
                f,
                "storage of {storage_len} bytes cannot hold {capacity} elements of {elem_size} bytes"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HeapError {}

/// A typed insert rejected because the heap was full
///
/// The rejected item is handed back so the caller can retry after making
/// room, or drop it deliberately.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    item: T,
    capacity: usize,
}

impl<T> CapacityError<T> {
    pub(crate) const fn new(item: T, capacity: usize) -> Self {
        Self { item, capacity }
    }

    /// Returns the rejected item
    pub fn into_inner(self) -> T {
        self.item
    }

    /// Borrows the rejected item
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Capacity of the heap that rejected the item
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heap is full (capacity {})", self.capacity)
    }
}

#[cfg(feature = "std")]
impl<T> std::error::Error for CapacityError<T> {}

impl<T> From<CapacityError<T>> for HeapError {
    fn from(err: CapacityError<T>) -> Self {
        HeapError::Full {
            capacity: err.capacity,
        }
    }
}

/// Operation set shared by every fixed-capacity heap in this crate
///
/// Items go in by reference and come out through an optional output slot,
/// which lets the same contract cover typed heaps (`Item = T`) and byte-layout
/// heaps (`Item = [u8]`). The [`handle`](crate::handle) routines are written
/// against this trait.
///
/// # Example
///
/// ```rust
/// use static_min_heap::{BoundedHeap, StaticMinHeap};
///
/// fn drain_min<H: BoundedHeap<Item = u32>>(heap: &mut H) -> Option<u32> {
///     let mut out = 0;
///     heap.remove_into(0, Some(&mut out)).ok()?;
///     Some(out)
/// }
///
/// let mut heap: StaticMinHeap<u32, 4> = StaticMinHeap::new();
/// heap.insert_from(&9).unwrap();
/// heap.insert_from(&2).unwrap();
/// assert_eq!(drain_min(&mut heap), Some(2));
/// ```
pub trait BoundedHeap {
    /// The element type as seen by callers
    type Item: ?Sized;

    /// Maximum number of elements, fixed at construction
    fn capacity(&self) -> usize;

    /// Number of elements currently stored
    fn len(&self) -> usize;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the heap holds `capacity` elements
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Returns the minimum element without removing it
    fn peek(&self) -> Option<&Self::Item>;

    /// Removes every element
    fn clear(&mut self);

    /// Copies `item` into the heap
    ///
    /// # Errors
    /// `HeapError::Full` when the heap is at capacity. Byte-layout heaps also
    /// return `HeapError::SizeMismatch` for an item of the wrong length.
    fn insert_from(&mut self, item: &Self::Item) -> Result<(), HeapError>;

    /// Removes the element at `index` (heap order), writing it to `out` if given
    ///
    /// # Errors
    /// `HeapError::OutOfRange` when `index >= len()`. Byte-layout heaps also
    /// return `HeapError::SizeMismatch` for an output buffer of the wrong length.
    fn remove_into(&mut self, index: usize, out: Option<&mut Self::Item>) -> Result<(), HeapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_heap_detection() {
        assert!(HeapError::OutOfRange { index: 0, len: 0 }.is_empty_heap());
        assert!(!HeapError::OutOfRange { index: 3, len: 3 }.is_empty_heap());
        assert!(!HeapError::InvalidHandle.is_empty_heap());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            HeapError::Full { capacity: 4 }.to_string(),
            "heap is full (capacity 4)"
        );
        assert_eq!(
            HeapError::OutOfRange { index: 2, len: 0 }.to_string(),
            "cannot remove index 2: heap is empty"
        );
        assert_eq!(
            HeapError::OutOfRange { index: 5, len: 3 }.to_string(),
            "index 5 out of range for heap of length 3"
        );
    }

    #[test]
    fn test_capacity_error_returns_item() {
        let err = CapacityError::new(String::from("job"), 8);
        assert_eq!(err.capacity(), 8);
        assert_eq!(err.item(), "job");
        assert_eq!(HeapError::from(err.clone()), HeapError::Full { capacity: 8 });
        assert_eq!(err.into_inner(), "job");
    }
}
