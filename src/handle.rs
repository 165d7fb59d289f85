//! Handle-passing heap routines
//!
//! Each routine takes the heap as an `Option`, so a routine set shared across
//! a library boundary can be handed "no heap" without faulting. Queries fall
//! back to a fixed answer and mutators fail without side effects:
//!
//! | Routine    | Absent heap                  |
//! |------------|------------------------------|
//! | [`size`]     | `0`                          |
//! | [`is_empty`] | `true`                       |
//! | [`is_full`]  | `true` (so nothing is written through it) |
//! | [`peek`]     | `None`                       |
//! | [`clear`]    | no-op                        |
//! | [`insert`]   | `Err(HeapError::InvalidHandle)` |
//! | [`remove`]   | `Err(HeapError::InvalidHandle)` |
//!
//! The routines work with any [`BoundedHeap`], typed or byte-layout.
//!
//! # Example
//!
//! ```rust
//! use static_min_heap::{handle, HeapError, StaticMinHeap};
//!
//! let mut heap: StaticMinHeap<i32, 4> = StaticMinHeap::new();
//! handle::insert(Some(&mut heap), Some(&7)).unwrap();
//! assert_eq!(handle::size(Some(&heap)), 1);
//!
//! let missing: Option<&mut StaticMinHeap<i32, 4>> = None;
//! assert_eq!(handle::insert(missing, Some(&1)), Err(HeapError::InvalidHandle));
//! assert!(handle::is_full::<StaticMinHeap<i32, 4>>(None));
//! ```

use crate::traits::{BoundedHeap, HeapError};

/// Number of elements, or 0 without a heap
pub fn size<H: BoundedHeap + ?Sized>(heap: Option<&H>) -> usize {
    heap.map_or(0, |h| h.len())
}

/// Whether the heap is empty; an absent heap is empty
pub fn is_empty<H: BoundedHeap + ?Sized>(heap: Option<&H>) -> bool {
    heap.map_or(true, |h| h.is_empty())
}

/// Whether the heap is full; an absent heap is full
pub fn is_full<H: BoundedHeap + ?Sized>(heap: Option<&H>) -> bool {
    heap.map_or(true, |h| h.is_full())
}

/// The minimum element, if there is a heap and it is not empty
pub fn peek<H: BoundedHeap + ?Sized>(heap: Option<&H>) -> Option<&H::Item> {
    heap.and_then(|h| h.peek())
}

/// Empties the heap if there is one
pub fn clear<H: BoundedHeap + ?Sized>(heap: Option<&mut H>) {
    if let Some(h) = heap {
        h.clear();
    }
}

/// Copies `item` into the heap
///
/// # Errors
/// Checked in order: `InvalidHandle` without a heap, `AbsentItem` without an
/// item, then whatever the heap itself rejects (`Full`, `SizeMismatch`).
pub fn insert<H: BoundedHeap + ?Sized>(
    heap: Option<&mut H>,
    item: Option<&H::Item>,
) -> Result<(), HeapError> {
    let heap = heap.ok_or(HeapError::InvalidHandle)?;
    let item = item.ok_or(HeapError::AbsentItem)?;
    heap.insert_from(item)
}

/// Removes the element at `index`, writing it to `out` when given
///
/// # Errors
/// `InvalidHandle` without a heap, otherwise whatever the heap rejects
/// (`OutOfRange`, `SizeMismatch`).
pub fn remove<H: BoundedHeap + ?Sized>(
    heap: Option<&mut H>,
    index: usize,
    out: Option<&mut H::Item>,
) -> Result<(), HeapError> {
    let heap = heap.ok_or(HeapError::InvalidHandle)?;
    heap.remove_into(index, out)
}
