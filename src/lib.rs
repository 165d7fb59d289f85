//! Fixed-Capacity Min-Heaps for Rust
//!
//! This crate provides binary min-heaps (priority queues) that live entirely in
//! pre-allocated, statically sized storage. Nothing allocates after
//! construction, which makes them suitable for embedded firmware, interrupt
//! handlers and real-time loops. The crate is `no_std` when the default `std`
//! feature is disabled.
//!
//! # Features
//!
//! - **[`StaticMinHeap`]**: generic over the element type, capacity as a const
//!   generic, ordered by any [`Compare`] implementation
//! - **[`ErasedMinHeap`]**: fixed-size byte records in borrowed storage, for
//!   element types known only by their size
//! - **[`handle`]**: routines taking an optional heap, with defined fallbacks
//!   when no heap is supplied
//!
//! All heaps support O(1) `peek`, O(log n) `insert`, and O(log n) removal at
//! any index. Equal elements are not kept in insertion order.
//!
//! # Cargo features
//!
//! - `std` (default): implements `std::error::Error` for the error types
//! - `log`: reports rejected operations through the `log` facade
//! - `defmt`: reports rejected operations through `defmt` and derives
//!   `defmt::Format` for [`HeapError`]
//!
//! # Example
//!
//! ```rust
//! use static_min_heap::StaticMinHeap;
//!
//! let mut heap: StaticMinHeap<u32, 5> = StaticMinHeap::new();
//! for x in [5, 3, 8, 1] {
//!     heap.insert(x).unwrap();
//! }
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.remove(0), Ok(1));
//! assert_eq!(heap.peek(), Some(&3));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

#[macro_use]
mod fmt;

pub mod compare;
pub mod erased;
pub mod handle;
pub mod static_heap;
pub mod traits;

// Re-export the main types for convenience
pub use compare::{Compare, NaturalOrder, TriState};
pub use erased::{ErasedMinHeap, RawCompare};
pub use static_heap::StaticMinHeap;
pub use traits::{BoundedHeap, CapacityError, HeapError};
