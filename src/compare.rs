//! Three-way comparators
//!
//! Every heap in this crate is ordered by a [`Compare`] implementation rather
//! than by `Ord` directly, so the same element type can be queued under
//! different orderings (deadline first, priority first, ...).
//!
//! A comparator must be total and deterministic: the same pair of inputs
//! must always produce the same [`Ordering`]. The heap property is only as
//! good as that consistency.
//!
//! Three kinds of comparator are provided:
//!
//! - [`NaturalOrder`]: delegates to `Ord`, the default for [`StaticMinHeap`](crate::StaticMinHeap)
//! - any closure or function `Fn(&T, &T) -> Ordering`
//! - [`TriState`]: adapts a C-style function returning a negative, zero or
//!   positive `i8`
//!
//! # Example
//!
//! ```rust
//! use core::cmp::Ordering;
//! use static_min_heap::compare::{Compare, NaturalOrder, TriState};
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//!
//! fn signed(a: &u16, b: &u16) -> i8 {
//!     if a < b { -1 } else if a == b { 0 } else { 1 }
//! }
//! assert_eq!(TriState(signed).compare(&7, &7), Ordering::Equal);
//! ```

use core::cmp::Ordering;

/// A total, deterministic three-way ordering over `T`
pub trait Compare<T: ?Sized> {
    /// Compares `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Orders elements by their `Ord` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Adapts a signed tri-state comparator into a [`Compare`]
///
/// The wrapped function returns a negative value when the first argument is
/// less than the second, zero when they are equal and a positive value
/// otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriState<F>(pub F);

impl<T: ?Sized, F> Compare<T> for TriState<F>
where
    F: Fn(&T, &T) -> i8,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }
}
