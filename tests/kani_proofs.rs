//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It checks the properties below for
//! every possible input up to the given bounds. Capacities are kept small so
//! the sift loops unwind completely.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use static_min_heap::{handle, HeapError, StaticMinHeap};

#[cfg(kani)]
fn heap_property_holds<const N: usize>(heap: &StaticMinHeap<u8, N>) -> bool {
    let data = heap.as_slice();
    (1..data.len()).all(|i| data[(i - 1) / 2] <= data[i])
}

/// Proof: insert increments the length by exactly one below capacity
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_len() {
    let mut heap: StaticMinHeap<u8, 4> = StaticMinHeap::new();
    let count: usize = kani::any();
    kani::assume(count < 4);
    for _ in 0..count {
        heap.insert(kani::any()).unwrap();
    }

    let before = heap.len();
    assert!(heap.insert(kani::any()).is_ok());
    assert!(heap.len() == before + 1);
    assert!(heap_property_holds(&heap));
}

/// Proof: insert into a full heap fails and changes nothing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_full_is_rejected() {
    let mut heap: StaticMinHeap<u8, 3> = StaticMinHeap::new();
    for _ in 0..3 {
        heap.insert(kani::any()).unwrap();
    }
    let min = *heap.peek().unwrap();

    let item: u8 = kani::any();
    let err = heap.insert(item).unwrap_err();
    assert!(err.into_inner() == item);
    assert!(heap.len() == 3);
    assert!(*heap.peek().unwrap() == min);
}

/// Proof: removal at any valid index keeps the heap property
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(7)]
fn verify_remove_any_index_preserves_heap() {
    let mut heap: StaticMinHeap<u8, 5> = StaticMinHeap::new();
    for _ in 0..5 {
        heap.insert(kani::any()).unwrap();
    }

    let index: usize = kani::any();
    kani::assume(index < 5);
    let expected = heap.as_slice()[index];

    assert!(heap.remove(index) == Ok(expected));
    assert!(heap.len() == 4);
    assert!(heap_property_holds(&heap));
}

/// Proof: removal out of range fails and changes nothing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_remove_out_of_range() {
    let mut heap: StaticMinHeap<u8, 4> = StaticMinHeap::new();
    let count: usize = kani::any();
    kani::assume(count <= 4);
    for _ in 0..count {
        heap.insert(kani::any()).unwrap();
    }

    let index: usize = kani::any();
    kani::assume(index >= count);
    assert!(heap.remove(index) == Err(HeapError::OutOfRange { index, len: count }));
    assert!(heap.len() == count);
}

/// Proof: pop returns what peek reported, and it is the minimum
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_pop_returns_min() {
    let mut heap: StaticMinHeap<u8, 3> = StaticMinHeap::new();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    heap.insert(a).unwrap();
    heap.insert(b).unwrap();
    heap.insert(c).unwrap();

    let peeked = *heap.peek().unwrap();
    let popped = heap.pop().unwrap();
    assert!(peeked == popped);
    assert!(popped <= a && popped <= b && popped <= c);
}

/// Proof: handle routines on an absent heap use the documented fallbacks
#[cfg(kani)]
#[kani::proof]
fn verify_absent_handle_fallbacks() {
    type Heap = StaticMinHeap<u8, 2>;
    let item: u8 = kani::any();
    let index: usize = kani::any();

    assert!(handle::size::<Heap>(None) == 0);
    assert!(handle::is_empty::<Heap>(None));
    assert!(handle::is_full::<Heap>(None));
    assert!(handle::peek::<Heap>(None).is_none());
    assert!(handle::insert::<Heap>(None, Some(&item)) == Err(HeapError::InvalidHandle));
    assert!(handle::remove::<Heap>(None, index, None) == Err(HeapError::InvalidHandle));
}
