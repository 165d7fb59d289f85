//! Stress tests that push the heaps to their capacity limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use static_min_heap::{ErasedMinHeap, RawCompare, StaticMinHeap};

const CAP: usize = 1024;

/// Deterministic pseudo-random sequence (xorshift)
fn xorshift(seed: &mut u32) -> u32 {
    let mut x = *seed;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *seed = x;
    x
}

#[test]
fn test_fill_and_drain_ascending() {
    let mut heap: Box<StaticMinHeap<u32, CAP>> = Box::default();
    for i in 0..CAP as u32 {
        heap.insert(i).unwrap();
    }
    assert!(heap.is_full());
    assert!(heap.insert(0).is_err());

    for i in 0..CAP as u32 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_fill_and_drain_descending() {
    let mut heap: Box<StaticMinHeap<u32, CAP>> = Box::default();
    for i in (0..CAP as u32).rev() {
        heap.insert(i).unwrap();
    }
    for i in 0..CAP as u32 {
        assert_eq!(heap.pop(), Some(i));
    }
}

#[test]
fn test_random_interleaving() {
    let mut heap: Box<StaticMinHeap<u32, CAP>> = Box::default();
    let mut model: Vec<u32> = Vec::new();
    let mut seed = 0x9E37_79B9;

    for _ in 0..20_000 {
        let r = xorshift(&mut seed);
        if r % 3 != 0 && !heap.is_full() {
            let value = xorshift(&mut seed) % 500;
            heap.insert(value).unwrap();
            model.push(value);
        } else if !heap.is_empty() {
            let index = (xorshift(&mut seed) as usize) % heap.len();
            let removed = heap.remove(index).unwrap();
            let pos = model.iter().position(|&m| m == removed).unwrap();
            model.swap_remove(pos);
        }
        assert_eq!(heap.len(), model.len());
        assert_eq!(heap.peek().copied(), model.iter().min().copied());
    }

    model.sort_unstable();
    let drained: Vec<u32> = std::iter::from_fn(|| heap.pop()).collect();
    assert_eq!(drained, model);
}

#[test]
fn test_alternating_insert_and_pop() {
    // Each round nets one element, so 1000 rounds stay within capacity.
    let mut heap: Box<StaticMinHeap<i32, CAP>> = Box::default();
    for i in 0..1000 {
        heap.insert(i * 2).unwrap();
        heap.insert(i * 2 + 1).unwrap();
        assert_eq!(heap.pop(), Some(i));
        assert_eq!(heap.len(), i as usize + 1);
    }

    // Remaining elements are exactly 1000..2000.
    for i in 1000..2000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_alternating_with_periodic_clear() {
    let mut heap: StaticMinHeap<i32, 64> = StaticMinHeap::new();
    let mut model: Vec<i32> = Vec::new();
    for i in 0..1000 {
        if heap.len() + 2 > heap.capacity() {
            heap.clear();
            model.clear();
        }
        for x in [i * 2, i * 2 + 1] {
            heap.insert(x).unwrap();
            model.push(x);
        }
        let expected = model.iter().min().copied();
        let pos = model.iter().position(|&m| Some(m) == expected).unwrap();
        model.swap_remove(pos);
        assert_eq!(heap.pop(), expected);
        assert_eq!(heap.len(), model.len());
    }
}

#[test]
fn test_erased_random_interleaving() {
    fn by_u32(a: &[u8], b: &[u8]) -> std::cmp::Ordering {
        u32::from_ne_bytes(a.try_into().unwrap()).cmp(&u32::from_ne_bytes(b.try_into().unwrap()))
    }

    let mut storage = vec![0u8; 4 * 256];
    let mut heap = ErasedMinHeap::new(&mut storage, 4, 256, by_u32 as RawCompare).unwrap();
    let mut model: Vec<u32> = Vec::new();
    let mut seed = 0xDEAD_BEEF;
    let mut out = [0u8; 4];

    for _ in 0..10_000 {
        let r = xorshift(&mut seed);
        if r % 2 == 0 && !heap.is_full() {
            let value = xorshift(&mut seed);
            heap.insert(&value.to_ne_bytes()).unwrap();
            model.push(value);
        } else if !heap.is_empty() {
            let index = (xorshift(&mut seed) as usize) % heap.len();
            heap.remove(index, Some(&mut out)).unwrap();
            let removed = u32::from_ne_bytes(out);
            let pos = model.iter().position(|&m| m == removed).unwrap();
            model.swap_remove(pos);
        }
        let min = heap.peek().map(|r| u32::from_ne_bytes(r.try_into().unwrap()));
        assert_eq!(min, model.iter().min().copied());
    }
}
