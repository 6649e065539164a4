use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use undirected_sssp::data_structures::MinHeap;
use undirected_sssp::Error;

#[test]
fn test_empty_queue_access_is_an_error() {
    let mut heap: MinHeap<u32> = MinHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.top(), Err(Error::EmptyQueue));
    assert_eq!(heap.pop(), Err(Error::EmptyQueue));
}

#[test]
fn test_top_does_not_remove() {
    let mut heap = MinHeap::new();
    heap.push(7u64, 1);
    heap.push(3u64, 2);
    assert_eq!(heap.top().unwrap().vertex, 2);
    assert_eq!(heap.top().unwrap().vertex, 2);
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_interleaved_pushes_pop_in_non_decreasing_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap = MinHeap::new();
    let mut popped = Vec::new();
    let mut last = 0u32;

    for round in 0..2_000 {
        if rng.gen_bool(0.6) || heap.is_empty() {
            // Keys never drop below the last popped key, as in a Dijkstra frontier
            heap.push(last + rng.gen_range(0..100), round);
        } else {
            let entry = heap.pop().unwrap();
            assert!(entry.distance >= last);
            last = entry.distance;
            popped.push(entry.distance);
        }
    }
    while !heap.is_empty() {
        popped.push(heap.pop().unwrap().distance);
    }

    assert!(popped.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_arbitrary_keys_drain_sorted() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap = MinHeap::new();
    let mut keys: Vec<u64> = (0..500).map(|_| rng.gen_range(0..1_000)).collect();
    for (vertex, &key) in keys.iter().enumerate() {
        heap.push(key, vertex);
    }

    let mut drained = Vec::new();
    while let Ok(entry) = heap.pop() {
        drained.push(entry.distance);
    }

    keys.sort_unstable();
    assert_eq!(drained, keys);
}

#[test]
fn test_duplicate_keys_are_all_kept() {
    let mut heap = MinHeap::new();
    for vertex in 0..4 {
        heap.push(5u32, vertex);
    }
    let mut vertices: Vec<usize> = std::iter::from_fn(|| heap.pop().ok()).map(|e| e.vertex).collect();
    vertices.sort_unstable();
    assert_eq!(vertices, vec![0, 1, 2, 3]);
}

#[test]
fn test_clear_empties_queue() {
    let mut heap = MinHeap::with_capacity(4);
    heap.push(1u8, 0);
    heap.push(2u8, 1);
    heap.clear();
    assert!(heap.is_empty());
}
