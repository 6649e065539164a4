use std::fmt::Debug;

use crate::{Error, Result};

/// A `(distance, vertex)` pair stored in the heap, ordered by `distance` only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry<P> {
    pub distance: P,
    pub vertex: usize,
}

/// Binary min-heap specialised for shortest path frontiers
///
/// There is no decrease-key. Callers push a fresh entry whenever a distance
/// improves and discard outdated entries when they are popped.
#[derive(Debug, Clone)]
pub struct MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered storage: children of `i` live at `2i + 1` and `2i + 2`
    entries: Vec<HeapEntry<P>>,
}

impl<P> MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap { entries: Vec::new() }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts `vertex` with key `distance`
    pub fn push(&mut self, distance: P, vertex: usize) {
        self.entries.push(HeapEntry { distance, vertex });
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest distance
    pub fn pop(&mut self) -> Result<HeapEntry<P>> {
        let last = self.entries.pop().ok_or(Error::EmptyQueue)?;
        if self.entries.is_empty() {
            return Ok(last);
        }

        let min = std::mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        Ok(min)
    }

    /// Returns the entry with the smallest distance without removing it
    pub fn top(&self) -> Result<HeapEntry<P>> {
        self.entries.first().copied().ok_or(Error::EmptyQueue)
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].distance > self.entries[index].distance {
                self.entries.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.entries[left].distance < self.entries[smallest].distance {
                smallest = left;
            }
            if right < len && self.entries[right].distance < self.entries[smallest].distance {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<P> Default for MinHeap<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
