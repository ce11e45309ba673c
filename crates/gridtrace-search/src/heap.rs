//! Comparator-driven binary min-heap with sift-cost reporting.

use gridtrace_core::NodeId;

/// A node reference paired with its priority, the entry type used by the
/// cost-ordered engines. Entries are owned by the heap for the duration of
/// one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeapNode {
    pub id: NodeId,
    pub priority: i32,
}

/// Binary heap over a dense array, ordering driven by an injected
/// comparator.
///
/// `sink(a, b) == true` means "a should sink below b", so
/// `|a, b| a.priority > b.priority` realizes a min-heap. [`push`] and
/// [`pop`] report the number of heap levels they walked; engines fold
/// those into their synthetic step counters.
///
/// There is no decrease-key: re-pushing a node with a better priority is
/// cheaper than maintaining heap-position indices, and engines discard
/// stale entries on pop via their visited set (lazy deletion).
///
/// [`push`]: Self::push
/// [`pop`]: Self::pop
pub struct MinHeap<T, F: Fn(&T, &T) -> bool> {
    items: Vec<T>,
    sink: F,
}

impl<T, F: Fn(&T, &T) -> bool> MinHeap<T, F> {
    /// Create an empty heap with the given sink comparator.
    pub fn new(sink: F) -> Self {
        Self {
            items: Vec::new(),
            sink,
        }
    }

    /// Append an item and sift it up. Returns the number of levels walked.
    pub fn push(&mut self, item: T) -> u64 {
        self.items.push(item);
        let mut i = self.items.len() - 1;
        let mut cost = 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if (self.sink)(&self.items[parent], &self.items[i]) {
                self.items.swap(parent, i);
                i = parent;
                cost += 1;
            } else {
                break;
            }
        }
        cost
    }

    /// Remove and return the minimum item, with the number of levels
    /// walked restoring heap order. Returns `None` on an empty heap.
    pub fn pop(&mut self) -> Option<(T, u64)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let item = self.items.pop()?;
        let mut cost = 1;

        let len = self.items.len();
        let mut i = 0;
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            // Prefer the right child only when it is strictly smaller.
            let child = if right < len && (self.sink)(&self.items[left], &self.items[right]) {
                right
            } else {
                left
            };
            if (self.sink)(&self.items[i], &self.items[child]) {
                self.items.swap(i, child);
                i = child;
                cost += 1;
            } else {
                break;
            }
        }
        Some((item, cost))
    }

    /// The minimum item, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Whether the heap holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items held.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, RngExt, SeedableRng, rngs::StdRng};

    fn min_heap() -> MinHeap<HeapNode, impl Fn(&HeapNode, &HeapNode) -> bool> {
        MinHeap::new(|a: &HeapNode, b: &HeapNode| a.priority > b.priority)
    }

    #[test]
    fn pop_empty_is_none() {
        let mut heap = min_heap();
        assert!(heap.pop().is_none());
        assert!(heap.peek().is_none());
        assert!(heap.is_empty());
    }

    #[test]
    fn pops_in_priority_order() {
        let mut heap = min_heap();
        for (id, priority) in [(0, 9), (1, 2), (2, 7), (3, 1), (4, 5)] {
            heap.push(HeapNode { id, priority });
        }
        let mut popped = Vec::new();
        while let Some((node, _)) = heap.pop() {
            popped.push(node.priority);
        }
        assert_eq!(popped, vec![1, 2, 5, 7, 9]);
    }

    #[test]
    fn peek_is_minimum() {
        let mut heap = min_heap();
        heap.push(HeapNode { id: 0, priority: 4 });
        heap.push(HeapNode { id: 1, priority: 2 });
        heap.push(HeapNode { id: 2, priority: 6 });
        assert_eq!(heap.peek().map(|n| n.priority), Some(2));
        assert_eq!(heap.len(), 3);
    }

    #[test]
    fn duplicate_entries_are_tolerated() {
        // Lazy deletion: the same node may sit in the heap at several
        // priorities; pops surface the best one first.
        let mut heap = min_heap();
        heap.push(HeapNode { id: 7, priority: 10 });
        heap.push(HeapNode { id: 7, priority: 3 });
        let (first, _) = heap.pop().unwrap();
        assert_eq!(first.priority, 3);
        let (stale, _) = heap.pop().unwrap();
        assert_eq!(stale.priority, 10);
    }

    #[test]
    fn sift_costs_are_logarithmic() {
        let mut heap = min_heap();
        // Descending pushes force a full sift-up each time.
        for p in (0..128).rev() {
            let cost = heap.push(HeapNode { id: 0, priority: p });
            assert!(cost as usize <= 9, "cost {cost} too large for 128 items");
        }
        let (_, cost) = heap.pop().unwrap();
        assert!((1..=9).contains(&(cost as usize)));
    }

    #[test]
    fn fuzz_pops_sorted() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let mut heap = min_heap();
            let n = rng.random_range(1..200usize);
            for id in 0..n {
                heap.push(HeapNode {
                    id,
                    priority: rng.random_range(-1000..1000),
                });
            }
            let mut out = Vec::with_capacity(n);
            while let Some((node, _)) = heap.pop() {
                out.push(node.priority);
            }
            assert_eq!(out.len(), n);
            assert!(out.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
