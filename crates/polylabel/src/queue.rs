//! Binary min-heap with a pluggable ordering.
//!
//! The ordering is a closure rather than an `Ord` bound so one heap type can
//! serve different rankings of the same element (raw distance vs. fitness in
//! `search`, plain numbers in tests). The element that compares `Less` than
//! every other is dequeued first; pass a reversed comparator to get a max-heap.
//!
//! Sift rules are fixed (they decide the order of ties):
//! - `up` stops once the item is `>=` its parent.
//! - `down` takes the right child only if it is strictly smaller than the left
//!   one, and stops once that child is `>=` the item.

use std::cmp::Ordering;

/// Array-backed binary heap ordered by `compare`.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, C = fn(&T, &T) -> Ordering> {
    data: Vec<T>,
    compare: C,
}

/// `PartialOrd` ordering with incomparable pairs (NaN) treated as equal.
pub fn natural_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<T: PartialOrd> PriorityQueue<T> {
    /// Empty queue in natural order.
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<T>)
    }

    /// Heapify `data` in natural order.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_with(data, natural_order::<T>)
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(compare: C) -> Self {
        Self {
            data: Vec::new(),
            compare,
        }
    }

    /// Heapify `data` in O(n) by sifting down from the last parent to the root.
    pub fn from_vec_with(data: Vec<T>, compare: C) -> Self {
        let mut q = Self { data, compare };
        let n = q.data.len();
        for pos in (0..n >> 1).rev() {
            q.down(pos);
        }
        q
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn enqueue(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        self.up(last);
    }

    /// Remove the root; `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        // swap_remove moves the tail into the root slot.
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.down(0);
        }
        Some(top)
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Drain in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(item) = self.dequeue() {
            out.push(item);
        }
        out
    }

    fn up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) >> 1;
            if (self.compare)(&self.data[pos], &self.data[parent]) != Ordering::Less {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn down(&mut self, mut pos: usize) {
        let len = self.data.len();
        let half = len >> 1;
        while pos < half {
            let mut best = (pos << 1) + 1;
            let right = best + 1;
            if right < len && (self.compare)(&self.data[right], &self.data[best]) == Ordering::Less
            {
                best = right;
            }
            if (self.compare)(&self.data[best], &self.data[pos]) != Ordering::Less {
                break;
            }
            self.data.swap(pos, best);
            pos = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn seeded_values(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| (100.0 * rng.gen::<f64>()).floor()).collect()
    }

    fn sorted(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(natural_order);
        v
    }

    #[test]
    fn maintains_priority_order() {
        let data = seeded_values(100, 7);
        let mut q = PriorityQueue::new();
        for &x in &data {
            q.enqueue(x);
        }
        let expected = sorted(data);
        assert_eq!(q.peek(), Some(&expected[0]));
        assert_eq!(q.into_sorted_vec(), expected);
    }

    #[test]
    fn accepts_data_in_constructor() {
        let data = seeded_values(100, 11);
        let q = PriorityQueue::from_vec(data.clone());
        assert_eq!(q.len(), 100);
        assert_eq!(q.into_sorted_vec(), sorted(data));
    }

    #[test]
    fn handles_edge_cases_with_few_elements() {
        let mut q = PriorityQueue::new();
        q.enqueue(2.0);
        q.enqueue(1.0);
        q.dequeue();
        q.dequeue();
        assert_eq!(q.dequeue(), None);
        q.enqueue(2.0);
        q.enqueue(1.0);
        assert_eq!(q.dequeue(), Some(1.0));
        assert_eq!(q.dequeue(), Some(2.0));
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn empty_construction_drains_nothing() {
        let q: PriorityQueue<f64> = PriorityQueue::from_vec(Vec::new());
        assert!(q.peek().is_none());
        assert!(q.into_sorted_vec().is_empty());
    }

    #[test]
    fn reversed_comparator_is_a_max_heap() {
        let mut q = PriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        for x in [3, 9, 1, 7, 5] {
            q.enqueue(x);
        }
        assert_eq!(q.into_sorted_vec(), vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn comparator_can_key_on_a_field() {
        let mut q = PriorityQueue::with_comparator(|a: &(u8, f64), b: &(u8, f64)| {
            natural_order(&a.1, &b.1)
        });
        q.enqueue((0, 2.5));
        q.enqueue((1, -1.0));
        q.enqueue((2, 0.5));
        let ids: Vec<u8> = q.into_sorted_vec().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }
}
