//! A first-in, first-out queue backed by a [`List`].

use crate::error::{check_capacity, is_full, CapacityError};
use crate::{Iter, List};

/// A FIFO queue with an optional capacity limit.
///
/// Values are enqueued at the back of the underlying list and dequeued from
/// its front. A limit of 0 (the default) means the queue is unbounded.
///
/// # Examples
///
/// ```
/// use cyclic_collections::Queue;
///
/// let mut queue = Queue::new().with_limit(2);
/// assert!(queue.enqueue(1).is_ok());
/// assert!(queue.enqueue(2).is_ok());
///
/// let rejected = queue.enqueue(3).unwrap_err();
/// assert_eq!(rejected.into_inner(), 3);
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.peek(), Some(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: List<T>,
    limit: usize,
}

impl<T> Queue<T> {
    /// Create an empty, unbounded queue.
    pub fn new() -> Self {
        Self {
            list: List::new(),
            limit: 0,
        }
    }

    /// Set the maximum number of elements, 0 meaning no limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Change the maximum number of elements, 0 meaning no limit.
    ///
    /// Lowering the limit below the current length keeps every element; the
    /// queue just reports itself full until it shrinks.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// The maximum number of elements, 0 meaning no limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Add `value` at the back of the queue.
    ///
    /// If the queue is at its limit, `value` is handed back in the error.
    pub fn enqueue(&mut self, value: T) -> Result<(), CapacityError<T>> {
        let value = check_capacity(value, self.list.len(), self.limit)?;
        self.list.push_back(value);
        Ok(())
    }

    /// Remove and return the element at the front of the queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// The element that [`dequeue`](Queue::dequeue) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    /// Remove the first element equal to `value`. Returns `false` if there is
    /// none.
    #[must_use]
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.remove_value(value)
    }

    /// `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(value)
    }

    /// Number of elements in the queue.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// `true` if the queue holds no element.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// `true` if the queue has a limit and holds at least that many elements.
    pub fn is_full(&self) -> bool {
        is_full(self.list.len(), self.limit)
    }

    /// Remove every element, keeping the limit.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterate from the front (next to dequeue) to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects into an unbounded queue; the first value is dequeued first.
impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: List::from_iter(iter),
            limit: 0,
        }
    }
}

/// Appends every value at the back. The limit is not checked, so the queue
/// may end up over it and report [`is_full`](Queue::is_full).
impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.push_back_all(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn queue_init() {
        let queue = Queue::<i32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.limit(), 0);
        assert!(!queue.is_full());
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn queue_enqueue_and_dequeue() {
        let mut queue = Queue::new();
        for i in 1..=5 {
            assert!(queue.enqueue(i).is_ok());
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(Vec::from_iter(queue.iter().copied()), vec![1, 2, 3, 4, 5]);
        for i in 1..=5 {
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_enqueue_with_limit() {
        let mut queue = Queue::new().with_limit(3);
        assert_eq!(queue.limit(), 3);
        for i in 0..3 {
            assert!(queue.enqueue(i).is_ok());
        }
        assert!(queue.is_full());

        let error = queue.enqueue(3).unwrap_err();
        assert_eq!(error.limit(), 3);
        assert_eq!(error.into_inner(), 3);
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.dequeue(), Some(0));
        assert!(!queue.is_full());
        assert!(queue.enqueue(3).is_ok());
        assert_eq!(Vec::from_iter(queue.iter().copied()), vec![1, 2, 3]);
    }

    #[test]
    fn queue_lowered_limit() {
        let mut queue = Queue::from_iter(0..5);
        queue.set_limit(2);
        assert!(queue.is_full());
        assert_eq!(queue.len(), 5);
        assert!(queue.enqueue(5).is_err());

        queue.set_limit(0);
        assert!(!queue.is_full());
        assert!(queue.enqueue(5).is_ok());
    }

    #[test]
    fn queue_extend() {
        let mut queue = Queue::new().with_limit(2);
        queue.extend([1, 2, 3]);
        assert_eq!(queue.len(), 3);
        assert!(queue.is_full());
        assert_eq!(Vec::from_iter(queue.iter().copied()), vec![1, 2, 3]);
    }

    #[test]
    fn queue_remove_contains_clear() {
        let mut queue = Queue::from_iter([1, 2, 3, 2]);
        assert!(queue.contains(&2));
        assert!(queue.remove(&2));
        assert_eq!(Vec::from_iter(queue.iter().copied()), vec![1, 3, 2]);
        assert!(!queue.remove(&7));

        let cloned = queue.clone();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(cloned.len(), 3);
        assert!(!queue.contains(&1));
    }

    proptest! {
        #[test]
        fn queue_is_fifo(values in prop::collection::vec(any::<i16>(), 0..64)) {
            let mut queue = Queue::new();
            for &v in &values {
                prop_assert!(queue.enqueue(v).is_ok());
            }
            let dequeued: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
            prop_assert_eq!(dequeued, values);
        }
    }
}
