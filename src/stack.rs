//! A last-in, first-out stack backed by a [`List`].

use crate::error::{check_capacity, is_full, CapacityError};
use crate::{Iter, List};

/// A LIFO stack with an optional capacity limit.
///
/// The top of the stack is the front of the underlying list. A limit of 0
/// (the default) means the stack is unbounded.
///
/// # Examples
///
/// ```
/// use cyclic_collections::Stack;
///
/// let mut stack = Stack::new();
/// assert!(stack.push(1).is_ok());
/// assert!(stack.push(2).is_ok());
///
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: List<T>,
    limit: usize,
}

impl<T> Stack<T> {
    /// Create an empty, unbounded stack.
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
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    /// The maximum number of elements, 0 meaning no limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Put `value` on top of the stack.
    ///
    /// If the stack is at its limit, `value` is handed back in the error.
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        let value = check_capacity(value, self.list.len(), self.limit)?;
        self.list.push_front(value);
        Ok(())
    }

    /// Put `value` on top of the stack regardless of the limit.
    #[cfg(feature = "trie")]
    pub(crate) fn push_unbounded(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Remove and return the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// The element that [`pop`](Stack::pop) would return next.
    pub fn top(&self) -> Option<&T> {
        self.list.front()
    }

    /// Remove the element equal to `value` closest to the top. Returns
    /// `false` if there is none.
    #[must_use]
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.list.index_of(value) {
            Some(index) => self.list.pop_at(index).is_some(),
            None => false,
        }
    }

    /// `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(value)
    }

    /// Number of elements on the stack.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// `true` if the stack holds no element.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// `true` if the stack has a limit and holds at least that many elements.
    pub fn is_full(&self) -> bool {
        is_full(self.list.len(), self.limit)
    }

    /// Remove every element, keeping the limit.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Iterate from the top to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects into an unbounded stack whose top is the *first* value, so the
/// stack iterates in the same order as the input.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: List::from_iter(iter),
            limit: 0,
        }
    }
}
