use std::fmt::{Debug, Formatter};
use std::iter::Rev;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use log::trace;

use crate::list::iterator::Indexed;
use crate::{IntoIter, Iter, IterMut};

pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic list.
/// It allows inserting and removing elements at both ends in constant time, and
/// addressing any element by its index in *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `head` that points to the first node, or nothing if the list is empty;
/// - a length field `len` indicating the length of the list.
///
/// There is no sentinel node. The nodes form a ring: `head.prev` is the last node,
/// and `last.next` is `head`. A list with a single element holds one node whose
/// `prev` and `next` both point to itself.
///
/// # Index Validation
///
/// Operations taking an index accept it only if `index < len` (so never on an
/// empty list). An invalid index is not a programming error: the operation does
/// nothing and reports it through a `false` or `None` result.
///
/// # Naming Conventions
///
/// - `prev..next`: two adjacent nodes of the ring (`prev.next == next`);
/// - a *detached* node is a node that is not in any list. Its `prev` and `next`
///   point to itself.
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Link `prev` and `next` as adjacent nodes.
///
/// It is unsafe because both pointers must be valid nodes.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    pub(crate) fn back_node(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: `head` is a valid node whenever it exists, and `head.prev` is
        // the last node of the ring.
        self.head.map(|head| unsafe { head.as_ref().prev })
    }

    /// Locate the node at `index`, or return `None` if `index >= len`.
    ///
    /// The walk starts from whichever end of the ring is closer, so it takes at
    /// most `len / 2` steps.
    pub(crate) fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }
        let mut node = self.head?;
        // SAFETY: every `next` and `prev` of a node in the ring is a node in the ring.
        unsafe {
            if index <= self.len / 2 {
                for _ in 0..index {
                    node = node.as_ref().next;
                }
            } else {
                for _ in index..self.len {
                    node = node.as_ref().prev;
                }
            }
        }
        Some(node)
    }

    /// Make a detached node the only node of an empty list.
    fn attach_first(&mut self, node: NonNull<Node<T>>) {
        debug_assert!(self.head.is_none(), "Cannot attach a first node twice");
        self.head = Some(node);
        self.len = 1;
    }

    /// Attach a single detached node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// `head` is left untouched, so attaching between the last node and `head`
    /// appends to the list.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Splice a single node `node` out of the ring without freeing it.
    ///
    /// The neighbours of `node` are linked together, `head` advances to the
    /// successor if `node` was the head, and `node` is reset to a detached
    /// self-loop so it holds no pointer into the list anymore.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    pub(crate) unsafe fn unsplice_node(&mut self, mut node: NonNull<Node<T>>) {
        debug_assert!(self.len > 0, "Cannot unsplice a node from an empty list");
        self.len -= 1;
        if self.len == 0 {
            self.head = None;
        } else {
            let (prev, next) = (node.as_ref().prev, node.as_ref().next);
            connect(prev, next);
            if self.head == Some(node) {
                self.head = Some(next);
            }
        }
        node.as_mut().unlink();
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    ///
    /// If the `node` does not belong to the list, this function call will make
    /// the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.unsplice_node(node);
        Box::from_raw(node.as_ptr())
    }

    /// Insert `values` after `after`, in order. Each new node is attached right
    /// after the previously inserted one.
    unsafe fn insert_run_after<I>(&mut self, mut after: NonNull<Node<T>>, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            let node = Node::new_detached(value);
            self.attach_node(after, after.as_ref().next, node);
            after = node;
        }
    }

    /// Insert `values` before `before`, in order. If `before` was the head, the
    /// first inserted node becomes the new head.
    unsafe fn insert_run_before<I>(&mut self, before: NonNull<Node<T>>, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let was_head = self.head == Some(before);
        let mut first = None;
        for value in values {
            let node = Node::new_detached(value);
            self.attach_node(before.as_ref().prev, before, node);
            first.get_or_insert(node);
        }
        if let (true, Some(first)) = (was_head, first) {
            self.head = Some(first);
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cyclic_collections::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// Every node is visited exactly once: its links are reset before it is
    /// dropped, so no released node keeps pointing into the ring.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        let Some(mut node) = self.head.take() else {
            return;
        };
        let len = mem::take(&mut self.len);
        for _ in 0..len {
            // SAFETY: the ring holds exactly `len` nodes starting from the old
            // head. Each one is read before it is freed, and never again after.
            let mut boxed = unsafe { Box::from_raw(node.as_ptr()) };
            node = boxed.next;
            boxed.unlink();
            drop(boxed);
        }
        trace!("cleared {} nodes", len);
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the node is owned by the list, which is borrowed immutably.
        self.front_node()
            .map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    /// list.push_front(1);
    ///
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the node is owned by the list, which is borrowed mutably.
        self.front_node()
            .map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: the node is owned by the list, which is borrowed immutably.
        self.back_node()
            .map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the node is owned by the list, which is borrowed mutably.
        self.back_node()
            .map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Provides a reference to the element at `index`, or `None` if
    /// `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.peek_at(1), Some(&2));
    /// assert_eq!(list.peek_at(3), None);
    /// ```
    pub fn peek_at(&self, index: usize) -> Option<&T> {
        // SAFETY: the node is owned by the list, which is borrowed immutably.
        self.node_at(index)
            .map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the element at `index`, or `None` if
    /// `index >= len`.
    pub fn peek_at_mut(&mut self, index: usize) -> Option<&mut T> {
        // SAFETY: the node is owned by the list, which is borrowed mutably.
        self.node_at(index)
            .map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn push_front(&mut self, elt: T) {
        // Appending and then rotating the ring by one makes the new last node
        // the head.
        self.push_back(elt);
        self.head = self.back_node();
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        match self.head {
            None => self.attach_first(node),
            // SAFETY: `head.prev` and `head` are adjacent nodes of the list.
            Some(head) => unsafe { self.attach_node(head.as_ref().prev, head, node) },
        }
    }

    /// Adds all `values` at the front of the list, keeping their order: the
    /// first value ends up as the new front element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time per value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::from([4, 5]);
    /// list.push_front_all([1, 2, 3]);
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn push_front_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        match self.head {
            None => self.push_back_all(values),
            // SAFETY: `head` is a node of the list.
            Some(head) => unsafe { self.insert_run_before(head, values) },
        }
    }

    /// Appends all `values` to the back of the list, in order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time per value.
    pub fn push_back_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().for_each(|value| self.push_back(value));
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.front_node()?;
        // SAFETY: `node` is the head of the list.
        Some(unsafe { self.detach_node(node) }.into_element())
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.back_node()?;
        // SAFETY: `node` is the last node of the list.
        Some(unsafe { self.detach_node(node) }.into_element())
    }

    /// Removes the element at `index` and returns it, or `None` if
    /// `index >= len`.
    ///
    /// Removing the front element makes its successor the new front.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// assert_eq!(list.pop_at(1), Some(2));
    /// assert_eq!(list.pop_at(2), None);
    /// assert_eq!(list.pop_at(0), Some(1));
    /// assert_eq!(list, List::from([3]));
    /// ```
    pub fn pop_at(&mut self, index: usize) -> Option<T> {
        let node = self.node_at(index)?;
        // SAFETY: `node` is a node of the list.
        Some(unsafe { self.detach_node(node) }.into_element())
    }

    /// Inserts `values` right after the element at `index`, keeping their order.
    ///
    /// Returns `false` and leaves the list unchanged if `index >= len`; returns
    /// `true` otherwise, even if `values` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    ///
    /// assert!(list.insert_after_index(2, [9]));
    /// assert_eq!(list, List::from([1, 2, 3, 9, 4]));
    ///
    /// assert!(!list.insert_after_index(5, [7]));
    /// ```
    #[must_use]
    pub fn insert_after_index<I>(&mut self, index: usize, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let Some(node) = self.node_at(index) else {
            return false;
        };
        // SAFETY: `node` is a node of the list.
        unsafe { self.insert_run_after(node, values) };
        true
    }

    /// Inserts `values` right before the element at `index`, keeping their order.
    ///
    /// Inserting before the front element makes the first inserted value the
    /// new front.
    ///
    /// Returns `false` and leaves the list unchanged if `index >= len`; returns
    /// `true` otherwise, even if `values` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    ///
    /// assert!(list.insert_before_index(2, [9]));
    /// assert_eq!(list, List::from([1, 2, 9, 3, 4]));
    ///
    /// assert!(list.insert_before_index(0, [7, 8]));
    /// assert_eq!(list, List::from([7, 8, 1, 2, 9, 3, 4]));
    /// ```
    #[must_use]
    pub fn insert_before_index<I>(&mut self, index: usize, values: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let Some(node) = self.node_at(index) else {
            return false;
        };
        // SAFETY: `node` is a node of the list.
        unsafe { self.insert_run_before(node, values) };
        true
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides an iterator from the back to the front, walking the `prev`
    /// links from the last node. Same as `iter().rev()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.iter_rev().collect::<Vec<_>>(), vec![&3, &2, &1]);
    /// ```
    #[inline]
    pub fn iter_rev(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Provides a forward iterator over `(index, &element)` pairs, with the
    /// index counting up from 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let list = List::from(['a', 'b']);
    /// assert_eq!(list.indexed().collect::<Vec<_>>(), vec![(0, &'a'), (1, &'b')]);
    /// ```
    #[inline]
    pub fn indexed(&self) -> Indexed<'_, T> {
        Indexed::new(self)
    }

    /// Provides an iterator over `(index, &element)` pairs from the back to the
    /// front.
    ///
    /// The index is the element's position counted from the *front*, so it
    /// counts down from `len - 1` to 0. It is not re-based to start at 0; use
    /// `iter_rev().enumerate()` for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let list = List::from([1, 2, 3, 4]);
    /// assert_eq!(
    ///     list.indexed_rev().collect::<Vec<_>>(),
    ///     vec![(3, &4), (2, &3), (1, &2), (0, &1)],
    /// );
    /// ```
    #[inline]
    pub fn indexed_rev(&self) -> Rev<Indexed<'_, T>> {
        self.indexed().rev()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its `prev` and `next` point
    /// to itself, so it is already a valid ring of length 1.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })));
        // SAFETY: `node` was just leaked and is only reachable through this
        // pointer, so the self-links share its provenance.
        unsafe {
            (*node.as_ptr()).next = node;
            (*node.as_ptr()).prev = node;
        }
        node
    }

    /// Reset both links to the node itself.
    pub(crate) fn unlink(&mut self) {
        let this = NonNull::from(&mut *self);
        self.next = this;
        self.prev = this;
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the ring in both directions and check every structural invariant.
    pub(crate) fn check_invariants(&self) {
        let Some(head) = self.head else {
            assert_eq!(self.len, 0, "an empty ring must have length 0");
            return;
        };
        assert!(self.len > 0, "a non-empty ring must have a length");
        unsafe {
            let mut node = head;
            for step in 1..=self.len {
                let next = node.as_ref().next;
                assert_eq!(next.as_ref().prev, node);
                if step < self.len {
                    assert_ne!(next, head, "the ring is shorter than its length");
                }
                node = next;
            }
            assert_eq!(node, head, "the ring is longer than its length");
            for _ in 0..self.len {
                node = node.as_ref().prev;
            }
            assert_eq!(node, head);
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
    fn d<'i, 'a>(x: Indexed<'i, &'static str>) -> Indexed<'i, &'a str> {
        x
    }
}
