use crate::list::{List, Node};
use log::trace;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

/// Two lists are equal if they have the same length and equal elements in
/// the same order. Lists of different lengths are rejected without looking
/// at any element.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Cloning builds a new list node by node, so the clone shares nothing with
/// the source list.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

// private methods
impl<T> List<T> {
    /// Find the first node from the front whose element equals `x`.
    fn find_node(&self, x: &T) -> Option<NonNull<Node<T>>>
    where
        T: PartialEq<T>,
    {
        let mut node = self.front_node()?;
        for _ in 0..self.len() {
            // SAFETY: the first `len` nodes from the head are the nodes of the list.
            let current = unsafe { node.as_ref() };
            if &current.element == x {
                return Some(node);
            }
            node = current.next;
        }
        None
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to `x`, scanning from the
    /// front, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let list = List::from([1, 2, 1, 3]);
    /// assert_eq!(list.index_of(&1), Some(0));
    /// assert_eq!(list.index_of(&4), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Returns the index of the first element equal to `x`, scanning from the
    /// *back*, or `None` if there is none.
    ///
    /// The scan walks the `prev` links from the last element, so it stops at
    /// the match closest to the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let list = List::from([1, 2, 1, 3]);
    /// assert_eq!(list.last_index_of(&1), Some(2));
    /// assert_eq!(list.last_index_of(&4), None);
    /// ```
    pub fn last_index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.indexed_rev()
            .find_map(|(index, e)| (e == x).then_some(index))
    }

    /// Returns the indices of all elements equal to `x`, in ascending order.
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
    /// let list = List::from([1, 2, 1, 3, 1]);
    /// assert_eq!(list.find_all(&1), vec![0, 2, 4]);
    /// assert!(list.find_all(&4).is_empty());
    /// ```
    pub fn find_all(&self, x: &T) -> Vec<usize>
    where
        T: PartialEq<T>,
    {
        self.indexed()
            .filter_map(|(index, e)| (e == x).then_some(index))
            .collect()
    }

    /// Removes the first element equal to `x`, scanning from the front.
    ///
    /// Returns `false` if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::from([1, 2, 1]);
    /// assert!(list.remove_value(&1));
    /// assert_eq!(list, List::from([2, 1]));
    /// assert!(!list.remove_value(&3));
    /// ```
    #[must_use]
    pub fn remove_value(&mut self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        let Some(node) = self.find_node(x) else {
            return false;
        };
        // SAFETY: `node` was found in the list.
        drop(unsafe { self.detach_node(node) });
        true
    }

    /// Moves the element at `from` so that it sits right after the element
    /// currently at `to`. The relative order of all other elements is kept.
    ///
    /// Returns `false` if either index is out of bounds. Moving an element
    /// after itself, or after the element already right before it, changes
    /// nothing and returns `true`.
    ///
    /// The node is relinked, not reallocated: both nodes are located before
    /// anything is unlinked, so the removal of the source cannot shift the
    /// target.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time for locating both
    /// nodes; the move itself is *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::from_iter(0..6);
    /// assert!(list.move_after(4, 0));
    /// assert_eq!(list, List::from([0, 4, 1, 2, 3, 5]));
    ///
    /// assert!(list.move_after(0, 5));
    /// assert_eq!(list, List::from([4, 1, 2, 3, 5, 0]));
    ///
    /// assert!(!list.move_after(6, 0));
    /// ```
    #[must_use]
    pub fn move_after(&mut self, from: usize, to: usize) -> bool {
        let (Some(source), Some(target)) = (self.node_at(from), self.node_at(to)) else {
            return false;
        };
        if from == to || from == to + 1 {
            return true;
        }
        // SAFETY: `source` and `target` are distinct nodes of the list, so
        // `target` stays in the ring once `source` is spliced out.
        unsafe {
            self.unsplice_node(source);
            self.attach_node(target, target.as_ref().next, source);
        }
        trace!("moved element at {} after element at {}", from, to);
        true
    }

    /// Moves the element at `from` so that it sits right before the element
    /// currently at `to`. The relative order of all other elements is kept.
    ///
    /// Returns `false` if either index is out of bounds. Moving an element
    /// before itself, or before the element already right after it, changes
    /// nothing and returns `true`. Moving an element before the front element
    /// makes it the new front.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time for locating both
    /// nodes; the move itself is *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::List;
    ///
    /// let mut list = List::from_iter(0..6);
    /// assert!(list.move_before(1, 5));
    /// assert_eq!(list, List::from([0, 2, 3, 4, 1, 5]));
    ///
    /// assert!(list.move_before(5, 0));
    /// assert_eq!(list, List::from([5, 0, 2, 3, 4, 1]));
    /// ```
    #[must_use]
    pub fn move_before(&mut self, from: usize, to: usize) -> bool {
        let (Some(source), Some(target)) = (self.node_at(from), self.node_at(to)) else {
            return false;
        };
        if from == to || to == from + 1 {
            return true;
        }
        // SAFETY: `source` and `target` are distinct nodes of the list, so
        // `target` stays in the ring once `source` is spliced out.
        unsafe {
            self.unsplice_node(source);
            self.attach_node(target.as_ref().prev, target, source);
        }
        if self.front_node() == Some(target) {
            self.head = Some(source);
        }
        trace!("moved element at {} before element at {}", from, to);
        true
    }
}
