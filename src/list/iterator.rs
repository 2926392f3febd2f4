use crate::list::{List, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// It keeps its own cursor state: the next node to yield from the front, the
/// next node to yield from the back, and the number of elements left. The
/// length is read once when the iterator is created, and exactly that many
/// nodes are yielded, so the iterator never walks around the ring twice.
///
/// Though the `Iter` does not hold a reference from the list,
/// it actually *borrows* (immutably) from the list, so a phantom
/// marker of `&'a List<T>` is added to protect the list from being
/// write.
///
/// # Examples
///
/// ```compile_fail
/// use cyclic_collections::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            front: list.front_node(),
            back: list.back_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and advance `front` to `front.next`, or return `None`
    /// if no element is left.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `front` is a node of the borrowed list that has
        // not been yielded yet.
        let current = unsafe { self.front?.as_ref() };
        self.front = Some(current.next);
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Return `*back` and move `back` to `back.prev`, or return `None`
    /// if no element is left.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `back` is a node of the borrowed list that has
        // not been yielded yet.
        let current = unsafe { self.back?.as_ref() };
        self.back = Some(current.prev);
        self.len -= 1;
        Some(&current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// Though the `IterMut` does not hold a reference from the list,
/// it actually *borrows* (mutably) from the list, so a phantom
/// marker of `&'a mut List<T>` is added to protect the list from
/// begin read.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use cyclic_collections::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    front: Option<NonNull<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            front: list.front_node(),
            back: list.back_node(),
            len: list.len(),
            _marker: PhantomData,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut ptr = self.front;
        for _ in 0..self.len {
            let Some(node) = ptr else { break };
            // SAFETY: the first `len` nodes from `front` are not yielded yet,
            // and they are only read here.
            let current = unsafe { node.as_ref() };
            f.field(&current.element);
            ptr = Some(current.next);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return `*front` and advance `front` to `front.next`, or return `None`
    /// if no element is left.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `front` is a node that has not been yielded
        // yet. Each node is yielded once, so the mutable references never alias.
        let current = unsafe { self.front?.as_mut() };
        self.front = Some(current.next);
        self.len -= 1;
        Some(&mut current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    /// Return `*back` and move `back` to `back.prev`, or return `None`
    /// if no element is left.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: see `next`.
        let current = unsafe { self.back?.as_mut() };
        self.back = Some(current.prev);
        self.len -= 1;
        Some(&mut current.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An iterator over `(index, &element)` pairs of a `List`.
///
/// The index of a pair is always the position of the element counted from
/// the front of the list, whichever end the pair is taken from. Iterating it
/// backward (see [`List::indexed_rev`]) therefore yields the indices
/// `len - 1, len - 2, ..., 0`, just like `iter().enumerate().rev()` would.
///
/// # Examples
///
/// ```
/// use cyclic_collections::List;
///
/// let list = List::from(['a', 'b', 'c']);
/// let mut indexed = list.indexed();
/// assert_eq!(indexed.next(), Some((0, &'a')));
/// assert_eq!(indexed.next_back(), Some((2, &'c')));
/// assert_eq!(indexed.next_back(), Some((1, &'b')));
/// assert_eq!(indexed.next(), None);
/// ```
pub struct Indexed<'a, T: 'a> {
    iter: Iter<'a, T>,
    /// the index of the next element yielded from the front
    index: usize,
}

impl<'a, T: 'a> Indexed<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            iter: list.iter(),
            index: 0,
        }
    }
}

impl<'a, T: 'a> Clone for Indexed<'a, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            index: self.index,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Indexed<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Indexed")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T: 'a> Iterator for Indexed<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Indexed<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let element = self.iter.next_back()?;
        // The elements left in `iter` all sit between the front and this one.
        Some((self.index + self.iter.len(), element))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Indexed<'a, T> {}

impl<'a, T: 'a> FusedIterator for Indexed<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back_all(iter);
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::fmt::Debug;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident $(, $REV:ident)?) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = List::from_iter(vec.clone());
                    let len = vec.len();
                    let mut iter = list.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )?.enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);

                    let mut iter = list.$ITER() $( .$REV() )?;
                    for (i, item) in vec.$ITER() $( .$REV() )? .take(mid).enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - i - 1);
                    }
                    let mut iter = iter.rev();
                    for (i, item) in vec.$ITER() $( .$REV() )? .skip(mid).rev().enumerate() {
                        assert_eq!(iter.next(), Some(item));
                        assert_eq!(iter.len(), len - mid - i - 1);
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next_back(), None);
                    assert_eq!(iter.len(), 0);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);
        test_iter!(test_back_iter, iter, rev);
        test_iter!(test_back_iter_mut, iter_mut, rev);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_iter_mut(input.clone(), mid);
            test_back_iter(input.clone(), mid);
            test_back_iter_mut(input.clone(), mid);
        }
        test_case(0..10, 10);
        test_case(0..10, 8);
        test_case(0..10, 5);
        test_case(0..10, 2);
        test_case(0..10, 0);
        test_case(0..2, 2);
        test_case(0..2, 1);
        test_case(0..2, 0);
        test_case(0..1, 1);
        test_case(0..1, 0);
        test_case(0..0, 0);
    }

    #[test]
    fn test_four_traversals() {
        let list = List::from([1, 2, 3, 4]);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4]);
        assert_eq!(Vec::from_iter(list.iter_rev().copied()), vec![4, 3, 2, 1]);
        assert_eq!(
            Vec::from_iter(list.indexed()),
            vec![(0, &1), (1, &2), (2, &3), (3, &4)]
        );
        // Reversed indexed traversal keeps the forward positions.
        assert_eq!(
            Vec::from_iter(list.indexed_rev()),
            vec![(3, &4), (2, &3), (1, &2), (0, &1)]
        );
    }

    #[test]
    fn test_indexed_from_both_ends() {
        let list = List::from_iter(0..10);
        let mut indexed = list.indexed();
        assert_eq!(indexed.next(), Some((0, &0)));
        assert_eq!(indexed.next(), Some((1, &1)));
        assert_eq!(indexed.next_back(), Some((9, &9)));
        assert_eq!(indexed.len(), 7);
        let rest: Vec<_> = indexed.rev().collect();
        assert_eq!(rest.first(), Some(&(8, &8)));
        assert_eq!(rest.last(), Some(&(2, &2)));
        assert!(rest.iter().all(|&(i, &v)| i as i32 == v));
    }

    #[test]
    fn test_empty_and_singleton() {
        let empty = List::<i32>::new();
        assert_eq!(empty.iter().next(), None);
        assert_eq!(empty.iter_rev().next(), None);
        assert_eq!(empty.indexed().next(), None);
        assert_eq!(empty.indexed_rev().next(), None);

        let single = List::from([7]);
        assert_eq!(Vec::from_iter(single.iter()), vec![&7]);
        assert_eq!(Vec::from_iter(single.iter_rev()), vec![&7]);
        assert_eq!(Vec::from_iter(single.indexed_rev()), vec![(0, &7)]);
    }

    #[test]
    fn test_independent_traversals() {
        let list = List::from_iter(0..4);
        let mut a = list.iter();
        let mut b = list.iter_rev();
        assert_eq!(a.next(), Some(&0));
        assert_eq!(b.next(), Some(&3));
        assert_eq!(a.next(), Some(&1));
        // Stopping early holds nothing that needs cleanup.
        drop(b);
        assert_eq!(a.count(), 2);
        assert_eq!(list.iter().count(), 4);
    }

    #[test]
    fn test_into_iter() {
        let list = List::from_iter(0..5);
        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(Vec::from_iter(iter), vec![1, 2, 3]);
    }

    #[test]
    fn test_debug() {
        let list = List::from([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        let mut iter = list.iter();
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter([2, 3])");
    }
}
