//! An unordered set of unique values, with the usual set algebra.
//!
//! Unlike the other collections of this crate, the set is not built on
//! [`List`](crate::List): membership is answered by a hash table.

use ahash::{HashSet, HashSetExt};
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;

/// A hash set with value-returning set operations.
///
/// # Examples
///
/// ```
/// use cyclic_collections::Set;
///
/// let a = Set::from([1, 2, 3]);
/// let b = Set::from([3, 4]);
///
/// assert_eq!(a.union(&b), Set::from([1, 2, 3, 4]));
/// assert_eq!(a.intersection(&b), Set::from([3]));
/// assert_eq!(a.difference(&b), Set::from([1, 2]));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity(capacity),
        }
    }

    /// Adds a value. Returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.elements.insert(value)
    }

    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.elements.extend(values);
    }

    /// Removes a value. Returns `false` if it was not present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.elements.remove(value)
    }

    /// Removes every given value; values that are not present are ignored.
    pub fn remove_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        values.into_iter().for_each(|value| {
            self.elements.remove(value);
        });
    }

    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the values in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Values that are in `self`, in `other`, or in both.
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut union = Self::with_capacity(self.len() + other.len());
        union.insert_all(self.iter().cloned());
        union.insert_all(other.iter().cloned());
        union
    }

    /// Values that are in both `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .filter(|value| other.contains(value))
            .cloned()
            .collect()
    }

    /// Values that are in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter()
            .filter(|value| !other.contains(value))
            .cloned()
            .collect()
    }

    /// The values unique to each side: `(self - other, other - self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_collections::Set;
    ///
    /// let (left, right) = Set::from([1, 2, 3]).symmetric_difference(&Set::from([2, 3, 4]));
    /// assert_eq!(left, Set::from([1]));
    /// assert_eq!(right, Set::from([4]));
    /// ```
    pub fn symmetric_difference(&self, other: &Self) -> (Self, Self)
    where
        T: Clone,
    {
        (self.difference(other), other.difference(self))
    }

    /// `true` if every value of `self` is in `other`. The empty set is a
    /// subset of every set.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|value| other.contains(value))
    }

    /// `true` if `self` is a subset of `other` and `other` has more values.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two sets are equal if they hold the same values.
impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.insert_all(iter);
        set
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn set_new() {
        let empty = Set::<i32>::new();
        assert!(empty.is_empty());
        assert_eq!(Set::from([1]).len(), 1);
        assert_eq!(Set::from([1, 2, 2, 3]).len(), 3);
    }

    #[test]
    fn set_insert_and_remove() {
        let mut set = Set::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        set.insert_all([2, 3, 4]);
        assert_eq!(set.len(), 4);
        assert!(set.contains(&3));

        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        set.remove_all(&[1, 2, 9]);
        assert_eq!(set, Set::from([4]));
    }

    #[test]
    fn set_algebra() {
        let a = Set::from([1, 2, 3, 4]);
        let b = Set::from([3, 4, 5]);
        let empty = Set::new();

        assert_eq!(a.union(&b), Set::from([1, 2, 3, 4, 5]));
        assert_eq!(a.union(&empty), a);
        assert_eq!(a.intersection(&b), Set::from([3, 4]));
        assert!(a.intersection(&empty).is_empty());
        assert_eq!(a.difference(&b), Set::from([1, 2]));
        assert_eq!(b.difference(&a), Set::from([5]));
        assert_eq!(a.difference(&empty), a);

        let (left, right) = a.symmetric_difference(&b);
        assert_eq!(left, Set::from([1, 2]));
        assert_eq!(right, Set::from([5]));
        let (left, right) = empty.symmetric_difference(&empty);
        assert!(left.is_empty() && right.is_empty());
    }

    #[rstest]
    #[case(&[], &[], true, false)]
    #[case(&[], &[1], true, true)]
    #[case(&[1, 2], &[1, 2], true, false)]
    #[case(&[1], &[1, 2], true, true)]
    #[case(&[1, 3], &[1, 2], false, false)]
    #[case(&[1, 2, 3], &[1, 2], false, false)]
    fn set_subsets(
        #[case] a: &[i32],
        #[case] b: &[i32],
        #[case] subset: bool,
        #[case] proper: bool,
    ) {
        let a = Set::from_iter(a.iter().copied());
        let b = Set::from_iter(b.iter().copied());
        assert_eq!(a.is_subset(&b), subset);
        assert_eq!(a.is_proper_subset(&b), proper);
    }

    #[test]
    fn set_clone_and_equal() {
        let set = Set::from(["a", "b"]);
        let mut cloned = set.clone();
        assert_eq!(set, cloned);
        cloned.insert("c");
        assert_ne!(set, cloned);
        assert_ne!(Set::from([1, 2]), Set::from([1, 3]));
    }

    #[test]
    fn set_iter() {
        let set = Set::from([1, 2, 3, 4]);
        let mut values: Vec<_> = set.iter().copied().collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3, 4]);
        assert_eq!((&set).into_iter().count(), 4);
    }
}
