//! A prefix tree keyed by strings, one node per `char`.
//!
//! ```text
//!  root ─┬─ 'a' ─┬─ 'b' (12)
//!        │       └─ 'd' (14) ─── 'c' (13)
//!        └─ '🍿' ── '🌮' (25)
//! ```

use ahash::{HashMap, HashMapExt};
use std::collections::hash_map::Entry;
use std::fmt;
use std::mem;

use log::trace;

use crate::Stack;

struct Node<V> {
    value: Option<V>,
    children: HashMap<char, Node<V>>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            value: None,
            children: HashMap::new(),
        }
    }
}

/// A map from string keys to values, sharing storage between common prefixes.
///
/// The empty key is stored at the root.
///
/// # Examples
///
/// ```
/// use cyclic_collections::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("35", 100);
/// trie.insert("368", 120);
/// trie.insert("3", 2);
/// assert_eq!(trie.len(), 3);
/// assert_eq!(trie.node_len(), 4);
///
/// assert_eq!(trie.get("36"), None);
/// assert_eq!(trie.remove("368"), Some(120));
/// assert_eq!(trie.node_len(), 2);
/// ```
pub struct Trie<V> {
    root: Node<V>,
    len: usize,
    node_len: usize,
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            len: 0,
            node_len: 0,
        }
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of nodes, not counting the root.
    pub fn node_len(&self) -> usize {
        self.node_len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn node(&self, key: &str) -> Option<&Node<V>> {
        key.chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    fn node_mut(&mut self, path: impl IntoIterator<Item = char>) -> Option<&mut Node<V>> {
        path.into_iter()
            .try_fold(&mut self.root, |node, c| node.children.get_mut(&c))
    }

    /// Store `value` under `key`, creating the missing nodes along the way.
    ///
    /// Returns the value previously stored under `key`, if any.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = match node.children.entry(c) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    self.node_len += 1;
                    entry.insert(Node::new())
                }
            };
        }
        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.node(key)?.value.as_ref()
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.node_mut(key.chars())?.value.as_mut()
    }

    /// `true` if a value is stored under `key`. A prefix of a stored key
    /// does not count.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove and return the value stored under `key`.
    ///
    /// Nodes left with neither a value nor children are deleted, up to the
    /// closest ancestor that still holds a value or another branch.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let path: Vec<char> = key.chars().collect();

        // Depth of the deepest node on the path that must survive.
        let mut keep = 0;
        let mut node = &self.root;
        for (depth, c) in path.iter().enumerate() {
            if node.value.is_some() || node.children.len() > 1 {
                keep = depth;
            }
            node = node.children.get(c)?;
        }
        node.value.as_ref()?;

        if path.is_empty() || !node.children.is_empty() {
            let value = self.node_mut(path.iter().copied())?.value.take();
            self.len -= 1;
            return value;
        }

        let mut pruned = self
            .node_mut(path[..keep].iter().copied())?
            .children
            .remove(&path[keep])?;
        for c in &path[keep + 1..] {
            pruned = pruned.children.remove(c)?;
        }
        self.len -= 1;
        self.node_len -= path.len() - keep;
        trace!("pruned {} trie nodes", path.len() - keep);
        pruned.value
    }

    /// Remove every key, releasing the nodes one at a time.
    pub fn clear(&mut self) {
        let mut pending = Stack::new();
        for child in mem::take(&mut self.root.children).into_values() {
            pending.push_unbounded(child);
        }
        let mut released = 0usize;
        while let Some(node) = pending.pop() {
            for child in node.children.into_values() {
                pending.push_unbounded(child);
            }
            released += 1;
        }
        self.root.value = None;
        self.len = 0;
        self.node_len = 0;
        trace!("cleared {} trie nodes", released);
    }
}

impl<V> Drop for Trie<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("node_len", &self.node_len)
            .finish_non_exhaustive()
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for Trie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sample() -> Trie<i32> {
        Trie::from_iter([("ab", 12), ("adc", 13), ("adf", 14)])
    }

    #[test]
    fn trie_len() {
        let mut trie = Trie::new();
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.node_len(), 0);
        assert!(trie.is_empty());

        assert_eq!(trie.insert("35", 100), None);
        assert_eq!((trie.len(), trie.node_len()), (1, 2));
        assert_eq!(trie.insert("368", 120), None);
        assert_eq!((trie.len(), trie.node_len()), (2, 4));
        assert_eq!(trie.insert("3", 2), None);
        assert_eq!((trie.len(), trie.node_len()), (3, 4));

        assert_eq!(trie.remove("368"), Some(120));
        assert_eq!((trie.len(), trie.node_len()), (2, 2));
    }

    #[test]
    fn trie_from_iter() {
        let trie = Trie::from_iter([("ab", 12), ("adc", 13), ("ad", 14)]);
        assert_eq!(trie.get("a"), None);
        assert_eq!(trie.get("ab"), Some(&12));
        assert_eq!(trie.get("ad"), Some(&14));
        assert_eq!(trie.get("adc"), Some(&13));
        assert_eq!((trie.len(), trie.node_len()), (3, 4));
    }

    #[test]
    fn trie_insert() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("🍿🌮🍖", 12), None);
        assert_eq!(trie.node_len(), 3);
        assert_eq!(trie.get("🍿"), None);
        assert_eq!(trie.get("🍿🌮"), None);
        assert_eq!(trie.get("🍿🌮🍖"), Some(&12));

        assert_eq!(trie.insert("🍿🌮", 25), None);
        assert_eq!(trie.get("🍿🌮"), Some(&25));
        assert_eq!(trie.node_len(), 3);

        assert_eq!(trie.insert("🍿🌮", 26), Some(25));
        assert_eq!(trie.len(), 2);

        *trie.get_mut("🍿🌮🍖").unwrap() += 1;
        assert_eq!(trie.get("🍿🌮🍖"), Some(&13));
        assert_eq!(trie.get_mut("🍿🍖"), None);
    }

    #[test]
    fn trie_remove() {
        let mut trie = sample();
        assert_eq!((trie.len(), trie.node_len()), (3, 5));

        assert_eq!(trie.remove("ab"), Some(12));
        assert_eq!((trie.len(), trie.node_len()), (2, 4));
        assert_eq!(trie.remove("ab"), None);

        assert_eq!(trie.remove("adc"), Some(13));
        assert_eq!((trie.len(), trie.node_len()), (1, 3));

        assert_eq!(trie.remove("ad"), None);
        assert_eq!(trie.remove("adf"), Some(14));
        assert_eq!((trie.len(), trie.node_len()), (0, 0));
        assert!(trie.root.children.is_empty());
    }

    #[test]
    fn trie_remove_keeps_inner_nodes() {
        let mut trie = Trie::from_iter([("a", 1), ("abc", 2)]);
        assert_eq!(trie.remove("a"), Some(1));
        assert_eq!((trie.len(), trie.node_len()), (1, 3));
        assert_eq!(trie.get("abc"), Some(&2));

        assert_eq!(trie.remove("abc"), Some(2));
        assert_eq!((trie.len(), trie.node_len()), (0, 0));
    }

    #[test]
    fn trie_empty_key() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert("", 1), None);
        assert_eq!(trie.insert("x", 2), None);
        assert_eq!((trie.len(), trie.node_len()), (2, 1));
        assert_eq!(trie.remove(""), Some(1));
        assert_eq!(trie.get("x"), Some(&2));
        assert_eq!(trie.remove(""), None);
    }

    #[test]
    fn trie_get_mut_walks_the_whole_key() {
        let mut trie = sample();
        assert_eq!(trie.get_mut("a"), None);
        assert_eq!(trie.get_mut("adx"), None);
        assert_eq!(trie.get_mut("adcx"), None);
        if let Some(value) = trie.get_mut("adf") {
            *value = 40;
        }
        assert_eq!(trie.get("adf"), Some(&40));
        assert_eq!(trie.get("adc"), Some(&13));
    }

    #[test]
    fn trie_search() {
        let trie = sample();
        assert!(!trie.contains_key("qwerty"));
        assert!(!trie.contains_key("a"));
        assert!(trie.contains_key("adc"));
        assert_eq!(trie.get("adc"), Some(&13));
    }

    #[test]
    fn trie_clear() {
        let mut trie = sample();
        trie.insert("", 0);
        trie.clear();
        assert_eq!((trie.len(), trie.node_len()), (0, 0));
        assert!(trie.root.children.is_empty());
        assert_eq!(trie.get(""), None);
        assert_eq!(trie.get("ab"), None);

        trie.insert("ab", 1);
        assert_eq!((trie.len(), trie.node_len()), (1, 2));
    }

    #[test]
    fn trie_releases_values() {
        struct Counted<'a>(&'a Cell<usize>);
        impl Drop for Counted<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let dropped = Cell::new(0);
        let mut trie = Trie::new();
        for key in ["a", "ab", "abc", "b", "bcd"] {
            trie.insert(key, Counted(&dropped));
        }
        drop(trie.remove("abc"));
        assert_eq!(dropped.get(), 1);
        trie.insert("a", Counted(&dropped));
        assert_eq!(dropped.get(), 2);
        drop(trie);
        assert_eq!(dropped.get(), 6);
    }

    #[test]
    fn trie_deep_keys() {
        let key = "x".repeat(200_000);
        let mut trie = Trie::new();
        trie.insert(&key, 1);
        trie.insert(&key[..1000], 2);
        assert_eq!(trie.node_len(), 200_000);
        assert_eq!(trie.remove(&key), Some(1));
        assert_eq!(trie.node_len(), 1000);

        trie.insert(&key, 3);
        drop(trie);
    }
}
