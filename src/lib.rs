//! This crate provides a doubly-linked list with owned nodes, implemented as a
//! cyclic list, and the queue, stack, set and trie built on top of it.
//!
//! The [`List`] allows inserting and removing elements at both ends in constant
//! time. Elements are also addressed by their position: peeking, inserting,
//! removing and moving elements at an index take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cyclic_collections::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! list.push_front(0);
//! assert_eq!(list, List::from([0, 1, 2, 3, 4]));
//!
//! assert_eq!(list.pop_at(3), Some(3));
//! assert!(list.insert_after_index(3, [5, 6]));
//! assert_eq!(list, List::from([0, 1, 2, 4, 5, 6]));
//!
//! assert!(list.move_before(5, 0)); // move 6 to the front
//! assert_eq!(list, List::from([6, 0, 1, 2, 4, 5]));
//!
//! assert_eq!(list.pop_at(10), None); // out of bounds, nothing happens
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌──────────────────────────────────────────────────────────────────────┐
//!          ↓                                                                      │
//!    ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗   │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ──┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                        ╟───────────╢
//! │  ║ payload T ║           ║ payload T ║                        ║ payload T ║
//! │  ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//! │      Node 0  ↑               Node 1                              Node n-1
//! │              │                                                       ↑
//! └──────────────┼───────────────────────────────────────────────────────┘
//! ╔═══════════╗  │
//! ║   head    ║ ─┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `head` that points to the first node, absent in an empty list;
//! - a length field `len` indicating the length of the list.
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the first element
//!   if it is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the last element
//!   if it is the first element in the list);
//! - the actual payload `T`.
//!
//! There is no sentinel node: every node carries a payload, and the last node is
//! simply `head.prev`. A node removed from the list has its links pointing to
//! itself, so it never refers back into the list it left.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and iterate the list like an array (fused and non-cyclic).
//! [`IterMut`] provides mutability of the elements (but not the linked structure of
//! the list). [`Indexed`] pairs every element with its position; reversed, it
//! still reports the forward position.
//!
//! ## Examples
//!
//! ```
//! use cyclic_collections::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! let mut indexed = list.indexed_rev();
//! assert_eq!(indexed.next(), Some((2, &3)));
//! assert_eq!(indexed.next(), Some((1, &2)));
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Collections
//!
//! Each collection is behind a Cargo feature of the same name, all enabled by
//! default:
//! - [`Queue`]: FIFO on a [`List`], with an optional capacity limit;
//! - [`Stack`]: LIFO on a [`List`], with an optional capacity limit;
//! - [`Set`]: a hash set with union, intersection and difference;
//! - [`Trie`]: a prefix tree keyed by strings (enables `stack`).
//!
//! A full [`Queue`] or [`Stack`] hands the rejected value back in a
//! [`CapacityError`].
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Indexed`]: crate::Indexed
//! [`CapacityError`]: crate::CapacityError
//! [`Queue`]: crate::Queue
//! [`Stack`]: crate::Stack
//! [`Set`]: crate::Set
//! [`Trie`]: crate::Trie

#[doc(inline)]
pub use error::CapacityError;
#[doc(inline)]
pub use list::iterator::{Indexed, IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;

#[cfg(feature = "queue")]
pub mod queue;
#[cfg(feature = "queue")]
#[doc(inline)]
pub use queue::Queue;

#[cfg(feature = "stack")]
pub mod stack;
#[cfg(feature = "stack")]
#[doc(inline)]
pub use stack::Stack;

#[cfg(feature = "set")]
pub mod set;
#[cfg(feature = "set")]
#[doc(inline)]
pub use set::Set;

#[cfg(feature = "trie")]
pub mod trie;
#[cfg(feature = "trie")]
#[doc(inline)]
pub use trie::Trie;
