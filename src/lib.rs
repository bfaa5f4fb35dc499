//! This crate provides a doubly-linked list with owned nodes, implemented as
//! a cyclic list anchored by a sentinel node.
//!
//! The [`List`] allows inserting, removing elements at any given position in
//! constant time. In compromise, accessing or mutating elements at any
//! position take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 3, 4]));
//!
//! cursor.seek_to(3).unwrap(); // move the cursor to position 3, and remove it.
//! assert_eq!(cursor.remove(), Some(3));
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                    Sentinel node    │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║ sentinel  ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a boxed `sentinel` node that closes the circular chain;
//! - a length field `len`, kept in sync with the number of value-carrying
//!   nodes, so [`len`](List::len) is *O*(1).
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the sentinel if
//!   it is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the sentinel
//!   if it is the first element in the list);
//! - the actual payload `T` that depends on the element type of the list,
//!   except the sentinel.
//!
//! Note that the sentinel has *NO* payload to save memory.
//!
//! Initially, there is a sentinel in an empty list, of which the `next` and
//! `prev` pointer point to itself.
//!
//! As elements are inserted into the list, `sentinel.next` points to the
//! first element, and `sentinel.prev` points to the last element of the list.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1,
//! ..., *n* - 1, and the sentinel is always indexed by *n*. (In an empty
//! list, the sentinel is indexed by 0, which is equal to its length 0).
//!
//! Because the sentinel is boxed, its address is stable: moving or swapping
//! whole `List` values never invalidates the self-links of an empty list.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! non-cyclic). [`IterMut`] provides mutability of the elements (but not the
//! linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(list.into_vec(), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list.
//!
//! As the names suggest, they are like cursors and can move forward or
//! backward over the list. In a list with length *n*, there are *n* + 1
//! valid locations for the cursor, indexed by 0, 1, ..., *n*, where *n* is
//! the sentinel of the list. The sentinel position is always valid: it
//! denotes one-past-the-end, and it is where [`Cursor::current`] returns
//! `None`.
//!
//! Movement across the sentinel boundary is a checked operation returning
//! [`Error::Boundary`]; the `_cyclic` variants wrap around instead.
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides many useful ways to mutate the list in any
//! position.
//! - [`insert`]: insert a new item before the cursor;
//! - [`try_remove`]: remove the item at the cursor, reporting
//!   [`Error::Sentinel`] at the one-past-the-end position;
//! - [`backspace`]: remove the item before the cursor;
//! - [`splice`]: splice another list before the cursor position.
//!
//! ## Examples
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(list.into_vec(), vec![5, 1, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! # Algorithms
//!
//! The list carries structural algorithms that work by relinking nodes
//! rather than copying elements: [`sort`] (a stable adjacent-pair sort),
//! [`merge`] (linear merge of two sorted lists), [`unique`], [`reverse`],
//! and a splice family ([`splice_at`], [`splice_range`], [`move_range`],
//! [`append`], [`prepend`]) that transfers nodes between lists in *O*(1).
//!
//! ```
//! use cursor_list::List;
//!
//! let mut list = List::from([5, 2, 4, 3, 1]);
//! list.sort();
//!
//! let mut other = List::from([0, 6]);
//! list.merge(&mut other);
//!
//! assert_eq!(list.into_vec(), vec![0, 1, 2, 3, 4, 5, 6]);
//! assert!(other.is_empty());
//! ```
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`Cursor::current`]: crate::list::cursor::Cursor::current
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`try_remove`]: crate::list::cursor::CursorMut::try_remove
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`splice`]: crate::list::cursor::CursorMut::splice
//! [`sort`]: crate::List::sort
//! [`merge`]: crate::List::merge
//! [`unique`]: crate::List::unique
//! [`reverse`]: crate::List::reverse
//! [`splice_at`]: crate::List::splice_at
//! [`splice_range`]: crate::List::splice_range
//! [`move_range`]: crate::List::move_range
//! [`append`]: crate::List::append
//! [`prepend`]: crate::List::prepend

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod error;
