use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Range;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{Error, IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, implemented as a
/// cyclic list anchored by a sentinel. It allows inserting and removing
/// elements at any given position in constant time. In compromise, accessing
/// or mutating elements at any position takes *O*(*n*) time.
///
/// The `List` contains:
/// - a boxed `sentinel` node that closes the circular chain and doubles as
///   the one-past-the-end cursor target;
/// - a cached length field `len`, so [`len`](List::len) is *O*(1).
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the sentinel).
pub struct List<T> {
    sentinel: Box<Node<Sentinel>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// Marker payload of the sentinel node. Zero-sized; the sentinel's element
/// is never read or written.
struct Sentinel;

/// Nodes fragment detached from a list, used in splicing and range erasure.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Link two nodes so that they become adjacent, `prev` before `next`.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

// private methods
impl<T> List<T> {
    pub(crate) fn sentinel_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.sentinel.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.next` is always valid (either the sentinel
        // itself, or the first element of the cyclic chain).
        unsafe { self.sentinel_node().as_ref().next }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.prev` is always valid (either the sentinel
        // itself, or the last element of the cyclic chain).
        unsafe { self.sentinel_node().as_ref().prev }
    }

    /// Walk to the node at position `at`, where `at == len` yields the
    /// sentinel. Seeks from whichever end is nearer.
    pub(crate) fn node_at(&self, at: usize) -> NonNull<Node<T>> {
        debug_assert!(at <= self.len);
        unsafe {
            if at <= self.len / 2 {
                let mut node = self.front_node();
                for _ in 0..at {
                    node = node.as_ref().next;
                }
                node
            } else {
                let mut node = self.sentinel_node();
                for _ in at..self.len {
                    node = node.as_ref().prev;
                }
                node
            }
        }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list. If it does not, this call will make the list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Detach a single node without giving up its allocation, so that it can
    /// be re-attached to another list.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list, and because the node's own links are stale until the caller
    /// attaches it again.
    pub(crate) unsafe fn unlink_node(&mut self, node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        self.len -= 1;
        connect(node.as_ref().prev, node.as_ref().next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`). Violating either makes the list
    /// ill-formed.
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
    }

    /// Detach the closed range of nodes `front..=back` from the list, and
    /// return the detached fragment.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a
    /// valid range of this list (`front` must **not** be at the right of
    /// `back`), or whether `len` matches its length.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> DetachedNodes<T> {
        self.len -= len;
        connect(front.as_ref().prev, back.as_ref().next);
        DetachedNodes::new(front, back, len)
    }

    /// Attach a detached fragment to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
        self.len += detached.len;
    }

    /// Detach all nodes from the list, and return the detached fragment, or
    /// return `None` if the list is empty.
    ///
    /// It is safe because `self.front_node()..=self.back_node()` is a valid
    /// range.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node(), self.len)) }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            sentinel: new_sentinel(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Create a list holding `count` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::filled(3, 7);
    /// assert_eq!(list.to_vec(), vec![7, 7, 7]);
    /// ```
    pub fn filled(count: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut list = List::new();
        list.assign_repeat(count, value);
        list
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
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.sentinel_node()
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
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.cursor_start_mut().current_mut()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.cursor_end_mut().previous_mut()
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
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
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
    /// use cursor_list::List;
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
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from the list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        self.cursor_end_mut().backspace()
    }

    /// Resizes the list so that it holds `new_len` elements. Shrinking pops
    /// from the back; growing appends clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.resize(5, 0);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 0, 0]);
    ///
    /// list.resize(2, 0);
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        while self.len > new_len {
            self.pop_back();
        }
        while self.len < new_len {
            self.push_back(value.clone());
        }
    }

    /// Like [`resize`](List::resize), but growth appends default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// list.resize_default(4);
    /// assert_eq!(list.to_vec(), vec![1, 2, 0, 0]);
    /// ```
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        while self.len > new_len {
            self.pop_back();
        }
        while self.len < new_len {
            self.push_back(T::default());
        }
    }

    /// Replaces the contents of the list with each element of `iter`, in
    /// source order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([7, 8]);
    /// list.assign(1..4);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.extend(iter);
    }

    /// Replaces the contents of the list with `count` copies of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.assign_repeat(2, 9);
    /// assert_eq!(list.to_vec(), vec![9, 9]);
    /// ```
    pub fn assign_repeat(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.clear();
        self.extend(std::iter::repeat(value).take(count));
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is pointing to the sentinel if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        cursor
            .seek_to(at)
            .expect("cannot create a cursor past the end of the list");
        cursor
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the sentinel if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Some(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the sentinel, the one-past-the-end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.sentinel_node(), self.len)
    }

    /// Provides a cursor with editing operations at the node with given
    /// index.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.cursor_mut(1).insert(9);
    /// assert_eq!(list.to_vec(), vec![1, 9, 2, 3]);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        cursor
            .seek_to(at)
            .expect("cannot create a cursor past the end of the list");
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the sentinel if the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// Provides a cursor with editing operations at the sentinel.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (sentinel, len) = (self.sentinel_node(), self.len);
        CursorMut::new(self, sentinel, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
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

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list into a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Adds an element at the given index in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time: *O*(*n*) to locate
    /// the position, *O*(1) to link the node.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// list.insert(2, 4);
    /// list.insert(4, 5);
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, at: usize, elt: T) {
        assert!(
            at <= self.len,
            "cannot insert at an index outside of the list bounds"
        );
        self.cursor_mut(at).insert(elt);
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    ///
    /// assert_eq!(list.remove(1), 2);
    /// assert_eq!(list.remove(0), 3);
    /// assert_eq!(list.remove(0), 1);
    /// ```
    pub fn remove(&mut self, at: usize) -> T {
        assert!(
            at < self.len,
            "cannot remove at an index outside of the list bounds"
        );
        self.cursor_mut(at)
            .try_remove()
            .expect("cannot remove at an index outside of the list bounds")
    }

    /// Removes the half-open range `start..end` of elements.
    ///
    /// `range.end == len` is accepted as the conventional "erase through the
    /// tail" bound, so `erase_range(0..len)` empties the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Panics
    ///
    /// Panics if `range.start > range.end` or `range.end > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([0, 1, 2, 3, 4, 5]);
    /// list.erase_range(1..3);
    /// assert_eq!(list.to_vec(), vec![0, 3, 4, 5]);
    ///
    /// let len = list.len();
    /// list.erase_range(0..len);
    /// assert!(list.is_empty());
    /// ```
    pub fn erase_range(&mut self, range: Range<usize>) {
        assert!(range.start <= range.end, "erase range is inverted");
        assert!(range.end <= self.len, "erase range end is out of bounds");
        if range.start == range.end {
            return;
        }
        let front = self.node_at(range.start);
        let back = self.node_at(range.end - 1);
        // SAFETY: `front..=back` is a valid closed range of this list of
        // exactly `range.len()` nodes.
        let detached = unsafe { self.detach_nodes(front, back, range.end - range.start) };
        detached.drop_all();
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`.
    /// After this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1.to_vec(), vec!['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: `self.back_node()` and `self.sentinel_node()` are valid
            // adjacent nodes of this list.
            unsafe { self.attach_nodes(self.back_node(), self.sentinel_node(), detached) }
        }
    }

    /// Moves all elements from `other` to the beginning of the list.
    /// After this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list1 = List::from(['b', 'c']);
    /// let mut list2 = List::from(['a']);
    ///
    /// list1.prepend(&mut list2);
    ///
    /// assert_eq!(list1.to_vec(), vec!['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn prepend(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: `self.sentinel_node()` and `self.front_node()` are
            // valid adjacent nodes of this list.
            unsafe { self.attach_nodes(self.sentinel_node(), self.front_node(), detached) }
        }
    }

    /// Moves the entire contents of `other` to immediately before position
    /// `at`, preserving order. `other` is left empty and reusable.
    ///
    /// # Complexity
    ///
    /// The relinking is *O*(1); locating `at` is *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut other = List::from([4, 5, 6]);
    ///
    /// list.splice_at(2, &mut other);
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 5, 6, 3]);
    /// assert!(other.is_empty());
    /// ```
    pub fn splice_at(&mut self, at: usize, other: &mut Self) {
        assert!(at <= self.len, "cannot splice at a nonexistent position");
        if let Some(detached) = other.detach_all_nodes() {
            let next = self.node_at(at);
            // SAFETY: `next.prev` and `next` are valid adjacent nodes of this
            // list.
            unsafe { self.attach_nodes(next.as_ref().prev, next, detached) }
        }
    }

    /// Moves the single node at index `from` of `other` to immediately
    /// before position `at` of this list.
    ///
    /// The node is relinked, not copied; a reference taken to the element
    /// before the move would still denote the same value afterwards.
    ///
    /// # Panics
    ///
    /// Panics if `at > len` or `from >= other.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 4]);
    /// let mut other = List::from([8, 9]);
    ///
    /// list.splice_one(1, &mut other, 1);
    ///
    /// assert_eq!(list.to_vec(), vec![1, 9, 4]);
    /// assert_eq!(other.to_vec(), vec![8]);
    /// ```
    pub fn splice_one(&mut self, at: usize, other: &mut Self, from: usize) {
        assert!(
            from < other.len,
            "cannot splice a node from outside of the list bounds"
        );
        self.splice_range(at, other, from..from + 1);
    }

    /// Moves the half-open range `range` of `other` to immediately before
    /// position `at` of this list, preserving relative order.
    ///
    /// # Complexity
    ///
    /// The relinking is *O*(1); locating the positions is *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if `at > len`, or if `range` is inverted or out of bounds for
    /// `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// let mut other = List::from([10, 11, 12, 13]);
    ///
    /// list.splice_range(1, &mut other, 1..3);
    ///
    /// assert_eq!(list.to_vec(), vec![0, 11, 12, 1, 2]);
    /// assert_eq!(other.to_vec(), vec![10, 13]);
    /// ```
    pub fn splice_range(&mut self, at: usize, other: &mut Self, range: Range<usize>) {
        assert!(at <= self.len, "cannot splice at a nonexistent position");
        assert!(range.start <= range.end, "splice range is inverted");
        assert!(range.end <= other.len, "splice range end is out of bounds");
        if range.start == range.end {
            return;
        }
        let front = other.node_at(range.start);
        let back = other.node_at(range.end - 1);
        // SAFETY: `front..=back` is a valid closed range of `other` of
        // exactly `range.len()` nodes.
        let detached = unsafe { other.detach_nodes(front, back, range.end - range.start) };
        let next = self.node_at(at);
        // SAFETY: `next.prev` and `next` are valid adjacent nodes of this
        // list.
        unsafe { self.attach_nodes(next.as_ref().prev, next, detached) }
    }

    /// Moves the half-open range `range` to immediately before position `at`
    /// within the same list, preserving relative order.
    ///
    /// Positions are interpreted against the list before the move. A
    /// destination inside the moved range would tear the chain, so it is
    /// rejected with [`Error::SpliceOverlap`]; `at == range.end` is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`, or if `range` is inverted or out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::{Error, List};
    ///
    /// let mut list = List::from([0, 1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(list.move_range(5, 1..3), Ok(()));
    /// assert_eq!(list.to_vec(), vec![0, 3, 4, 1, 2, 5]);
    ///
    /// assert_eq!(list.move_range(2, 1..4), Err(Error::SpliceOverlap));
    /// ```
    pub fn move_range(&mut self, at: usize, range: Range<usize>) -> Result<(), Error> {
        assert!(at <= self.len, "cannot splice at a nonexistent position");
        assert!(range.start <= range.end, "splice range is inverted");
        assert!(range.end <= self.len, "splice range end is out of bounds");
        if range.contains(&at) {
            return Err(Error::SpliceOverlap);
        }
        if range.start == range.end || at == range.end {
            return Ok(());
        }
        // The destination node is outside `range`, so its address survives
        // the detach below.
        let next = self.node_at(at);
        let front = self.node_at(range.start);
        let back = self.node_at(range.end - 1);
        // SAFETY: `front..=back` is a valid closed range not containing
        // `next`, and after detaching, `next.prev` and `next` are adjacent.
        unsafe {
            let detached = self.detach_nodes(front, back, range.end - range.start);
            self.attach_nodes(next.as_ref().prev, next, detached);
        }
        Ok(())
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

impl<T> Node<T> {
    /// Create a detached node with the given element. Its links dangle until
    /// the node is attached.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }

    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

impl<T> DetachedNodes<T> {
    /// It is unsafe because it must be guaranteed that `front..=back` is a
    /// valid range whose length equals `len`.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>, len: usize) -> Self {
        debug_assert!(len > 0, "cannot detach nodes of length 0");
        Self {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }

    /// Free every node of the fragment, dropping the elements in order.
    pub(crate) fn drop_all(self) {
        let mut node = self.front;
        loop {
            let last = node == self.back;
            // SAFETY: each node of the fragment was allocated by `Box::new`
            // and is owned exclusively by the fragment.
            let boxed = unsafe { Box::from_raw(node.as_ptr()) };
            let next = boxed.next;
            drop(boxed);
            if last {
                break;
            }
            node = next;
        }
    }
}

fn new_sentinel() -> Box<Node<Sentinel>> {
    let mut sentinel = Box::new(Node {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        element: Sentinel,
    });
    let ptr = NonNull::from(sentinel.as_mut());
    sentinel.next = ptr;
    sentinel.prev = ptr;
    sentinel
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type
// parameters.
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
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the whole cycle and check link consistency, cycle closure, the
    /// cached length and the empty-state self-links.
    pub(crate) fn assert_invariants(&self) {
        let sentinel = self.sentinel_node();
        let mut count = 0;
        let mut node = sentinel;
        loop {
            let next = unsafe { node.as_ref().next };
            assert_eq!(unsafe { next.as_ref().prev }, node);
            node = next;
            if node == sentinel {
                break;
            }
            count += 1;
        }
        assert_eq!(count, self.len);
        if self.len == 0 {
            assert_eq!(self.front_node(), sentinel);
            assert_eq!(self.back_node(), sentinel);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        list.assert_invariants();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);

        // Range erasure must free exactly the erased nodes.
        dropped.borrow_mut().clear();
        let mut list = List::new();
        for i in 0..5 {
            list.push_back(DropChecker::new(i, &dropped));
        }
        list.erase_range(1..4);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
        list.assert_invariants();
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        list.assert_invariants();
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.assert_invariants();
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list: List<_> = (0..10).collect();
        list.insert(5, 10);
        assert_eq!(
            list.to_vec(),
            (0..5).chain(Some(10)).chain(5..10).collect::<Vec<_>>()
        );
        list.assert_invariants();

        assert_eq!(list.remove(10), 9);
        assert_eq!(list.back(), Some(&8));

        list.insert(0, 11);
        assert_eq!(list.front(), Some(&11));
        assert_eq!(list.remove(0), 11);
        assert_eq!(list.front(), Some(&0));

        list.insert(10, 12);
        assert_eq!(list.back(), Some(&12));
        list.assert_invariants();
    }

    #[test]
    fn list_filled_and_assign() {
        let list = List::filled(4, 'x');
        assert_eq!(list.to_vec(), vec!['x'; 4]);

        let mut list = List::from([1, 2, 3]);
        list.assign_repeat(2, 9);
        assert_eq!(list.to_vec(), vec![9, 9]);
        list.assert_invariants();

        list.assign(0..5);
        assert_eq!(list.to_vec(), (0..5).collect::<Vec<_>>());

        list.assign(std::iter::empty());
        assert!(list.is_empty());
        list.assert_invariants();

        let empty = List::<i32>::filled(0, 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn list_resize() {
        let mut list = List::from([1, 2, 3]);
        list.resize(5, 0);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 0, 0]);
        list.resize(2, 7);
        assert_eq!(list.to_vec(), vec![1, 2]);
        list.resize(2, 7);
        assert_eq!(list.to_vec(), vec![1, 2]);
        list.assert_invariants();

        let mut list: List<i32> = List::new();
        list.resize_default(3);
        assert_eq!(list.to_vec(), vec![0, 0, 0]);
        list.resize_default(0);
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    fn list_erase_range() {
        let mut list: List<_> = (0..6).collect();
        list.erase_range(1..3);
        assert_eq!(list.to_vec(), vec![0, 3, 4, 5]);
        list.assert_invariants();

        // Empty range is a no-op, including at the one-past-the-end bound.
        let len = list.len();
        list.erase_range(2..2);
        list.erase_range(len..len);
        assert_eq!(list.to_vec(), vec![0, 3, 4, 5]);

        // The end of the range may be the one-past-the-end position.
        list.erase_range(2..len);
        assert_eq!(list.to_vec(), vec![0, 3]);

        let len = list.len();
        list.erase_range(0..len);
        assert!(list.is_empty());
        list.assert_invariants();
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn list_erase_range_out_of_bounds() {
        let mut list: List<_> = (0..3).collect();
        list.erase_range(1..4);
    }

    #[test]
    fn list_append_and_prepend() {
        let mut list: List<_> = (0..3).collect();
        let mut other: List<_> = (3..5).collect();
        list.append(&mut other);
        assert_eq!(list.to_vec(), (0..5).collect::<Vec<_>>());
        assert!(other.is_empty());
        assert_eq!(list.len(), 5);
        list.assert_invariants();
        other.assert_invariants();

        // The emptied donor is still usable.
        other.push_back(9);
        assert_eq!(other.to_vec(), vec![9]);

        let mut front: List<_> = (10..12).collect();
        list.prepend(&mut front);
        assert_eq!(list.to_vec(), (10..12).chain(0..5).collect::<Vec<_>>());
        assert!(front.is_empty());

        let mut empty = List::new();
        list.append(&mut empty);
        list.prepend(&mut empty);
        assert_eq!(list.len(), 7);
        list.assert_invariants();
    }

    #[test]
    fn list_splice_at() {
        fn check(list: Vec<i32>, other: Vec<i32>, at: usize, expected: Vec<i32>) {
            let mut list: List<_> = list.into_iter().collect();
            let mut other: List<_> = other.into_iter().collect();
            let expected_len = list.len() + other.len();
            list.splice_at(at, &mut other);
            assert_eq!(list.to_vec(), expected);
            assert_eq!(list.len(), expected_len);
            assert!(other.is_empty());
            list.assert_invariants();
            other.assert_invariants();
        }
        check(vec![0, 1, 2], vec![5, 6], 3, vec![0, 1, 2, 5, 6]);
        check(vec![0, 1, 2], vec![5, 6], 1, vec![0, 5, 6, 1, 2]);
        check(vec![0, 1, 2], vec![5, 6], 0, vec![5, 6, 0, 1, 2]);
        check(vec![], vec![5, 6], 0, vec![5, 6]);
        check(vec![0, 1], vec![], 1, vec![0, 1]);
        check(vec![], vec![], 0, vec![]);

        let mut x = List::from(['a', 'b', 'c']);
        let mut y = List::from(['d', 'e']);
        x.splice_at(1, &mut y);
        assert_eq!(x.to_vec(), vec!['a', 'd', 'e', 'b', 'c']);
        assert!(y.is_empty());
    }

    #[test]
    fn list_splice_preserves_node_addresses() {
        let mut list: List<Box<i32>> = (0..3).map(Box::new).collect();
        let mut other: List<Box<i32>> = (10..13).map(Box::new).collect();
        let addresses: Vec<*const i32> = other.iter().map(|b| b.as_ref() as *const i32).collect();

        list.splice_at(1, &mut other);

        let moved: Vec<*const i32> = list
            .iter()
            .skip(1)
            .take(3)
            .map(|b| b.as_ref() as *const i32)
            .collect();
        assert_eq!(addresses, moved);
        list.assert_invariants();
    }

    #[test]
    fn list_splice_one_and_range() {
        let mut list = List::from([0, 1, 2]);
        let mut other = List::from([10, 11, 12, 13]);

        list.splice_one(1, &mut other, 2);
        assert_eq!(list.to_vec(), vec![0, 12, 1, 2]);
        assert_eq!(other.to_vec(), vec![10, 11, 13]);
        list.assert_invariants();
        other.assert_invariants();

        list.splice_range(4, &mut other, 0..2);
        assert_eq!(list.to_vec(), vec![0, 12, 1, 2, 10, 11]);
        assert_eq!(other.to_vec(), vec![13]);

        // Empty range moves nothing.
        list.splice_range(0, &mut other, 1..1);
        assert_eq!(other.to_vec(), vec![13]);
        list.assert_invariants();
        other.assert_invariants();
    }

    #[test]
    fn list_move_range() {
        use crate::Error;

        let mut list: List<_> = (0..6).collect();
        assert_eq!(list.move_range(5, 1..3), Ok(()));
        assert_eq!(list.to_vec(), vec![0, 3, 4, 1, 2, 5]);
        list.assert_invariants();

        // Move towards the front.
        let mut list: List<_> = (0..6).collect();
        assert_eq!(list.move_range(0, 4..6), Ok(()));
        assert_eq!(list.to_vec(), vec![4, 5, 0, 1, 2, 3]);
        list.assert_invariants();

        // `at == range.end` leaves every element in place.
        let mut list: List<_> = (0..4).collect();
        assert_eq!(list.move_range(3, 1..3), Ok(()));
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);

        // A destination inside the moved range is rejected.
        let mut list: List<_> = (0..6).collect();
        assert_eq!(list.move_range(2, 1..4), Err(Error::SpliceOverlap));
        assert_eq!(list.move_range(1, 1..4), Err(Error::SpliceOverlap));
        assert_eq!(list.to_vec(), (0..6).collect::<Vec<_>>());
        list.assert_invariants();
    }

    #[test]
    fn list_swap_whole_lists() {
        // The boxed sentinel keeps its address, so swapping two lists by
        // value cannot break the empty-state self-links.
        let mut a: List<i32> = List::new();
        let mut b: List<_> = (0..3).collect();
        std::mem::swap(&mut a, &mut b);
        a.assert_invariants();
        b.assert_invariants();
        assert_eq!(a.to_vec(), vec![0, 1, 2]);
        assert!(b.is_empty());
        b.push_back(7);
        assert_eq!(b.to_vec(), vec![7]);
        b.assert_invariants();
    }

    #[test]
    fn list_invariants_after_operation_sequences() {
        let mut list = List::new();
        for i in 0..8 {
            if i % 2 == 0 {
                list.push_back(i);
            } else {
                list.push_front(i);
            }
            list.assert_invariants();
        }
        list.insert(3, 100);
        list.assert_invariants();
        list.remove(5);
        list.assert_invariants();
        list.erase_range(2..5);
        list.assert_invariants();
        list.clear();
        list.assert_invariants();
        assert!(list.is_empty());
    }
}
