use crate::list::{connect, List};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
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

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Overwrite the existing nodes in place, then grow or shrink to match
    /// the length of `other`.
    fn clone_from(&mut self, other: &Self) {
        let mut cursor = self.cursor_start_mut();
        for elem_other in other.iter() {
            match cursor.current_mut() {
                Some(elem) => {
                    elem.clone_from(elem_other);
                    cursor.move_next_cyclic();
                }
                None => cursor.insert(elem_other.clone()),
            }
        }
        while cursor.try_remove().is_ok() {}
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

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
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

    /// Remove every element equal to the given value, and return the number
    /// of removed elements.
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
    /// let mut list = List::from([1, 2, 1, 3, 1]);
    /// assert_eq!(list.remove_all(&1), 3);
    /// assert_eq!(list.to_vec(), vec![2, 3]);
    /// assert_eq!(list.remove_all(&1), 0);
    /// ```
    pub fn remove_all(&mut self, x: &T) -> usize
    where
        T: PartialEq<T>,
    {
        let mut removed = 0;
        let mut cursor = self.cursor_start_mut();
        while !cursor.at_sentinel() {
            if cursor.current() == Some(x) {
                cursor.remove();
                removed += 1;
            } else {
                cursor.move_next_cyclic();
            }
        }
        removed
    }

    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*²) time and *O*(1) memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm performs repeated adjacent-pair passes and
    /// relinks out-of-order neighbors, until a pass performs no swap. Only
    /// strictly-less pairs swap, so equal elements keep their order. No
    /// element is moved or copied, only nodes are relinked.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// let mut list = List::from([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        bubble_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// For example, while [`f64`] doesn't implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function
    /// when we know the list doesn't contain a `NaN`.
    /// ```
    /// use cursor_list::List;
    /// let mut floats = List::from([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(floats.into_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*²) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(v.to_vec(), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        bubble_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m* \* *n*²) time and *O*(1)
    /// memory, where the key function is *O*(*m*).
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    /// let mut v = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(v.into_vec(), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        bubble_sort(self, |a, b| f(a).lt(&f(b)));
    }

    /// Merge `other` into the list, assuming both are sorted ascending.
    /// After merging, the list is sorted ascending and `other` is empty.
    ///
    /// If either list is not sorted, the result is an unspecified order
    /// (but the list still contains every element of both inputs).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time and *O*(1)
    /// memory. Nodes are relinked, never copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 3, 5]);
    /// let mut other = List::from([2, 4, 6]);
    ///
    /// list.merge(&mut other);
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, |a, b| a.lt(b));
    }

    /// Merge `other` into the list with a comparison function, assuming
    /// both are sorted ascending under the same relation.
    ///
    /// The merge is stable: for equal elements, the element of `self`
    /// comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([5, 3, 1]);
    /// let mut other = List::from([6, 4, 2]);
    ///
    /// list.merge_by(&mut other, |a, b| a > b);
    ///
    /// assert_eq!(list.to_vec(), vec![6, 5, 4, 3, 2, 1]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut Self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let sentinel = self.sentinel_node();
        let mut at = self.front_node();
        while !other.is_empty() {
            let candidate = other.front_node();
            // SAFETY: `candidate` is a non-sentinel node of `other`, and
            // `at` is either the sentinel or a node of `self`, so the reads
            // and relinks are valid.
            unsafe {
                if at == sentinel || less(&candidate.as_ref().element, &at.as_ref().element) {
                    let node = other.unlink_node(candidate);
                    self.attach_node(at.as_ref().prev, at, node);
                } else {
                    at = at.as_ref().next;
                }
            }
        }
    }

    /// Remove all but the first element of every run of consecutive equal
    /// elements.
    ///
    /// Only consecutive duplicates are removed; the operation is idempotent.
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
    /// let mut list = List::from([1, 1, 2, 2, 2, 3]);
    /// list.unique();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    ///
    /// // Non-adjacent duplicates survive.
    /// let mut list = List::from([1, 2, 1]);
    /// list.unique();
    /// assert_eq!(list.to_vec(), vec![1, 2, 1]);
    /// ```
    pub fn unique(&mut self)
    where
        T: PartialEq<T>,
    {
        let sentinel = self.sentinel_node();
        let mut node = self.front_node();
        if node == sentinel {
            return;
        }
        unsafe {
            loop {
                let next = node.as_ref().next;
                if next == sentinel {
                    break;
                }
                if next.as_ref().element == node.as_ref().element {
                    // SAFETY: `next` is a non-sentinel node of this list.
                    drop(self.detach_node(next));
                } else {
                    node = next;
                }
            }
        }
    }

    /// Reverse the order of the elements.
    ///
    /// Two cursors walk inwards from the ends, swapping element values,
    /// until they meet or cross. Lists of length 0 or 1 are left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cursor_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    /// list.reverse();
    /// assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut left = self.front_node();
        let mut right = self.back_node();
        // SAFETY: `left` and `right` walk inwards over non-sentinel nodes
        // and stop before crossing, so they always reference distinct valid
        // elements when swapped.
        unsafe {
            loop {
                std::mem::swap(
                    &mut (*left.as_ptr()).element,
                    &mut (*right.as_ptr()).element,
                );
                left = left.as_ref().next;
                if left == right {
                    break;
                }
                right = right.as_ref().prev;
                if left == right {
                    break;
                }
            }
        }
    }
}

/// Repeated adjacent-pair passes over the whole list, relinking out-of-order
/// neighbors, until a pass performs no swap.
fn bubble_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.len() < 2 {
        return;
    }
    let sentinel = list.sentinel_node();
    let mut swapped = true;
    while swapped {
        swapped = false;
        let mut node = list.front_node();
        // SAFETY: `node` and `next` are adjacent non-sentinel nodes of the
        // list; the relink sequence below turns `p, node, next, q` into
        // `p, next, node, q` without ever leaving the chain torn between
        // comparisons.
        unsafe {
            while node.as_ref().next != sentinel {
                let next = node.as_ref().next;
                if less(&next.as_ref().element, &node.as_ref().element) {
                    connect(node, next.as_ref().next);
                    connect(node.as_ref().prev, next);
                    connect(next, node);
                    swapped = true;
                } else {
                    node = next;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;

    #[test]
    fn sort_unsorted_input() {
        let input = vec![
            17, 3, 25, 1, 9, 40, 2, 33, 5, 12, 7, 28, 0, 19, 4, 21, 8, 36, 11,
        ];
        let mut list: List<_> = input.iter().copied().collect();
        list.sort();
        let mut expected = input;
        expected.sort();
        assert_eq!(list.to_vec(), expected);
        list.assert_invariants();
    }

    #[test]
    fn sort_edge_cases() {
        let mut list: List<i32> = List::new();
        list.sort();
        assert!(list.is_empty());

        let mut list = List::from([1]);
        list.sort();
        assert_eq!(list.to_vec(), vec![1]);

        // Already sorted input terminates after one pass.
        let mut list: List<_> = (0..10).collect();
        list.sort();
        assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());

        // Reversed input, the worst case.
        let mut list: List<_> = (0..10).rev().collect();
        list.sort();
        assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());
        list.assert_invariants();
    }

    #[test]
    fn sort_is_stable() {
        // Pairs of (key, sequence number); equal keys must keep their
        // original relative order.
        let input = vec![(2, 0), (1, 1), (2, 2), (1, 3), (0, 4), (2, 5)];
        let mut list: List<_> = input.clone().into_iter().collect();
        list.sort_by(|a, b| a.0.cmp(&b.0));
        let mut expected = input;
        expected.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(list.to_vec(), expected);
    }

    #[test]
    fn sort_relinks_nodes() {
        // Sorting must relink nodes, not move element values.
        let mut list: List<Box<i32>> = [3, 1, 2].iter().map(|&v| Box::new(v)).collect();
        let mut addresses: Vec<(i32, *const i32)> = list
            .iter()
            .map(|b| (**b, b.as_ref() as *const i32))
            .collect();
        addresses.sort_by_key(|&(v, _)| v);

        list.sort();

        let sorted: Vec<(i32, *const i32)> = list
            .iter()
            .map(|b| (**b, b.as_ref() as *const i32))
            .collect();
        assert_eq!(addresses, sorted);
    }

    #[test]
    fn merge_sorted_lists() {
        let mut list = List::from([1, 2, 3]);
        let mut other = List::from([6, 7, 8, 9]);
        list.merge(&mut other);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 6, 7, 8, 9]);
        assert!(other.is_empty());
        list.assert_invariants();
        other.assert_invariants();

        // The emptied donor is still usable.
        other.push_back(0);
        assert_eq!(other.to_vec(), vec![0]);

        let mut list = List::from([2, 4, 6]);
        let mut other = List::from([1, 3, 5, 7]);
        list.merge(&mut other);
        assert_eq!(list.to_vec(), (1..8).collect::<Vec<_>>());
        assert!(other.is_empty());
    }

    #[test]
    fn merge_edge_cases() {
        let mut list: List<i32> = List::new();
        let mut other = List::from([1, 2]);
        list.merge(&mut other);
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert!(other.is_empty());

        let mut empty = List::new();
        list.merge(&mut empty);
        assert_eq!(list.to_vec(), vec![1, 2]);
        list.assert_invariants();
    }

    #[test]
    fn merge_is_stable() {
        // On ties, elements already in the list come first.
        let mut list: List<_> = vec![(1, "a"), (2, "a")].into_iter().collect();
        let mut other: List<_> = vec![(1, "b"), (2, "b")].into_iter().collect();
        list.merge_by(&mut other, |a, b| a.0 < b.0);
        assert_eq!(
            list.to_vec(),
            vec![(1, "a"), (1, "b"), (2, "a"), (2, "b")]
        );
    }

    #[test]
    fn unique_removes_consecutive_runs() {
        let mut list = List::from([1, 1, 2, 2, 2, 3]);
        list.unique();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        list.assert_invariants();

        // Idempotent.
        list.unique();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);

        // Only consecutive duplicates are removed.
        let mut list = List::from([1, 2, 1, 1, 2]);
        list.unique();
        assert_eq!(list.to_vec(), vec![1, 2, 1, 2]);

        let mut empty: List<i32> = List::new();
        empty.unique();
        assert!(empty.is_empty());

        let mut all_same = List::from([7, 7, 7, 7]);
        all_same.unique();
        assert_eq!(all_same.to_vec(), vec![7]);
        all_same.assert_invariants();
    }

    #[test]
    fn reverse_swaps_values() {
        let mut list: List<_> = (0..6).collect();
        list.reverse();
        assert_eq!(list.to_vec(), (0..6).rev().collect::<Vec<_>>());
        list.assert_invariants();

        // Involution: reversing twice restores the input.
        list.reverse();
        assert_eq!(list.to_vec(), (0..6).collect::<Vec<_>>());

        // Odd length.
        let mut list: List<_> = (0..5).collect();
        list.reverse();
        assert_eq!(list.to_vec(), (0..5).rev().collect::<Vec<_>>());

        // Length 0 and 1 are untouched.
        let mut empty: List<i32> = List::new();
        empty.reverse();
        assert!(empty.is_empty());
        let mut single = List::from([1]);
        single.reverse();
        assert_eq!(single.to_vec(), vec![1]);
    }

    #[test]
    fn clone_and_clone_from() {
        let list: List<_> = (0..5).collect();
        let cloned = list.clone();
        assert_eq!(list, cloned);

        // clone_from shrinks a longer destination.
        let mut longer: List<_> = (0..10).collect();
        longer.clone_from(&list);
        assert_eq!(longer, list);
        longer.assert_invariants();

        // clone_from grows a shorter destination.
        let mut shorter: List<_> = (0..2).collect();
        shorter.clone_from(&list);
        assert_eq!(shorter, list);
        shorter.assert_invariants();

        // clone_from empties when the source is empty.
        let empty: List<i32> = List::new();
        let mut full: List<_> = (0..3).collect();
        full.clone_from(&empty);
        assert!(full.is_empty());
        full.assert_invariants();
    }

    #[test]
    fn comparison_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a: List<_> = (0..3).collect();
        let b: List<_> = (0..3).collect();
        let c: List<_> = (0..4).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn contains_and_remove_all() {
        let mut list = List::from([1, 2, 1, 3, 1]);
        assert!(list.contains(&3));
        assert!(!list.contains(&4));

        assert_eq!(list.remove_all(&1), 3);
        assert_eq!(list.to_vec(), vec![2, 3]);
        assert!(!list.contains(&1));
        list.assert_invariants();

        // Removing from the ends and a single-element list.
        let mut list = List::from([5]);
        assert_eq!(list.remove_all(&5), 1);
        assert!(list.is_empty());
        list.assert_invariants();
    }
}
