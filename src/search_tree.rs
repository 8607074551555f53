//! A threaded binary search tree that never restructures itself.

use core::borrow::Borrow;
use core::fmt;
use core::ops::RangeBounds;

use crate::augment::{Augment, Plain, SubtreeSize};
use crate::compare::{Compare, Natural};
use crate::iter::{Iter, Range};
use crate::position::Position;
use crate::raw::{RawTree, Unbalanced};

mod capacity;
mod order_statistic;

/// An ordered set of unique keys stored in a plain threaded binary search tree.
///
/// Keys are linked in wherever the search for them ends, and nothing is ever rotated, so the
/// height (and the cost of every operation) depends on insertion order: O(log n) for random
/// input, O(n) for sorted input. In exchange lookups are read-only and take `&self`.
///
/// This is the skeleton [`SplayTree`](crate::SplayTree) is built on: the same node graph,
/// threads, sentinel and positions, minus the splaying.
///
/// # Examples
///
/// ```
/// use splay_set::SearchTree;
///
/// let mut tree = SearchTree::new();
/// tree.extend([5, 2, 8, 1, 9]);
///
/// assert!(tree.contains(&8));
/// assert_eq!(tree.get(tree.lower_bound(&6)), Some(&8));
/// assert!(tree.upper_bound(&9).is_end());
///
/// tree.erase(&2);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 5, 8, 9]);
/// ```
pub struct SearchTree<K, C = Natural, A = Plain> {
    raw: RawTree<K, A>,
    cmp: C,
}

/// A [`SearchTree`] that caches subtree sizes and answers order-statistic queries.
pub type AugmentedSearchTree<K, C = Natural> = SearchTree<K, C, SubtreeSize>;

impl<K> SearchTree<K> {
    /// Makes a new, empty tree ordered by [`Ord`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawTree::new(),
            cmp: Natural,
        }
    }
}

impl<K, C, A> SearchTree<K, C, A> {
    /// Makes a new, empty tree ordered by `cmp`.
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        Self { raw: RawTree::new(), cmp }
    }

    /// Returns the comparator that orders the tree.
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of keys in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Exchanges the contents of two trees, comparators included, without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Gets an iterator that visits the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K, A> {
        Iter::new(&self.raw)
    }

    /// Returns the smallest key, if any. O(1).
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.raw.control().leftmost().map(|handle| self.raw.key(handle))
    }

    /// Returns the largest key, if any. O(1).
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.raw.control().rightmost().map(|handle| self.raw.key(handle))
    }

    /// Position of the smallest key, or [`Position::END`] if the tree is empty.
    #[must_use]
    pub fn begin(&self) -> Position {
        Position(self.raw.control().leftmost())
    }

    /// The past-the-end position.
    #[must_use]
    pub const fn end(&self) -> Position {
        Position::END
    }

    /// Reads the key at `position`; `None` at the end position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&K> {
        position.0.map(|handle| self.raw.key(handle))
    }

    /// Steps to the following position. The end position steps to [`begin`](Self::begin).
    #[must_use]
    pub fn next_position(&self, position: Position) -> Position {
        Position(self.raw.next_of(position.0))
    }

    /// Steps to the preceding position. The end position steps to the largest key.
    #[must_use]
    pub fn prev_position(&self, position: Position) -> Position {
        Position(self.raw.prev_of(position.0))
    }

    /// Writes the node graph in Graphviz dot format.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_dot<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        K: fmt::Display,
    {
        crate::dump::write_dot(&self.raw, out)
    }
}

impl<K, C: Compare<K>, A: Augment> SearchTree<K, C, A> {
    /// Adds a key to the tree.
    ///
    /// Returns the position of the key and whether it was newly inserted. If an equivalent key
    /// was already present the tree keeps it and drops `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// assert!(tree.insert(2).1);
    /// assert!(!tree.insert(2).1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, key: K) -> (Position, bool) {
        let (handle, inserted) = self.raw.insert::<Unbalanced, C>(key, &self.cmp);
        (Position(Some(handle)), inserted)
    }

    /// Removes the key at `position` and returns the position that followed it.
    ///
    /// # Panics
    ///
    /// Panics if `position` is the end position.
    pub fn erase_at(&mut self, position: Position) -> Position {
        let Some(handle) = position.0 else {
            panic!("`SearchTree::erase_at()` - `position` is the end position!");
        };
        Position(self.raw.erase::<Unbalanced>(handle).1)
    }

    /// Removes and returns the smallest key.
    pub fn pop_first(&mut self) -> Option<K> {
        let first = self.raw.control().leftmost()?;
        Some(self.raw.erase::<Unbalanced>(first).0)
    }

    /// Removes and returns the largest key.
    pub fn pop_last(&mut self) -> Option<K> {
        let last = self.raw.control().rightmost()?;
        Some(self.raw.erase::<Unbalanced>(last).0)
    }

    /// Checks every structural invariant and panics with a description of each violation.
    #[doc(hidden)]
    pub fn assert_invariants(&self)
    where
        A: PartialEq,
    {
        let errors = self.raw.check_invariants(&self.cmp);
        assert!(errors.is_empty(), "`SearchTree::assert_invariants()` - {errors:#?}");
    }
}

impl<K, C, A: Augment> SearchTree<K, C, A> {
    /// Finds the position of `key`, or the end position if it is absent.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form *must* match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn find<Q>(&self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        Position(self.raw.find(key, &self.cmp).hit)
    }

    /// Returns `true` if the tree holds a key equivalent to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.raw.find(key, &self.cmp).hit.is_some()
    }

    /// Returns the position of the smallest key not less than `key`, or the end position.
    pub fn lower_bound<Q>(&self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        Position(self.raw.lower_bound(key, &self.cmp).hit)
    }

    /// Returns the position of the smallest key greater than `key`, or the end position.
    pub fn upper_bound<Q>(&self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        Position(self.raw.upper_bound(key, &self.cmp).hit)
    }

    /// Removes the key equivalent to `key`, returning how many keys were removed (0 or 1).
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        usize::from(self.take(key).is_some())
    }

    /// Removes the key equivalent to `key`, returning whether one was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.take(key).is_some()
    }

    /// Removes and returns the stored key equivalent to `key`, if any.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let handle = self.raw.find(key, &self.cmp).hit?;
        Some(self.raw.erase::<Unbalanced>(handle).0)
    }

    /// Gets a double-ended iterator over the keys inside `range`, in ascending order. A range
    /// whose start lies after its end is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SearchTree;
    ///
    /// let tree: SearchTree<_> = SearchTree::from([1, 3, 5, 7, 9]);
    /// assert_eq!(tree.range(2..8).copied().collect::<Vec<_>>(), [3, 5, 7]);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Range<'_, K, A>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
        R: RangeBounds<Q>,
    {
        Range::new(&self.raw, self.raw.range_ends(&range, &self.cmp))
    }
}

impl_set_traits!(SearchTree);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SearchTree<i32>: Send, Sync, Clone, Default, core::fmt::Debug);

    fn keys<C, A>(tree: &SearchTree<i32, C, A>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn insert_erase_scenario() {
        let mut tree = SearchTree::new();
        for key in [5, 2, 8, 1, 9] {
            tree.insert(key);
        }
        assert_eq!(tree.erase(&2), 1);
        tree.assert_invariants();
        assert_eq!(keys(&tree), [1, 5, 8, 9]);
        assert!(tree.find(&2).is_end());
    }

    #[test]
    fn round_trip_through_positions() {
        let mut tree: SearchTree<_> = SearchTree::from([10, 30]);
        let (position, inserted) = tree.insert(20);
        assert!(inserted);
        assert_eq!(tree.find(&20), position);

        let next = tree.erase_at(position);
        assert_eq!(tree.get(next), Some(&30));
        assert!(tree.find(&20).is_end());
        tree.assert_invariants();
    }

    #[test]
    fn lookups_do_not_restructure() {
        let tree: SearchTree<_> = SearchTree::from([4, 2, 6]);
        let before = alloc::format!("{tree:?}");
        let mut dot_before = alloc::string::String::new();
        tree.write_dot(&mut dot_before).unwrap();

        let _ = tree.find(&6);
        let _ = tree.lower_bound(&5);

        let mut dot_after = alloc::string::String::new();
        tree.write_dot(&mut dot_after).unwrap();
        assert_eq!(dot_before, dot_after);
        assert_eq!(before, "{2, 4, 6}");
    }

    #[test]
    fn sorted_input_degenerates_into_a_path() {
        let mut tree: AugmentedSearchTree<_> = (0..2_000).collect();
        tree.assert_invariants();
        assert_eq!(tree.n_less_than(&1_000), 1_000);
        while tree.pop_last().is_some() {}
        assert!(tree.is_empty());
    }

    #[test]
    #[should_panic(expected = "`SearchTree::erase_at()` - `position` is the end position!")]
    fn erasing_end_panics() {
        let mut tree: SearchTree<i32> = SearchTree::new();
        tree.erase_at(Position::END);
    }

    #[test]
    fn lexicographic_order() {
        let a: SearchTree<_> = SearchTree::from([1, 2]);
        let b: SearchTree<_> = SearchTree::from([1, 2, 3]);
        let c: SearchTree<_> = SearchTree::from([1, 3]);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.cmp(&a.clone()), core::cmp::Ordering::Equal);
    }

    #[test]
    fn into_iter_moves_keys_out_in_order() {
        let tree: SearchTree<_> = SearchTree::from([3, 1, 2]);
        let owned: Vec<i32> = tree.into_iter().collect();
        assert_eq!(owned, [1, 2, 3]);
    }
}
