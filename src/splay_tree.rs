//! A self-adjusting ordered set.

use core::borrow::Borrow;
use core::fmt;
use core::ops::RangeBounds;

use crate::augment::{Augment, Plain, SubtreeSize};
use crate::compare::{Compare, Natural};
use crate::iter::{Iter, Range};
use crate::position::Position;
use crate::raw::{RawTree, Splay};

mod capacity;
mod join_split;
mod order_statistic;

/// An ordered set of unique keys stored in a threaded splay tree.
///
/// Every access rotates the node it touched to the root with the zig, zig-zig and zig-zag steps
/// of bottom-up splaying. Recently used keys therefore sit near the root, and any sequence of `m`
/// operations on a tree of at most `n` keys costs O(m log n) in total, although a single call may
/// take linear time.
///
/// Because lookups restructure the tree they take `&mut self`. Reading through positions,
/// iterators, [`first`](Self::first), [`last`](Self::last) and the rank queries based on cached
/// subtree sizes does not, and takes `&self`.
///
/// Empty child slots hold threads to the in-order neighbours, so stepping from one key to the
/// next needs neither a parent walk nor an auxiliary stack. A [`Position`] names a node and stays
/// valid across splays, inserts, erasure of other keys and joins onto this tree. Erasing its node
/// invalidates it, and so does moving its key to another tree by [`split`](Self::split) or by
/// joining this tree onto another.
///
/// The comparator `C` defaults to [`Natural`] (the [`Ord`] order). The augmentation `A`
/// defaults to [`Plain`]; with [`SubtreeSize`] (see [`AugmentedSplayTree`]) the tree also answers
/// rank queries in amortized O(log n).
///
/// It is a logic error for a key to be modified in such a way that its ordering relative to any
/// other key changes while it is in the tree. The behavior resulting from such a logic error is
/// not specified, but will be encapsulated to the tree that observed it and not result in
/// undefined behavior.
///
/// # Examples
///
/// ```
/// use splay_set::SplayTree;
///
/// let mut tree = SplayTree::new();
/// for key in [5, 2, 8, 1, 9] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.erase(&2), 1);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 5, 8, 9]);
/// assert!(tree.find(&2).is_end());
///
/// // The last key looked up now sits at the root.
/// tree.find(&8);
/// assert_eq!(tree.root(), Some(&8));
/// ```
pub struct SplayTree<K, C = Natural, A = Plain> {
    raw: RawTree<K, A>,
    cmp: C,
}

/// A [`SplayTree`] that caches subtree sizes and answers order-statistic queries.
pub type AugmentedSplayTree<K, C = Natural> = SplayTree<K, C, SubtreeSize>;

impl<K> SplayTree<K> {
    /// Makes a new, empty tree ordered by [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let mut tree: SplayTree<i32> = SplayTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawTree::new(),
            cmp: Natural,
        }
    }
}

impl<K, C, A> SplayTree<K, C, A> {
    /// Makes a new, empty tree ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::{Reversed, SplayTree};
    ///
    /// let mut tree: SplayTree<_, _> = SplayTree::with_comparator(Reversed);
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.first(), Some(&3));
    /// ```
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        Self { raw: RawTree::new(), cmp }
    }

    /// Returns the comparator that orders the tree.
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no keys.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every key.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Exchanges the contents of two trees, comparators included, without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Gets an iterator that visits the keys in ascending order.
    ///
    /// Iterating does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let tree: SplayTree<_> = SplayTree::from([3, 1, 2]);
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, A> {
        Iter::new(&self.raw)
    }

    /// Returns the smallest key, if any.
    ///
    /// # Complexity
    ///
    /// O(1), read from the sentinel's cache.
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.raw.control().leftmost().map(|handle| self.raw.key(handle))
    }

    /// Returns the largest key, if any.
    ///
    /// # Complexity
    ///
    /// O(1), read from the sentinel's cache.
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.raw.control().rightmost().map(|handle| self.raw.key(handle))
    }

    /// Returns the key at the root, that is the key touched by the most recent access.
    #[must_use]
    pub fn root(&self) -> Option<&K> {
        self.raw.control().root().map(|handle| self.raw.key(handle))
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
    ///
    /// # Panics
    ///
    /// May panic if `position` refers to an erased node.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&K> {
        position.0.map(|handle| self.raw.key(handle))
    }

    /// Steps to the following position. The end position steps to [`begin`](Self::begin).
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let tree: SplayTree<_> = SplayTree::from([1, 2]);
    /// let first = tree.begin();
    /// let second = tree.next_position(first);
    /// assert_eq!(tree.get(second), Some(&2));
    /// assert!(tree.next_position(second).is_end());
    /// assert_eq!(tree.next_position(tree.end()), first);
    /// ```
    #[must_use]
    pub fn next_position(&self, position: Position) -> Position {
        Position(self.raw.next_of(position.0))
    }

    /// Steps to the preceding position. The end position steps to the largest key, and the
    /// smallest key steps to the end position.
    #[must_use]
    pub fn prev_position(&self, position: Position) -> Position {
        Position(self.raw.prev_of(position.0))
    }

    /// Writes the node graph in Graphviz dot format. Does not splay.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let tree: SplayTree<_> = SplayTree::from([1, 2, 3]);
    /// let mut dot = String::new();
    /// tree.write_dot(&mut dot).unwrap();
    /// assert!(dot.starts_with("digraph Tree"));
    /// ```
    pub fn write_dot<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        K: fmt::Display,
    {
        crate::dump::write_dot(&self.raw, out)
    }
}

impl<K, C: Compare<K>, A: Augment> SplayTree<K, C, A> {
    /// Adds a key to the tree and splays its node to the root.
    ///
    /// Returns the position of the key and whether it was newly inserted. If an equivalent key
    /// was already present the tree keeps it, drops `key`, and splays the existing node instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// let (position, inserted) = tree.insert(7);
    /// assert!(inserted);
    /// assert_eq!(tree.insert(7), (position, false));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn insert(&mut self, key: K) -> (Position, bool) {
        let (handle, inserted) = self.raw.insert::<Splay, C>(key, &self.cmp);
        (Position(Some(handle)), inserted)
    }

    /// Removes the key at `position` and returns the position that followed it.
    ///
    /// The removed node is splayed to the root and the two subtrees it leaves behind are joined
    /// under the maximum of the left one.
    ///
    /// # Panics
    ///
    /// Panics if `position` is the end position. May panic if it refers to an erased node.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let mut tree: SplayTree<_> = SplayTree::from([1, 2, 3]);
    /// let two = tree.find(&2);
    /// let next = tree.erase_at(two);
    /// assert_eq!(tree.get(next), Some(&3));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn erase_at(&mut self, position: Position) -> Position {
        let Some(handle) = position.0 else {
            panic!("`SplayTree::erase_at()` - `position` is the end position!");
        };
        Position(self.raw.erase::<Splay>(handle).1)
    }

    /// Removes and returns the smallest key.
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn pop_first(&mut self) -> Option<K> {
        let first = self.raw.control().leftmost()?;
        Some(self.raw.erase::<Splay>(first).0)
    }

    /// Removes and returns the largest key.
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn pop_last(&mut self) -> Option<K> {
        let last = self.raw.control().rightmost()?;
        Some(self.raw.erase::<Splay>(last).0)
    }

    /// Checks every structural invariant and panics with a description of each violation.
    #[doc(hidden)]
    pub fn assert_invariants(&self)
    where
        A: PartialEq,
    {
        let errors = self.raw.check_invariants(&self.cmp);
        assert!(errors.is_empty(), "`SplayTree::assert_invariants()` - {errors:#?}");
    }
}

impl<K, C, A: Augment> SplayTree<K, C, A> {
    /// Finds `key`, splaying its node to the root.
    ///
    /// On a miss the last node visited by the search is splayed instead and the end position is
    /// returned.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let mut tree: SplayTree<_> = SplayTree::from([10, 20, 30]);
    /// let position = tree.find(&20);
    /// assert_eq!(tree.get(position), Some(&20));
    /// assert_eq!(tree.root(), Some(&20));
    /// assert!(tree.find(&25).is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn find<Q>(&mut self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let descent = self.raw.find(key, &self.cmp);
        Position(self.raw.settle::<Splay>(descent))
    }

    /// Returns `true` if the tree holds a key equivalent to `key`. Splays like [`find`](Self::find).
    pub fn contains<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        !self.find(key).is_end()
    }

    /// Returns the position of the smallest key not less than `key`, or the end position.
    ///
    /// The node found (or, if every key is less, the last node visited) is splayed to the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let mut tree: SplayTree<_> = SplayTree::from([10, 20, 30]);
    /// let position = tree.lower_bound(&15);
    /// assert_eq!(tree.get(position), Some(&20));
    /// assert!(tree.lower_bound(&31).is_end());
    /// ```
    pub fn lower_bound<Q>(&mut self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let descent = self.raw.lower_bound(key, &self.cmp);
        Position(self.raw.settle::<Splay>(descent))
    }

    /// Returns the position of the smallest key greater than `key`, or the end position.
    ///
    /// Splays like [`lower_bound`](Self::lower_bound).
    pub fn upper_bound<Q>(&mut self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let descent = self.raw.upper_bound(key, &self.cmp);
        Position(self.raw.settle::<Splay>(descent))
    }

    /// Removes the key equivalent to `key`, returning how many keys were removed (0 or 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let mut tree: SplayTree<_> = SplayTree::from([1, 2]);
    /// assert_eq!(tree.erase(&2), 1);
    /// assert_eq!(tree.erase(&2), 0);
    /// ```
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
        let handle = self.find(key).0?;
        Some(self.raw.erase::<Splay>(handle).0)
    }

    /// Gets a double-ended iterator over the keys inside `range`, in ascending order.
    ///
    /// The ends of the range are located without splaying. A range whose start lies after its
    /// end is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let tree: SplayTree<_> = SplayTree::from([1, 3, 5, 7, 9]);
    /// assert_eq!(tree.range(3..=7).copied().collect::<Vec<_>>(), [3, 5, 7]);
    /// assert_eq!(tree.range(4..).rev().copied().collect::<Vec<_>>(), [9, 7, 5]);
    /// assert_eq!(tree.range(..0).next(), None);
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

impl_set_traits!(SplayTree);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::compare::Reversed;
    use alloc::string::String;
    use alloc::vec::Vec;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SplayTree<i32>: Send, Sync, Clone, Default, core::fmt::Debug);

    fn keys<C, A>(tree: &SplayTree<i32, C, A>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn insert_then_erase_scenario() {
        let mut tree = SplayTree::new();
        for key in [5, 2, 8, 1, 9] {
            tree.insert(key);
            tree.assert_invariants();
        }

        assert_eq!(tree.erase(&2), 1);
        tree.assert_invariants();
        assert_eq!(keys(&tree), [1, 5, 8, 9]);
        assert_eq!(tree.len(), 4);
        assert!(tree.find(&2).is_end());
    }

    #[test]
    fn every_lookup_splays() {
        let mut tree: SplayTree<_> = (0..32).collect();
        for key in [0, 31, 16, 7, 24] {
            let position = tree.find(&key);
            assert_eq!(tree.get(position), Some(&key));
            assert_eq!(tree.root(), Some(&key));
            tree.assert_invariants();
        }

        tree.lower_bound(&10);
        assert_eq!(tree.root(), Some(&10));
        tree.upper_bound(&10);
        assert_eq!(tree.root(), Some(&11));
    }

    #[test]
    fn miss_on_empty_tree_is_a_no_op() {
        let mut tree: SplayTree<i32> = SplayTree::new();
        assert!(tree.find(&1).is_end());
        assert!(tree.lower_bound(&1).is_end());
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn positions_survive_splays() {
        let mut tree: SplayTree<_> = SplayTree::from([1, 2, 3, 4]);
        let three = tree.find(&3);
        tree.find(&1);
        tree.find(&4);
        assert_eq!(tree.get(three), Some(&3));
        assert_eq!(tree.get(tree.prev_position(three)), Some(&2));
    }

    #[test]
    fn position_walk_matches_iteration() {
        let tree: SplayTree<_> = SplayTree::from([4, 2, 6, 1]);
        let mut forward = Vec::new();
        let mut position = tree.begin();
        while let Some(&key) = tree.get(position) {
            forward.push(key);
            position = tree.next_position(position);
        }
        assert_eq!(forward, [1, 2, 4, 6]);

        let mut backward = Vec::new();
        let mut position = tree.prev_position(tree.end());
        while let Some(&key) = tree.get(position) {
            backward.push(key);
            position = tree.prev_position(position);
        }
        assert_eq!(backward, [6, 4, 2, 1]);
    }

    #[test]
    #[should_panic(expected = "`SplayTree::erase_at()` - `position` is the end position!")]
    fn erasing_end_panics() {
        let mut tree: SplayTree<_> = SplayTree::from([1]);
        let end = tree.end();
        tree.erase_at(end);
    }

    #[test]
    fn pops_from_both_ends() {
        let mut tree: SplayTree<_> = SplayTree::from([3, 1, 2]);
        assert_eq!(tree.pop_first(), Some(1));
        assert_eq!(tree.pop_last(), Some(3));
        assert_eq!(tree.pop_last(), Some(2));
        assert_eq!(tree.pop_first(), None);
        tree.assert_invariants();
    }

    #[test]
    fn reversed_order() {
        let mut tree: SplayTree<_, _> = SplayTree::with_comparator(Reversed);
        tree.extend([1, 5, 3]);
        assert_eq!(keys(&tree), [5, 3, 1]);
        assert_eq!(tree.first(), Some(&5));
        assert_eq!(tree.range(4..=1).copied().collect::<Vec<_>>(), [3, 1]);
        tree.assert_invariants();
    }

    #[test]
    fn borrowed_lookups() {
        let mut tree: SplayTree<String> = SplayTree::new();
        tree.insert(String::from("pear"));
        tree.insert(String::from("apple"));
        assert!(tree.contains("pear"));
        assert_eq!(tree.take("apple"), Some(String::from("apple")));
        assert!(!tree.remove("apple"));
    }

    #[test]
    fn ranges() {
        let tree: SplayTree<_> = (1..=9).collect();
        assert_eq!(tree.range(3..6).copied().collect::<Vec<_>>(), [3, 4, 5]);
        assert_eq!(tree.range(5..5).count(), 0);
        assert_eq!(tree.range(7..3).count(), 0);
        assert_eq!(tree.range(..).count(), 9);
        assert_eq!(tree.range(10..).count(), 0);
        let mut range = tree.range(4..=6);
        assert_eq!(range.next_back(), Some(&6));
        assert_eq!(range.next(), Some(&4));
        assert_eq!(range.next_back(), Some(&5));
        assert_eq!(range.next(), None);
        assert_eq!(range.next_back(), None);
    }

    #[test]
    fn equality_ignores_shape() {
        let mut a: SplayTree<_> = SplayTree::from([1, 2, 3]);
        let b: SplayTree<_> = SplayTree::from([3, 2, 1]);
        a.find(&1);
        assert_eq!(a, b);

        let c: SplayTree<_> = SplayTree::from([1, 2, 4]);
        assert!(a < c);
        assert!(SplayTree::<i32>::new() < a);
    }

    #[test]
    fn clone_is_deep() {
        let mut original: SplayTree<_> = (0..10).collect();
        let copy = original.clone();
        original.clear();
        copy.assert_invariants();
        assert_eq!(copy.len(), 10);
        assert!(original.is_empty());
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a: SplayTree<_> = SplayTree::from([1]);
        let mut b: SplayTree<_> = SplayTree::from([2, 3]);
        a.swap(&mut b);
        assert_eq!(keys(&a), [2, 3]);
        assert_eq!(keys(&b), [1]);
    }

    #[test]
    fn debug_prints_as_a_set() {
        let tree: SplayTree<_> = SplayTree::from([2, 1]);
        assert_eq!(alloc::format!("{tree:?}"), "{1, 2}");
    }

    #[test]
    fn erase_at_walks_forward() {
        let mut tree: SplayTree<_> = (0..6).collect();
        let mut position = tree.begin();
        while !position.is_end() {
            let key = *tree.get(position).unwrap();
            position = if key % 2 == 0 { tree.erase_at(position) } else { tree.next_position(position) };
            tree.assert_invariants();
        }
        assert_eq!(keys(&tree), [1, 3, 5]);
    }
}
