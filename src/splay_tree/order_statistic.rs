use core::borrow::Borrow;
use core::ops::Index;

use super::SplayTree;
use crate::Rank;
use crate::augment::SubtreeSize;
use crate::compare::Compare;
use crate::raw::{Descent, Splay};

impl<K, C> SplayTree<K, C, SubtreeSize> {
    /// Returns the number of keys strictly less than `key`.
    ///
    /// The lower bound of `key` is splayed to the root, after which its left subtree holds
    /// exactly the keys that precede it. If every key is less than `key` the count is the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::AugmentedSplayTree;
    ///
    /// let mut tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([1, 3, 5, 7]);
    /// assert_eq!(tree.n_less_than(&5), 2);
    /// assert_eq!(tree.n_less_than(&0), 0);
    /// assert_eq!(tree.n_less_than(&10), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn n_less_than<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let descent = self.raw.lower_bound(key, &self.cmp);
        self.count_before(descent)
    }

    /// Returns the number of keys less than or equal to `key`.
    ///
    /// Splays the upper bound of `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::AugmentedSplayTree;
    ///
    /// let mut tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([1, 3, 5, 7]);
    /// assert_eq!(tree.n_less_or_equal_to(&5), 3);
    /// assert_eq!(tree.n_less_or_equal_to(&4), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn n_less_or_equal_to<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let descent = self.raw.upper_bound(key, &self.cmp);
        self.count_before(descent)
    }

    /// Returns the number of keys `k` with `low <= k <= high`; zero if `high` orders before
    /// `low`.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::AugmentedSplayTree;
    ///
    /// let mut tree: AugmentedSplayTree<_> = (0..100).step_by(10).collect();
    /// assert_eq!(tree.count_in_range(&15, &45), 3);
    /// assert_eq!(tree.count_in_range(&20, &20), 1);
    /// assert_eq!(tree.count_in_range(&45, &15), 0);
    /// ```
    ///
    /// # Complexity
    ///
    /// Amortized O(log n)
    pub fn count_in_range<Q>(&mut self, low: &Q, high: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let up_to_high = self.n_less_or_equal_to(high);
        let below_low = self.n_less_than(low);
        up_to_high.saturating_sub(below_low)
    }

    /// Returns the key at zero-based position `rank` in sorted order, or `None` if `rank` is out
    /// of bounds. Reads the cached sizes without splaying.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::AugmentedSplayTree;
    ///
    /// let tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([10, 20, 30]);
    /// assert_eq!(tree.get_by_rank(1), Some(&20));
    /// assert!(tree.get_by_rank(3).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&K> {
        self.raw.select(rank).map(|handle| self.raw.key(handle))
    }

    /// Returns the zero-based rank of `key` in sorted order, or `None` if it is not present.
    /// Does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::AugmentedSplayTree;
    ///
    /// let tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([10, 20]);
    /// assert_eq!(tree.rank_of(&20), Some(1));
    /// assert_eq!(tree.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let handle = self.raw.find(key, &self.cmp).hit?;
        Some(self.raw.rank_of(handle))
    }

    fn count_before(&mut self, descent: Descent) -> usize {
        match self.raw.settle::<Splay>(descent) {
            Some(bound) => self.raw.left_size(bound),
            None => self.len(),
        }
    }
}

/// Indexes into the tree by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<K, C> Index<Rank> for SplayTree<K, C, SubtreeSize> {
    type Output = K;

    fn index(&self, rank: Rank) -> &K {
        let Some(key) = self.get_by_rank(rank.0) else {
            panic!("`SplayTree::index()` - `rank` is out of bounds!");
        };
        key
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::AugmentedSplayTree;
    use alloc::collections::BTreeSet;
    use proptest::prelude::*;

    #[test]
    fn counts_on_odd_keys() {
        let mut tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([1, 3, 5, 7]);
        assert_eq!(tree.n_less_than(&5), 2);
        assert_eq!(tree.n_less_or_equal_to(&5), 3);
        assert_eq!(tree.n_less_than(&0), 0);
        assert_eq!(tree.n_less_than(&10), 4);
        assert_eq!(tree.n_less_or_equal_to(&10), 4);
        tree.assert_invariants();
    }

    #[test]
    fn counting_splays_the_bound() {
        let mut tree: AugmentedSplayTree<_> = (0..20).collect();
        tree.n_less_than(&7);
        assert_eq!(tree.root(), Some(&7));
        tree.n_less_or_equal_to(&7);
        assert_eq!(tree.root(), Some(&8));
    }

    #[test]
    fn empty_tree_counts_zero() {
        let mut tree: AugmentedSplayTree<i32> = AugmentedSplayTree::default();
        assert_eq!(tree.n_less_than(&1), 0);
        assert_eq!(tree.count_in_range(&0, &9), 0);
        assert_eq!(tree.get_by_rank(0), None);
    }

    #[test]
    fn index_by_rank() {
        let tree: AugmentedSplayTree<_> = AugmentedSplayTree::from(['c', 'a', 'b']);
        assert_eq!(tree[Rank(0)], 'a');
        assert_eq!(tree[Rank(2)], 'c');
    }

    #[test]
    #[should_panic(expected = "`SplayTree::index()` - `rank` is out of bounds!")]
    fn index_out_of_bounds_panics() {
        let tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([1]);
        let _value = tree[Rank(1)];
    }

    proptest! {
        #[test]
        fn rank_queries_match_model(
            keys in prop::collection::btree_set(-500i32..500, 0..200),
            needles in prop::collection::vec(-510i32..510, 1..20),
        ) {
            let mut tree: AugmentedSplayTree<_> = keys.iter().copied().collect();
            let model: &BTreeSet<i32> = &keys;

            for &needle in &needles {
                prop_assert_eq!(tree.n_less_than(&needle), model.range(..needle).count());
                prop_assert_eq!(tree.n_less_or_equal_to(&needle), model.range(..=needle).count());
                prop_assert_eq!(tree.rank_of(&needle), model.iter().position(|&k| k == needle));
                let high = needle + 25;
                prop_assert_eq!(tree.count_in_range(&needle, &high), model.range(needle..=high).count());
            }
            for (rank, key) in model.iter().enumerate() {
                prop_assert_eq!(tree.get_by_rank(rank), Some(key));
            }
            tree.assert_invariants();
        }
    }
}
