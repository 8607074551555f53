use core::borrow::Borrow;

use super::SearchTree;
use crate::augment::SubtreeSize;
use crate::compare::Compare;

impl<K, C> SearchTree<K, C, SubtreeSize> {
    /// Returns the number of keys strictly less than `key`.
    ///
    /// A single descent adds up the left subtree sizes of every node it passes on the way right.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::AugmentedSearchTree;
    ///
    /// let tree: AugmentedSearchTree<_> = AugmentedSearchTree::from([1, 3, 5, 7]);
    /// assert_eq!(tree.n_less_than(&5), 2);
    /// assert_eq!(tree.n_less_than(&10), 4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn n_less_than<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.raw.count_less(key, &self.cmp, false)
    }

    /// Returns the number of keys less than or equal to `key`.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn n_less_or_equal_to<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.raw.count_less(key, &self.cmp, true)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::AugmentedSearchTree;

    #[test]
    fn counts_on_odd_keys() {
        let tree: AugmentedSearchTree<_> = AugmentedSearchTree::from([7, 3, 1, 5]);
        assert_eq!(tree.n_less_than(&5), 2);
        assert_eq!(tree.n_less_or_equal_to(&5), 3);
        assert_eq!(tree.n_less_than(&0), 0);
        assert_eq!(tree.n_less_than(&10), 4);
    }

    #[test]
    fn counts_follow_erasure() {
        let mut tree: AugmentedSearchTree<_> = (0..10).collect();
        tree.erase(&3);
        tree.erase(&4);
        tree.assert_invariants();
        assert_eq!(tree.n_less_than(&5), 3);
        assert_eq!(tree.n_less_or_equal_to(&9), 8);
    }
}
