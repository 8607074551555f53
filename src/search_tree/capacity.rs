use super::SearchTree;
use crate::compare::Natural;
use crate::raw::RawTree;

impl<K> SearchTree<K> {
    /// Creates an empty tree with room for at least `capacity` keys before its node arena
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SearchTree;
    ///
    /// let tree: SearchTree<i32> = SearchTree::with_capacity(32);
    /// assert!(tree.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, C, A> SearchTree<K, C, A> {
    /// Creates an empty tree ordered by `cmp` with room for at least `capacity` keys.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        SearchTree {
            raw: RawTree::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of keys the tree can hold without reallocating its node arena.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
