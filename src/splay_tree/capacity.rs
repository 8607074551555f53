use super::SplayTree;
use crate::compare::Natural;
use crate::raw::RawTree;

impl<K> SplayTree<K> {
    /// Creates an empty tree with room for at least `capacity` keys before its node arena
    /// reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::SplayTree;
    ///
    /// let tree: SplayTree<i32> = SplayTree::with_capacity(16);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, C, A> SplayTree<K, C, A> {
    /// Creates an empty tree ordered by `cmp` with room for at least `capacity` keys.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        SplayTree {
            raw: RawTree::with_capacity(capacity),
            cmp,
        }
    }

    /// Returns the number of keys the tree can hold without reallocating its node arena.
    ///
    /// Slots freed by erasure are reused before the arena grows.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
