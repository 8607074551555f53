/// A zero-based position in the sorted order of a tree.
///
/// # Examples
///
/// ```
/// use splay_set::{AugmentedSplayTree, Rank};
///
/// let tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([30, 10, 20]);
/// assert_eq!(tree[Rank(0)], 10);
/// assert_eq!(tree[Rank(2)], 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
