use super::handle::Handle;
use super::node::Link;
use super::raw_tree::{Descent, RawTree};
use crate::augment::Augment;

/// Restructuring policy of a tree.
///
/// The generic algorithms in [`RawTree`] call these hooks at fixed points; a policy decides what
/// (if anything) to restructure there. Every hook must leave the tree valid.
pub(crate) trait Adjust {
    /// Runs after a lookup descent, successful or not.
    #[inline]
    fn after_lookup<K, A: Augment>(_tree: &mut RawTree<K, A>, _descent: Descent) {}

    /// Runs after `node` has been linked in as a new leaf.
    #[inline]
    fn after_insert<K, A: Augment>(_tree: &mut RawTree<K, A>, _node: Handle) {}

    /// Detaches `node` from the tree, repairing threads and caches. The slot is freed by the
    /// caller.
    fn unlink<K, A: Augment>(tree: &mut RawTree<K, A>, node: Handle) {
        tree.unlink_in_place(node);
    }
}

/// Plain binary search tree: nothing moves except what insertion and removal require.
pub(crate) struct Unbalanced;

impl Adjust for Unbalanced {}

/// Self-adjusting policy: every accessed node is rotated to the root.
pub(crate) struct Splay;

impl Adjust for Splay {
    #[inline]
    fn after_lookup<K, A: Augment>(tree: &mut RawTree<K, A>, descent: Descent) {
        if let Some(node) = descent.hit.or(descent.last) {
            splay(tree, node);
        }
    }

    #[inline]
    fn after_insert<K, A: Augment>(tree: &mut RawTree<K, A>, node: Handle) {
        splay(tree, node);
    }

    fn unlink<K, A: Augment>(tree: &mut RawTree<K, A>, node: Handle) {
        splay(tree, node);
        unlink_root(tree);
    }
}

/// Rotates `node` up until it is the root.
///
/// Each step looks at the node, its parent and its grandparent:
/// - zig: the parent is the root, rotate once;
/// - zig-zig: node and parent lean the same way, rotate the grandparent then the parent;
/// - zig-zag: they lean opposite ways, rotate the parent then the grandparent.
pub(crate) fn splay<K, A: Augment>(tree: &mut RawTree<K, A>, node: Handle) {
    while let Some(parent) = tree.parent(node) {
        let node_is_left = tree.is_left_child(node);

        let Some(grandparent) = tree.parent(parent) else {
            rotate_up(tree, parent, node_is_left);
            break;
        };

        let parent_is_left = tree.is_left_child(parent);
        if node_is_left == parent_is_left {
            rotate_up(tree, grandparent, parent_is_left);
            rotate_up(tree, parent, node_is_left);
        } else {
            rotate_up(tree, parent, node_is_left);
            rotate_up(tree, grandparent, parent_is_left);
        }
    }
}

// Rotates the child on the given side of `above` into its place.
#[inline]
fn rotate_up<K, A: Augment>(tree: &mut RawTree<K, A>, above: Handle, child_is_left: bool) {
    if child_is_left {
        tree.rotate_right(above);
    } else {
        tree.rotate_left(above);
    }
}

/// Removes the root, joining its two subtrees.
///
/// The maximum of the left subtree is splayed to the top of that subtree, where it has no right
/// child, and the right subtree is hung there.
fn unlink_root<K, A: Augment>(tree: &mut RawTree<K, A>) {
    let Some(root) = tree.control().root() else {
        unreachable!("`Splay::unlink()` - tree is empty!");
    };
    let node = tree.node(root);

    match (node.left(), node.right()) {
        (Link::Thread(_), Link::Thread(_)) => tree.set_root(None),
        (Link::Thread(prev), Link::Child(right)) => {
            let min = tree.minimum(right);
            tree.set_left_thread(min, prev);
            tree.set_root(Some(right));
        }
        (Link::Child(left), Link::Thread(next)) => {
            let max = tree.maximum(left);
            tree.set_right_thread(max, next);
            tree.set_root(Some(left));
        }
        (Link::Child(left), Link::Child(right)) => {
            tree.set_root(Some(left));
            let max = tree.maximum(left);
            splay(tree, max);
            tree.set_right(max, right);
            let min = tree.minimum(right);
            tree.set_left_thread(min, Some(max));
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::augment::SubtreeSize;
    use crate::compare::Natural;

    fn splayed(keys: &[i32]) -> RawTree<i32, SubtreeSize> {
        let mut tree = RawTree::new();
        for &key in keys {
            tree.insert::<Splay, _>(key, &Natural);
        }
        tree
    }

    fn root_key(tree: &RawTree<i32, SubtreeSize>) -> Option<i32> {
        tree.control().root().map(|root| *tree.key(root))
    }

    #[test]
    fn inserted_key_becomes_root() {
        let mut tree = RawTree::new();
        for key in [5, 2, 8, 1, 9, 3] {
            tree.insert::<Splay, _>(key, &Natural);
            assert_eq!(root_key(&tree), Some(key));
            tree.validate_invariants();
        }
    }

    #[test]
    fn found_key_becomes_root() {
        let mut tree = splayed(&[5, 2, 8, 1, 9]);
        let descent = tree.find(&2, &Natural);
        let hit = tree.settle::<Splay>(descent);
        assert_eq!(hit, tree.control().root());
        assert_eq!(root_key(&tree), Some(2));
        tree.validate_invariants();
    }

    #[test]
    fn miss_splays_last_visited_node() {
        let mut tree = splayed(&[10, 20, 30]);
        let descent = tree.find(&25, &Natural);
        assert_eq!(tree.settle::<Splay>(descent), None);
        assert!(matches!(root_key(&tree), Some(20 | 30)));
        tree.validate_invariants();
    }

    #[test]
    fn zig_zig_and_zig_zag() {
        // Ascending inserts leave a left-leaning path once the minimum is looked up.
        let mut tree = splayed(&[1, 2, 3, 4, 5, 6, 7]);
        for key in [1, 4, 7, 2, 6, 3, 5] {
            let descent = tree.find(&key, &Natural);
            tree.settle::<Splay>(descent);
            assert_eq!(root_key(&tree), Some(key));
            tree.validate_invariants();
        }
    }

    #[test]
    fn erase_joins_around_removed_root() {
        let mut tree = splayed(&[5, 2, 8, 1, 9]);
        let two = tree.find(&2, &Natural).hit.unwrap();
        tree.erase::<Splay>(two);
        tree.validate_invariants();
        assert_eq!(tree.keys(), [&1, &5, &8, &9]);
        assert_eq!(tree.find(&2, &Natural).hit, None);
        // The predecessor of the removed key tops the joined tree.
        assert_eq!(root_key(&tree), Some(1));
    }

    #[test]
    fn erase_down_to_empty() {
        let mut tree = splayed(&[3, 1, 2]);
        while let Some(first) = tree.control().leftmost() {
            tree.erase::<Splay>(first);
            tree.validate_invariants();
        }
        assert!(tree.is_empty());
        assert_eq!(tree.control().root(), None);
    }
}
