use alloc::vec::Vec;

use super::adjust::splay;
use super::handle::Handle;
use super::raw_tree::RawTree;
use crate::augment::Augment;

impl<K, A: Augment> RawTree<K, A> {
    /// Moves every key of `other` into `self`, leaving `other` empty.
    ///
    /// Every key of `self` must order before every key of `other`. Nodes cannot be shared between
    /// arenas, so the keys of `other` are moved over and relinked as a balanced subtree hung below
    /// the splayed maximum of `self`. The nodes of `self` stay where they are.
    pub(crate) fn join(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            core::mem::swap(self, other);
            return;
        }

        let keys = other.take_all();
        self.append_greater(keys);
    }

    /// Detaches everything after `node` and returns it as a new tree.
    pub(crate) fn split_after(&mut self, node: Handle) -> Self {
        splay(self, node);

        let Some(right) = self.right_child(node) else {
            return Self::new();
        };

        let keys = self.take_run(Some(self.minimum(right)));
        self.set_right_thread(node, None);
        self.control.set_rightmost(Some(node));
        self.len -= keys.len();

        log::trace!("split moved {} keys into a new tree", keys.len());
        Self::from_sorted(keys)
    }

    /// Links `keys`, all greater than every key present, to the right of the current maximum.
    fn append_greater(&mut self, keys: Vec<K>) {
        let count = keys.len();
        let Some(max) = self.control.rightmost() else {
            *self = Self::from_sorted(keys);
            return;
        };
        let Some((sub, first, last)) = self.build_detached(keys) else {
            return;
        };

        // The maximum is the root after splaying, so nothing above it needs a refresh.
        splay(self, max);
        self.set_right(max, sub);
        self.set_left_thread(first, Some(max));
        self.refresh_upward(self.parent(first));
        self.control.set_rightmost(Some(last));
        self.len += count;

        log::trace!("joined {count} keys after the maximum");
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::augment::SubtreeSize;
    use crate::compare::Natural;
    use crate::raw::adjust::Splay;

    fn splayed(keys: impl IntoIterator<Item = i32>) -> RawTree<i32, SubtreeSize> {
        let mut tree = RawTree::new();
        for key in keys {
            tree.insert::<Splay, _>(key, &Natural);
        }
        tree
    }

    #[test]
    fn join_keeps_the_nodes_of_a_smaller_left_tree() {
        let mut left = splayed([1, 2, 3]);
        let mut right = splayed([4, 5, 6, 7, 8]);
        let handles: Vec<Handle> = (1..=3).map(|key| left.find(&key, &Natural).hit.unwrap()).collect();
        left.join(&mut right);

        left.validate_invariants();
        right.validate_invariants();
        assert_eq!(left.keys(), [&1, &2, &3, &4, &5, &6, &7, &8]);
        assert!(right.is_empty());
        for (key, handle) in (1..=3).zip(handles) {
            assert_eq!(*left.key(handle), key);
        }
        assert_eq!(left.control().root(), left.find(&3, &Natural).hit);
    }

    #[test]
    fn join_keeps_the_nodes_of_a_larger_left_tree() {
        let mut left = splayed([1, 2, 3, 4, 5]);
        let mut right = splayed([6, 7]);
        let five = left.find(&5, &Natural).hit.unwrap();
        left.join(&mut right);

        left.validate_invariants();
        assert_eq!(left.len(), 7);
        assert_eq!(left.keys(), [&1, &2, &3, &4, &5, &6, &7]);
        assert_eq!(*left.key(five), 5);
        assert!(right.is_empty());
    }

    #[test]
    fn join_with_empty_sides() {
        let mut left = splayed([]);
        let mut right = splayed([1, 2]);
        left.join(&mut right);
        assert_eq!(left.keys(), [&1, &2]);

        let mut empty = splayed([]);
        left.join(&mut empty);
        left.validate_invariants();
        assert_eq!(left.len(), 2);
    }

    #[test]
    fn split_after_root() {
        let mut tree = splayed(1..=5);
        let three = tree.find(&3, &Natural).hit.unwrap();
        let rest = tree.split_after(three);

        tree.validate_invariants();
        rest.validate_invariants();
        assert_eq!(tree.keys(), [&1, &2, &3]);
        assert_eq!(rest.keys(), [&4, &5]);
        assert_eq!(tree.control().rightmost(), Some(three));
    }

    #[test]
    fn split_after_maximum_is_empty() {
        let mut tree = splayed(1..=3);
        let three = tree.find(&3, &Natural).hit.unwrap();
        let rest = tree.split_after(three);
        assert!(rest.is_empty());
        assert_eq!(tree.len(), 3);
        tree.validate_invariants();
    }

    #[test]
    fn split_then_join_restores() {
        let mut tree = splayed((0..50).map(|i| i * 7 % 50));
        let pivot = tree.find(&17, &Natural).hit.unwrap();
        let mut rest = tree.split_after(pivot);
        tree.join(&mut rest);
        tree.validate_invariants();
        assert_eq!(tree.keys(), (0..50).collect::<Vec<_>>().iter().collect::<Vec<_>>());
    }
}
