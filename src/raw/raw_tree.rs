use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::ops::{Bound, RangeBounds};

use super::adjust::Adjust;
use super::arena::Arena;
use super::handle::Handle;
use super::node::{Link, Node};
use crate::augment::Augment;
use crate::compare::Compare;

/// The sentinel of a tree.
///
/// It never holds a key. Its slots are dual-purposed: one anchors the root, the other two cache
/// the extremes so that `first`/`last` and the begin position are O(1). The sentinel itself has
/// no handle; `None` wherever a handle is expected (a parent, a thread target, a position) names
/// it.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Control {
    root: Option<Handle>,
    leftmost: Option<Handle>,
    rightmost: Option<Handle>,
}

impl Control {
    #[inline]
    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) const fn leftmost(&self) -> Option<Handle> {
        self.leftmost
    }

    #[inline]
    pub(crate) const fn rightmost(&self) -> Option<Handle> {
        self.rightmost
    }

    #[inline]
    pub(super) fn set_leftmost(&mut self, leftmost: Option<Handle>) {
        self.leftmost = leftmost;
    }

    #[inline]
    pub(super) fn set_rightmost(&mut self, rightmost: Option<Handle>) {
        self.rightmost = rightmost;
    }
}

/// Outcome of a descent: the node that matched (if any) and the last node visited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Descent {
    pub(crate) hit: Option<Handle>,
    pub(crate) last: Option<Handle>,
}

/// The node graph shared by every tree flavour.
///
/// All link writes go through the primitives in this file (`set_left`, `set_right`,
/// `set_left_thread`, `set_right_thread`, `set_root`, the rotations); every primitive leaves the
/// written node's cache up to date before returning.
pub(crate) struct RawTree<K, A> {
    pub(super) nodes: Arena<Node<K, A>>,
    pub(super) control: Control,
    pub(super) len: usize,
}

impl<K, A> RawTree<K, A> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            control: Control {
                root: None,
                leftmost: None,
                rightmost: None,
            },
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            control: Control::default(),
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn clear(&mut self) {
        log::trace!("clearing tree of {} nodes", self.len);
        self.nodes.clear();
        self.control = Control::default();
        self.len = 0;
    }

    #[inline]
    pub(crate) const fn control(&self) -> &Control {
        &self.control
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, A> {
        self.nodes.get(handle)
    }

    #[inline]
    pub(crate) fn key(&self, handle: Handle) -> &K {
        self.nodes.get(handle).key()
    }

    #[inline]
    pub(crate) fn left_child(&self, handle: Handle) -> Option<Handle> {
        self.node(handle).left().child()
    }

    #[inline]
    pub(crate) fn right_child(&self, handle: Handle) -> Option<Handle> {
        self.node(handle).right().child()
    }

    #[inline]
    pub(crate) fn parent(&self, handle: Handle) -> Option<Handle> {
        self.node(handle).parent()
    }

    /// Returns `true` if `handle` hangs off the left side of its parent. The root is neither a
    /// left nor a right child.
    #[inline]
    pub(crate) fn is_left_child(&self, handle: Handle) -> bool {
        self.parent(handle).is_some_and(|parent| self.node(parent).left() == Link::Child(handle))
    }

    /// Follows real left children (never threads) down to the subtree minimum.
    pub(crate) fn minimum(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.left_child(handle) {
            handle = left;
        }
        handle
    }

    /// Follows real right children (never threads) down to the subtree maximum.
    pub(crate) fn maximum(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.right_child(handle) {
            handle = right;
        }
        handle
    }

    /// In-order successor; `None` is the sentinel. O(1) across a right thread.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        match self.node(handle).right() {
            Link::Thread(next) => next,
            Link::Child(right) => Some(self.minimum(right)),
        }
    }

    /// In-order predecessor; `None` is the sentinel. O(1) across a left thread.
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        match self.node(handle).left() {
            Link::Thread(prev) => prev,
            Link::Child(left) => Some(self.maximum(left)),
        }
    }

    /// Steps forward from a position. Stepping forward from the sentinel wraps to the leftmost
    /// node.
    pub(crate) fn next_of(&self, position: Option<Handle>) -> Option<Handle> {
        match position {
            Some(handle) => self.successor(handle),
            None => self.control.leftmost(),
        }
    }

    /// Steps backward from a position. Stepping backward from the sentinel yields the rightmost
    /// node.
    pub(crate) fn prev_of(&self, position: Option<Handle>) -> Option<Handle> {
        match position {
            Some(handle) => self.predecessor(handle),
            None => self.control.rightmost(),
        }
    }
}

impl<K, A: Augment> RawTree<K, A> {
    #[inline]
    fn cache_of(&self, link: Link) -> Option<&A> {
        link.child().map(|child| self.node(child).cache())
    }

    /// Recomputes the cache of `handle` from its children.
    #[inline]
    pub(crate) fn refresh(&mut self, handle: Handle) {
        let node = self.node(handle);
        let cache = A::combine(self.cache_of(node.left()), self.cache_of(node.right()));
        self.nodes.get_mut(handle).cache = cache;
    }

    /// Recomputes caches from `handle` up to the root.
    pub(crate) fn refresh_upward(&mut self, mut handle: Option<Handle>) {
        while let Some(current) = handle {
            self.refresh(current);
            handle = self.parent(current);
        }
    }

    /// Installs `child` as the left child of `handle`.
    pub(crate) fn set_left(&mut self, handle: Handle, child: Handle) {
        self.nodes.get_mut(handle).left = Link::Child(child);
        self.nodes.get_mut(child).parent = Some(handle);
        self.refresh(handle);
    }

    /// Installs `child` as the right child of `handle`.
    pub(crate) fn set_right(&mut self, handle: Handle, child: Handle) {
        self.nodes.get_mut(handle).right = Link::Child(child);
        self.nodes.get_mut(child).parent = Some(handle);
        self.refresh(handle);
    }

    /// Empties the left side of `handle`, threading it to `prev`.
    pub(crate) fn set_left_thread(&mut self, handle: Handle, prev: Option<Handle>) {
        self.nodes.get_mut(handle).left = Link::Thread(prev);
        self.refresh(handle);
    }

    /// Empties the right side of `handle`, threading it to `next`.
    pub(crate) fn set_right_thread(&mut self, handle: Handle, next: Option<Handle>) {
        self.nodes.get_mut(handle).right = Link::Thread(next);
        self.refresh(handle);
    }

    /// Anchors `root` under the sentinel.
    pub(crate) fn set_root(&mut self, root: Option<Handle>) {
        self.control.root = root;
        if let Some(root) = root {
            self.nodes.get_mut(root).parent = None;
        }
    }

    /// Puts `replacement` where `handle` hangs, under `handle`'s parent or the sentinel.
    fn replace_in_parent(&mut self, handle: Handle, replacement: Handle) {
        match self.parent(handle) {
            None => self.set_root(Some(replacement)),
            Some(parent) if self.node(parent).left() == Link::Child(handle) => self.set_left(parent, replacement),
            Some(parent) => self.set_right(parent, replacement),
        }
    }

    /// ```text
    ///     |               |
    ///     x               y
    ///    / \             / \
    ///   a   y    -->    x   c
    ///      / \         / \
    ///     b   c       a   b
    /// ```
    ///
    /// If `b` is a thread, `y` is the successor of `x`, so `x` gets a right thread to `y` instead
    /// of a child.
    pub(crate) fn rotate_left(&mut self, x: Handle) {
        let Some(y) = self.right_child(x) else {
            panic!("`RawTree::rotate_left()` - node has no right child!");
        };

        match self.node(y).left() {
            Link::Thread(prev) => {
                debug_assert_eq!(prev, Some(x), "`RawTree::rotate_left()` - broken left thread!");
                self.set_right_thread(x, Some(y));
            }
            Link::Child(b) => self.set_right(x, b),
        }

        self.replace_in_parent(x, y);
        self.set_left(y, x);
    }

    /// ```text
    ///       |               |
    ///       y               x
    ///      / \             / \
    ///     a   x    <--    y   c
    ///        / \         / \
    ///       b   c       a   b
    /// ```
    ///
    /// Mirror image of [`rotate_left`](Self::rotate_left), read right to left.
    pub(crate) fn rotate_right(&mut self, x: Handle) {
        let Some(y) = self.left_child(x) else {
            panic!("`RawTree::rotate_right()` - node has no left child!");
        };

        match self.node(y).right() {
            Link::Thread(next) => {
                debug_assert_eq!(next, Some(x), "`RawTree::rotate_right()` - broken right thread!");
                self.set_left_thread(x, Some(y));
            }
            Link::Child(b) => self.set_left(x, b),
        }

        self.replace_in_parent(x, y);
        self.set_right(y, x);
    }

    /// Descends from the root looking for `key`.
    pub(crate) fn find<Q, C>(&self, key: &Q, cmp: &C) -> Descent
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let mut descent = Descent { hit: None, last: None };
        let mut current = self.control.root();

        while let Some(handle) = current {
            descent.last = Some(handle);
            let node_key = self.key(handle).borrow();
            current = if cmp.less(key, node_key) {
                self.left_child(handle)
            } else if cmp.less(node_key, key) {
                self.right_child(handle)
            } else {
                descent.hit = Some(handle);
                break;
            };
        }

        descent
    }

    /// Finds the leftmost node not less than `key`.
    pub(crate) fn lower_bound<Q, C>(&self, key: &Q, cmp: &C) -> Descent
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.bound(|node_key| !cmp.less(node_key, key))
    }

    /// Finds the leftmost node greater than `key`.
    pub(crate) fn upper_bound<Q, C>(&self, key: &Q, cmp: &C) -> Descent
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        self.bound(|node_key| cmp.less(key, node_key))
    }

    /// Finds the leftmost node satisfying `goes_left`, which must be monotone over the key order.
    fn bound<Q, F>(&self, goes_left: F) -> Descent
    where
        K: Borrow<Q>,
        Q: ?Sized,
        F: Fn(&Q) -> bool,
    {
        let mut descent = Descent { hit: None, last: None };
        let mut current = self.control.root();

        while let Some(handle) = current {
            descent.last = Some(handle);
            current = if goes_left(self.key(handle).borrow()) {
                descent.hit = Some(handle);
                self.left_child(handle)
            } else {
                self.right_child(handle)
            };
        }

        descent
    }

    /// Locates the first and last nodes inside `range`, or `None` if it holds no key.
    pub(crate) fn range_ends<Q, C, R>(&self, range: &R, cmp: &C) -> Option<(Handle, Handle)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
        R: RangeBounds<Q>,
    {
        let start = match range.start_bound() {
            Bound::Included(key) => self.lower_bound(key, cmp).hit,
            Bound::Excluded(key) => self.upper_bound(key, cmp).hit,
            Bound::Unbounded => self.control.leftmost(),
        }?;
        // One past the last node in range.
        let stop = match range.end_bound() {
            Bound::Included(key) => self.upper_bound(key, cmp).hit,
            Bound::Excluded(key) => self.lower_bound(key, cmp).hit,
            Bound::Unbounded => None,
        };
        if stop == Some(start) {
            return None;
        }

        let last = self.prev_of(stop)?;
        if cmp.less(self.key(last).borrow(), self.key(start).borrow()) {
            return None;
        }
        Some((start, last))
    }

    /// Applies the lookup hook of `P` to a finished descent and returns the matched node.
    pub(crate) fn settle<P: Adjust>(&mut self, descent: Descent) -> Option<Handle> {
        P::after_lookup(self, descent);
        descent.hit
    }

    /// Inserts `key` unless an equivalent key is present.
    ///
    /// Returns the node holding the key and whether it was newly inserted.
    pub(crate) fn insert<P: Adjust, C: Compare<K>>(&mut self, key: K, cmp: &C) -> (Handle, bool) {
        let descent = self.find(&key, cmp);
        if let Some(existing) = descent.hit {
            P::after_lookup(self, descent);
            return (existing, false);
        }

        let handle = match descent.last {
            None => {
                let handle = self.nodes.alloc(Node::new(key, None, None));
                self.set_root(Some(handle));
                self.control.set_leftmost(Some(handle));
                self.control.set_rightmost(Some(handle));
                handle
            }
            Some(parent) if cmp.less(&key, self.key(parent)) => {
                // The parent's left side is a thread, so its predecessor is right there.
                let prev = self.predecessor(parent);
                let handle = self.nodes.alloc(Node::new(key, prev, Some(parent)));
                self.set_left(parent, handle);
                if prev.is_none() {
                    self.control.set_leftmost(Some(handle));
                }
                handle
            }
            Some(parent) => {
                let next = self.successor(parent);
                let handle = self.nodes.alloc(Node::new(key, Some(parent), next));
                self.set_right(parent, handle);
                if next.is_none() {
                    self.control.set_rightmost(Some(handle));
                }
                handle
            }
        };

        if let Some(parent) = descent.last {
            self.refresh_upward(self.parent(parent));
        }
        self.len += 1;
        P::after_insert(self, handle);

        (handle, true)
    }

    /// Removes `handle` from the tree and frees it.
    ///
    /// Returns the key it held and the node that followed it.
    pub(crate) fn erase<P: Adjust>(&mut self, handle: Handle) -> (K, Option<Handle>) {
        let prev = self.predecessor(handle);
        let next = self.successor(handle);

        P::unlink(self, handle);

        if self.control.leftmost() == Some(handle) {
            self.control.set_leftmost(next);
        }
        if self.control.rightmost() == Some(handle) {
            self.control.set_rightmost(prev);
        }
        self.len -= 1;

        (self.nodes.take(handle).into_key(), next)
    }

    /// Unlinks `handle` without restructuring anything above it.
    ///
    /// The four cases follow which sides of `handle` are threads.
    pub(crate) fn unlink_in_place(&mut self, handle: Handle) {
        let parent = self.parent(handle);
        let node = self.node(handle);

        match (node.left(), node.right()) {
            (Link::Thread(prev), Link::Thread(next)) => match parent {
                None => self.control.root = None,
                Some(parent) if self.node(parent).left() == Link::Child(handle) => {
                    self.set_left_thread(parent, prev);
                }
                Some(parent) => self.set_right_thread(parent, next),
            },
            (Link::Child(left), Link::Thread(next)) => {
                let max = self.maximum(left);
                self.set_right_thread(max, next);
                self.replace_in_parent(handle, left);
            }
            (Link::Thread(prev), Link::Child(right)) => {
                let min = self.minimum(right);
                self.set_left_thread(min, prev);
                self.replace_in_parent(handle, right);
            }
            (Link::Child(left), Link::Child(right)) => {
                let successor = self.minimum(right);
                let lowest = if successor == right {
                    successor
                } else {
                    let Some(successor_parent) = self.parent(successor) else {
                        unreachable!("`RawTree::unlink_in_place()` - successor has no parent!");
                    };
                    match self.node(successor).right() {
                        Link::Child(orphan) => self.set_left(successor_parent, orphan),
                        Link::Thread(_) => self.set_left_thread(successor_parent, Some(successor)),
                    }
                    self.set_right(successor, right);
                    successor_parent
                };

                self.set_left(successor, left);
                let max = self.maximum(left);
                self.set_right_thread(max, Some(successor));
                self.replace_in_parent(handle, successor);
                self.refresh_upward(Some(lowest));
                return;
            }
        }

        self.refresh_upward(parent);
    }

    /// Allocates `keys` (strictly increasing) and links them into a balanced subtree that hangs
    /// off nothing.
    ///
    /// The outermost threads point at the sentinel. Returns the subtree root together with its
    /// first and last nodes.
    pub(crate) fn build_detached(&mut self, keys: Vec<K>) -> Option<(Handle, Handle, Handle)> {
        let order: Vec<Handle> = keys.into_iter().map(|key| self.nodes.alloc(Node::new(key, None, None))).collect();
        let root = self.link_balanced(&order, 0, order.len())?;
        self.nodes.get_mut(root).parent = None;
        Some((root, order[0], order[order.len() - 1]))
    }

    fn link_balanced(&mut self, order: &[Handle], lo: usize, hi: usize) -> Option<Handle> {
        if lo >= hi {
            return None;
        }

        let mid = lo + (hi - lo) / 2;
        let handle = order[mid];

        match self.link_balanced(order, lo, mid) {
            Some(left) => self.set_left(handle, left),
            None => self.set_left_thread(handle, mid.checked_sub(1).map(|i| order[i])),
        }
        match self.link_balanced(order, mid + 1, hi) {
            Some(right) => self.set_right(handle, right),
            None => self.set_right_thread(handle, order.get(mid + 1).copied()),
        }

        Some(handle)
    }

    /// Builds a balanced tree from keys that are already strictly increasing.
    pub(crate) fn from_sorted(keys: Vec<K>) -> Self {
        let mut tree = Self::with_capacity(keys.len());
        let len = keys.len();
        if let Some((root, first, last)) = tree.build_detached(keys) {
            tree.set_root(Some(root));
            tree.control.set_leftmost(Some(first));
            tree.control.set_rightmost(Some(last));
            tree.len = len;
        }
        log::trace!("rebuilt balanced tree of {len} nodes");
        tree
    }

    /// Frees the nodes from `first` onward, in order, until a thread to the sentinel is reached.
    ///
    /// The caller is responsible for the links and counters that referred to them.
    pub(crate) fn take_run(&mut self, first: Option<Handle>) -> Vec<K> {
        let mut keys = Vec::new();
        let mut current = first;
        while let Some(handle) = current {
            current = self.successor(handle);
            keys.push(self.nodes.take(handle).into_key());
        }
        keys
    }

    /// Removes every key, in order, leaving the tree empty.
    pub(crate) fn take_all(&mut self) -> Vec<K> {
        let keys = self.take_run(self.control.leftmost());
        self.clear();
        keys
    }

    /// Checks every structural invariant and returns a description of each violation found.
    pub(crate) fn check_invariants<C: Compare<K>>(&self, cmp: &C) -> Vec<String>
    where
        A: PartialEq,
    {
        let mut errors = Vec::new();

        // Collect the in-order sequence by child links alone.
        let mut order = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.control.root();
        while current.is_some() || !stack.is_empty() {
            while let Some(handle) = current {
                stack.push(handle);
                current = self.left_child(handle);
            }
            if let Some(handle) = stack.pop() {
                order.push(handle);
                current = self.right_child(handle);
            }
        }

        if let Some(root) = self.control.root()
            && self.parent(root).is_some()
        {
            errors.push(alloc::format!("root {root:?} has a parent"));
        }

        for (i, &handle) in order.iter().enumerate() {
            let node = self.node(handle);
            let prev = i.checked_sub(1).map(|j| order[j]);
            let next = order.get(i + 1).copied();

            if let Some(prev) = prev
                && !cmp.less(self.key(prev), node.key())
            {
                errors.push(alloc::format!("keys out of order at {prev:?} -> {handle:?}"));
            }

            match node.left() {
                Link::Thread(target) if target != prev => {
                    errors.push(alloc::format!("left thread of {handle:?} is {target:?}, expected {prev:?}"));
                }
                Link::Child(child) if self.parent(child) != Some(handle) => {
                    errors.push(alloc::format!("left child {child:?} does not point back to {handle:?}"));
                }
                _ => {}
            }
            match node.right() {
                Link::Thread(target) if target != next => {
                    errors.push(alloc::format!("right thread of {handle:?} is {target:?}, expected {next:?}"));
                }
                Link::Child(child) if self.parent(child) != Some(handle) => {
                    errors.push(alloc::format!("right child {child:?} does not point back to {handle:?}"));
                }
                _ => {}
            }

            let expected = A::combine(self.cache_of(node.left()), self.cache_of(node.right()));
            if *node.cache() != expected {
                errors.push(alloc::format!("cache of {handle:?} is {:?}, expected {expected:?}", node.cache()));
            }

            if self.successor(handle) != next {
                errors.push(alloc::format!("successor of {handle:?} is not {next:?}"));
            }
        }

        if self.control.leftmost() != order.first().copied() {
            errors.push(alloc::format!("leftmost cache is {:?}", self.control.leftmost()));
        }
        if self.control.rightmost() != order.last().copied() {
            errors.push(alloc::format!("rightmost cache is {:?}", self.control.rightmost()));
        }
        if self.len != order.len() || self.nodes.len() != order.len() {
            errors.push(alloc::format!(
                "len mismatch: len={}, reachable={}, allocated={}",
                self.len,
                order.len(),
                self.nodes.len()
            ));
        }

        errors
    }
}

impl<K: Clone, A: Augment> Clone for RawTree<K, A> {
    fn clone(&self) -> Self {
        let mut keys = Vec::with_capacity(self.len);
        let mut current = self.control.leftmost();
        while let Some(handle) = current {
            keys.push(self.key(handle).clone());
            current = self.successor(handle);
        }
        Self::from_sorted(keys)
    }
}
