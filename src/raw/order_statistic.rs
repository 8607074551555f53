use core::borrow::Borrow;

use super::handle::Handle;
use super::raw_tree::RawTree;
use crate::augment::SubtreeSize;
use crate::compare::Compare;

impl<K> RawTree<K, SubtreeSize> {
    #[inline]
    fn size_of(&self, handle: Option<Handle>) -> usize {
        SubtreeSize::of(handle.map(|handle| self.node(handle).cache()))
    }

    /// Number of nodes in the left subtree of `handle`.
    #[inline]
    pub(crate) fn left_size(&self, handle: Handle) -> usize {
        self.size_of(self.left_child(handle))
    }

    /// Counts the keys ordering before `key` (or not after it, if `inclusive`) with a single
    /// descent that leaves the shape untouched.
    pub(crate) fn count_less<Q, C>(&self, key: &Q, cmp: &C, inclusive: bool) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q>,
    {
        let mut count = 0;
        let mut current = self.control().root();

        while let Some(handle) = current {
            let node_key = self.key(handle).borrow();
            let counted = if inclusive { !cmp.less(key, node_key) } else { cmp.less(node_key, key) };
            current = if counted {
                count += self.left_size(handle) + 1;
                self.right_child(handle)
            } else {
                self.left_child(handle)
            };
        }

        count
    }

    /// Finds the node at zero-based position `rank` in key order.
    pub(crate) fn select(&self, mut rank: usize) -> Option<Handle> {
        if rank >= self.len() {
            return None;
        }

        let mut current = self.control().root();
        while let Some(handle) = current {
            let left = self.left_size(handle);
            current = match rank.cmp(&left) {
                core::cmp::Ordering::Less => self.left_child(handle),
                core::cmp::Ordering::Equal => return Some(handle),
                core::cmp::Ordering::Greater => {
                    rank -= left + 1;
                    self.right_child(handle)
                }
            };
        }

        unreachable!("`RawTree::select()` - subtree sizes are inconsistent!");
    }

    /// Zero-based position of `handle` in key order.
    pub(crate) fn rank_of(&self, handle: Handle) -> usize {
        let mut rank = self.left_size(handle);
        let mut current = handle;
        while let Some(parent) = self.parent(current) {
            if !self.is_left_child(current) {
                rank += self.left_size(parent) + 1;
            }
            current = parent;
        }
        rank
    }
}
