//! Iterators shared by [`SearchTree`](crate::SearchTree) and [`SplayTree`](crate::SplayTree).
//!
//! Borrowing iterators walk the threads: every step is a successor or predecessor query, O(1)
//! across a thread and amortized O(1) over a full traversal. Iteration never restructures a
//! tree, splay trees included.

use alloc::vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::raw::{Handle, RawTree};

/// An iterator over the keys of a tree, in order.
///
/// This `struct` is created by the `iter` method of the trees.
pub struct Iter<'a, K, A> {
    tree: &'a RawTree<K, A>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, K, A> Iter<'a, K, A> {
    pub(crate) fn new(tree: &'a RawTree<K, A>) -> Self {
        Self {
            tree,
            front: tree.control().leftmost(),
            back: tree.control().rightmost(),
            remaining: tree.len(),
        }
    }
}

impl<K, A> Clone for Iter<'_, K, A> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<K: fmt::Debug, A> fmt::Debug for Iter<'_, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, A> Iterator for Iter<'a, K, A> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.front = self.tree.successor(handle);
        self.remaining -= 1;
        Some(self.tree.key(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }

    fn min(mut self) -> Option<&'a K> {
        self.next()
    }

    fn max(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K, A> DoubleEndedIterator for Iter<'a, K, A> {
    fn next_back(&mut self) -> Option<&'a K> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.back = self.tree.predecessor(handle);
        self.remaining -= 1;
        Some(self.tree.key(handle))
    }
}

impl<K, A> ExactSizeIterator for Iter<'_, K, A> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, A> FusedIterator for Iter<'_, K, A> {}

/// An owning iterator over the keys of a tree, in order.
///
/// This `struct` is created by the `into_iter` method of the trees (provided by the
/// [`IntoIterator`] trait).
#[derive(Debug)]
pub struct IntoIter<K> {
    keys: vec::IntoIter<K>,
}

impl<K> IntoIter<K> {
    pub(crate) fn new(keys: alloc::vec::Vec<K>) -> Self {
        Self { keys: keys.into_iter() }
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoIter<K> {
    fn next_back(&mut self) -> Option<K> {
        self.keys.next_back()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<K> FusedIterator for IntoIter<K> {}

/// An iterator over a sub-range of the keys of a tree, in order.
///
/// This `struct` is created by the `range` method of the trees.
pub struct Range<'a, K, A> {
    tree: &'a RawTree<K, A>,
    front: Option<Handle>,
    back: Option<Handle>,
    finished: bool,
}

impl<'a, K, A> Range<'a, K, A> {
    /// Walks from `first` to `last` inclusive; `None` yields nothing.
    pub(crate) fn new(tree: &'a RawTree<K, A>, bounds: Option<(Handle, Handle)>) -> Self {
        match bounds {
            Some((first, last)) => Self {
                tree,
                front: Some(first),
                back: Some(last),
                finished: false,
            },
            None => Self {
                tree,
                front: None,
                back: None,
                finished: true,
            },
        }
    }
}

impl<K, A> Clone for Range<'_, K, A> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<K: fmt::Debug, A> fmt::Debug for Range<'_, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, A> Iterator for Range<'a, K, A> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.finished {
            return None;
        }
        let handle = self.front?;
        if Some(handle) == self.back {
            self.finished = true;
        } else {
            self.front = self.tree.successor(handle);
        }
        Some(self.tree.key(handle))
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K, A> DoubleEndedIterator for Range<'a, K, A> {
    fn next_back(&mut self) -> Option<&'a K> {
        if self.finished {
            return None;
        }
        let handle = self.back?;
        if Some(handle) == self.front {
            self.finished = true;
        } else {
            self.back = self.tree.predecessor(handle);
        }
        Some(self.tree.key(handle))
    }
}

impl<K, A> FusedIterator for Range<'_, K, A> {}
