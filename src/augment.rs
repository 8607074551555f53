//! Per-node data cached alongside the tree structure.
//!
//! Every time a node gains or loses a child the tree recomputes the node's cache from the caches
//! of its (at most two) real children. Threads are not children and contribute nothing.

use core::fmt;

use crate::raw::Size;

/// Data cached in every node and recomputed bottom-up on every structural change.
///
/// `combine` receives the caches of the left and right children, `None` standing for a side that
/// holds a thread (an empty subtree). The result must depend only on those inputs.
pub trait Augment: Copy + fmt::Debug {
    /// Computes the cache of a node from the caches of its children.
    fn combine(left: Option<&Self>, right: Option<&Self>) -> Self;
}

/// No cached data. Trees using it pay nothing for augmentation and offer no rank queries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Plain;

impl Augment for Plain {
    #[inline]
    fn combine(_left: Option<&Self>, _right: Option<&Self>) -> Self {
        Plain
    }
}

/// Number of nodes in the subtree rooted at a node, itself included.
///
/// Trees using this augmentation support the order-statistic queries
/// (`n_less_than`, `n_less_or_equal_to`, `get_by_rank`, `rank_of`).
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct SubtreeSize(Size);

impl SubtreeSize {
    /// Returns the number of nodes in the subtree.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.to_usize()
    }

    #[inline]
    pub(crate) fn of(cache: Option<&Self>) -> usize {
        cache.map_or(0, |size| size.get())
    }
}

impl Augment for SubtreeSize {
    #[inline]
    fn combine(left: Option<&Self>, right: Option<&Self>) -> Self {
        SubtreeSize(Size::from_usize(1 + Self::of(left) + Self::of(right)))
    }
}

impl fmt::Debug for SubtreeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubtreeSize").field(&self.get()).finish()
    }
}
