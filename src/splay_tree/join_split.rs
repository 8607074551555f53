use core::borrow::Borrow;

use super::SplayTree;
use crate::augment::Augment;
use crate::compare::Compare;
use crate::error::{Error, Result};

impl<K, C: Compare<K>, A: Augment> SplayTree<K, C, A> {
    /// Moves every key of `other` into `self`, leaving `other` empty.
    ///
    /// Every key of `self` must order strictly before every key of `other`. This is checked
    /// against the cached extremes before anything is touched, so a refused join leaves both
    /// trees exactly as they were. Joining with an empty tree on either side always succeeds.
    ///
    /// On success the maximum of `self` is splayed to the root and the keys of `other` are hung
    /// below it as a balanced subtree. The nodes of `self` stay in place, so positions into
    /// `self` remain valid. The keys of `other` move into the node arena of `self`, so the cost is
    /// linear in the size of `other`, and positions into `other` are invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverlappingRanges`] if the key ranges interleave or touch.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::{Error, SplayTree};
    ///
    /// let mut low: SplayTree<_> = SplayTree::from([1, 2, 3]);
    /// let mut high: SplayTree<_> = SplayTree::from([4, 5, 6]);
    /// low.join(&mut high)?;
    /// assert_eq!(low.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
    /// assert!(high.is_empty());
    ///
    /// let mut overlapping: SplayTree<_> = SplayTree::from([2, 3, 4]);
    /// assert_eq!(low.join(&mut overlapping), Err(Error::OverlappingRanges));
    /// assert_eq!(overlapping.len(), 3);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn join(&mut self, other: &mut Self) -> Result<()> {
        if let (Some(max), Some(min)) = (self.last(), other.first())
            && !self.cmp.less(max, min)
        {
            log::debug!(
                "refusing to join a tree of {} keys with a tree of {} keys: ranges overlap",
                self.len(),
                other.len()
            );
            return Err(Error::OverlappingRanges);
        }

        log::trace!("joining a tree of {} keys with a tree of {} keys", self.len(), other.len());
        self.raw.join(&mut other.raw);
        Ok(())
    }

    /// Splits the tree after `key`: keys greater than `key` move to the returned tree, and
    /// `key` itself stays with the smaller keys in `self`.
    ///
    /// `key`'s node is splayed to the root and its right subtree detached. If `key` is the
    /// largest key the returned tree is empty. Positions of the keys that stay in `self` remain
    /// valid. The detached keys move into a fresh node arena, so the cost is linear in the size
    /// of the returned tree, and their positions are invalidated: look them up again in the
    /// returned tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if no key equivalent to `key` is present; `self` is then
    /// left as an unsuccessful [`find`](Self::find) would leave it.
    ///
    /// # Examples
    ///
    /// ```
    /// use splay_set::{Error, SplayTree};
    ///
    /// let mut tree: SplayTree<_> = (1..=5).collect();
    /// let rest = tree.split(&3)?;
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// assert_eq!(rest.iter().copied().collect::<Vec<_>>(), [4, 5]);
    ///
    /// assert_eq!(tree.split(&10).unwrap_err(), Error::KeyNotFound);
    /// assert!(tree.split(&3)?.is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn split<Q>(&mut self, key: &Q) -> Result<Self>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Compare<Q> + Clone,
    {
        let Some(handle) = self.find(key).0 else {
            return Err(Error::KeyNotFound);
        };

        log::trace!("splitting a tree of {} keys", self.len());
        Ok(SplayTree {
            raw: self.raw.split_after(handle),
            cmp: self.cmp.clone(),
        })
    }
}
