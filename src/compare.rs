//! Orderings a tree can be keyed by.

use core::cmp::Ordering;
use core::fmt;

/// A strict weak order over `Q`.
///
/// Two keys are equivalent when neither is less than the other; a tree never stores two
/// equivalent keys. It is a logic error for the order to change while keys are stored.
pub trait Compare<Q: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &Q, b: &Q) -> Ordering;

    /// Returns `true` if `a` orders strictly before `b`.
    #[inline]
    fn less(&self, a: &Q, b: &Q) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// The order given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<Q: ?Sized + Ord> Compare<Q> for Natural {
    #[inline]
    fn compare(&self, a: &Q, b: &Q) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the order given by [`Ord`].
///
/// # Examples
///
/// ```
/// use splay_set::{Reversed, SplayTree};
///
/// let mut tree: SplayTree<_, _> = SplayTree::with_comparator(Reversed);
/// tree.extend([1, 3, 2]);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reversed;

impl<Q: ?Sized + Ord> Compare<Q> for Reversed {
    #[inline]
    fn compare(&self, a: &Q, b: &Q) -> Ordering {
        b.cmp(a)
    }
}

/// An order given by a closure.
///
/// # Examples
///
/// ```
/// use splay_set::{FnCompare, SearchTree};
///
/// let by_len = FnCompare(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// let mut tree: SearchTree<_, _> = SearchTree::with_comparator(by_len);
/// tree.extend(["ccc", "a", "bb", "zz"]);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["a", "bb", "ccc"]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnCompare<F>(pub F);

impl<Q: ?Sized, F: Fn(&Q, &Q) -> Ordering> Compare<Q> for FnCompare<F> {
    #[inline]
    fn compare(&self, a: &Q, b: &Q) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCompare(..)")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn natural_and_reversed_disagree() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Reversed.compare(&1, &2), Ordering::Greater);
        assert!(Natural.less("a", "b"));
        assert!(!Reversed.less("a", "b"));
    }

    #[test]
    fn closure_order() {
        let by_abs = FnCompare(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
        assert_eq!(by_abs.compare(&-3, &3), Ordering::Equal);
    }
}
