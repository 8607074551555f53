//! Failures reported by the structural operations of [`SplayTree`](crate::SplayTree).

use thiserror::Error;

/// Why a [`join`](crate::SplayTree::join) or [`split`](crate::SplayTree::split) was refused.
///
/// Both operations leave the trees involved untouched when they fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// The key ranges of the two trees interleave or touch: the maximum of the left tree does not
    /// order strictly before the minimum of the right tree.
    #[error("key ranges overlap: cannot join trees whose keys interleave")]
    OverlappingRanges,

    /// The split key is not present in the tree.
    #[error("split key not found")]
    KeyNotFound,
}

/// Result type for tree operations that can be refused.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(
            Error::OverlappingRanges.to_string(),
            "key ranges overlap: cannot join trees whose keys interleave"
        );
        assert_eq!(Error::KeyNotFound.to_string(), "split key not found");
    }
}
