use crate::raw::Handle;

/// A stable reference to an element of a tree, or to its end.
///
/// A `Position` is a plain token: it does not borrow the tree, so it stays usable across
/// lookups, inserts and splays (all of which move nodes around without changing their
/// identity). It is invalidated when the element it refers to is erased, or when the element
/// moves to another tree: the keys of the right-hand tree of a
/// [`join`](crate::SplayTree::join) and the keys split off by
/// [`split`](crate::SplayTree::split) get new positions. Using an invalidated position is a
/// logic error that may panic or refer to an unrelated element.
///
/// Positions compare equal when they refer to the same element. [`Position::END`] refers to the
/// sentinel that sits one past the last element and one before the first.
///
/// # Examples
///
/// ```
/// use splay_set::{Position, SplayTree};
///
/// let mut tree = SplayTree::new();
/// tree.extend([10, 20, 30]);
///
/// let pos = tree.find(&20);
/// assert_eq!(tree.get(pos), Some(&20));
/// assert_eq!(tree.get(tree.next_position(pos)), Some(&30));
/// assert_eq!(tree.find(&25), Position::END);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position(pub(crate) Option<Handle>);

impl Position {
    /// The end position.
    pub const END: Position = Position(None);

    /// Returns `true` if this is the end position.
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.0.is_none()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::END
    }
}
