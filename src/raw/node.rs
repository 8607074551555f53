use super::handle::Handle;
use crate::augment::Augment;

/// One side of a node.
///
/// A side either owns a real child or, when the subtree on that side is empty, holds a thread to
/// the node's in-order neighbour on that side. `Thread(None)` threads to the sentinel: the
/// leftmost node's left side and the rightmost node's right side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Link {
    Child(Handle),
    Thread(Option<Handle>),
}

impl Link {
    /// Returns the child handle, or `None` if this side is a thread.
    #[inline]
    pub(crate) const fn child(self) -> Option<Handle> {
        match self {
            Link::Child(child) => Some(child),
            Link::Thread(_) => None,
        }
    }
}

/// A key together with its links.
///
/// Links are only ever written through [`RawTree`](super::RawTree), which keeps the thread
/// targets, the parent back-reference and the augmentation cache consistent.
pub(crate) struct Node<K, A> {
    key: K,
    pub(super) left: Link,
    pub(super) right: Link,
    // `None` means the parent is the sentinel, i.e. this node is the root of its tree.
    pub(super) parent: Option<Handle>,
    pub(super) cache: A,
}

impl<K, A: Augment> Node<K, A> {
    /// Creates a detached node whose sides thread to `prev` and `next`.
    pub(crate) fn new(key: K, prev: Option<Handle>, next: Option<Handle>) -> Self {
        Self {
            key,
            left: Link::Thread(prev),
            right: Link::Thread(next),
            parent: None,
            cache: A::combine(None, None),
        }
    }
}

impl<K, A> Node<K, A> {
    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) fn left(&self) -> Link {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Link {
        self.right
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn cache(&self) -> &A {
        &self.cache
    }
}
