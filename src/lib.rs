//! Threaded splay trees for Rust.
//!
//! This crate provides [`SplayTree`], an ordered set of unique keys that moves every key it
//! touches to the root, and [`SearchTree`], the plain binary search tree it is built on. Both
//! store their nodes in an arena and replace empty child slots with *threads* to the in-order
//! neighbours, so walking the keys needs neither parent chasing nor a traversal stack.
//!
//! On top of the usual set operations the splay tree offers:
//!
//! - [`join`](SplayTree::join) and [`split`](SplayTree::split) of disjoint key ranges
//! - Order-statistic queries ([`n_less_than`](SplayTree::n_less_than),
//!   [`get_by_rank`](SplayTree::get_by_rank), indexing by [`Rank`], ...) when the tree caches
//!   subtree sizes, see [`AugmentedSplayTree`]
//! - Stable [`Position`]s that survive splaying
//!
//! # Example
//!
//! ```
//! use splay_set::{AugmentedSplayTree, Rank};
//!
//! let mut tree: AugmentedSplayTree<_> = AugmentedSplayTree::from([5, 2, 8, 1, 9]);
//!
//! // Lookups splay: the key just found is now the root.
//! assert!(tree.contains(&8));
//! assert_eq!(tree.root(), Some(&8));
//!
//! // Rank queries read the cached subtree sizes.
//! assert_eq!(tree.n_less_than(&8), 3);
//! assert_eq!(tree[Rank(0)], 1);
//!
//! // Split off everything after 5, then put it back.
//! let mut high = tree.split(&5).unwrap();
//! assert_eq!(high.iter().copied().collect::<Vec<_>>(), [8, 9]);
//! tree.join(&mut high).unwrap();
//! assert_eq!(tree.len(), 5);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Pluggable order** - Any [`Compare`] implementation, with [`Natural`], [`Reversed`] and
//!   closure-based [`FnCompare`] provided
//! - **Pluggable augmentation** - [`Plain`] trees pay nothing; [`SubtreeSize`] enables ranks
//! - **No unsafe code** - Nodes are addressed by index into an arena with a free list
//!
//! # Implementation
//!
//! A sentinel slot anchors the root and caches the leftmost and rightmost nodes, making
//! [`first`](SplayTree::first), [`last`](SplayTree::last) and [`begin`](SplayTree::begin) O(1).
//! All structural edits go through a handful of link primitives that keep threads, parent
//! back-references and cached augmentation consistent after every single step, rotations
//! included. The splay tree and the search tree share one set of algorithms and differ only in
//! the hooks run around lookups, insertions and removals.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

#[macro_use]
mod set_traits;

mod augment;
mod compare;
mod dump;
mod error;
mod iter;
mod order_statistic;
mod position;
mod raw;

pub mod search_tree;
pub mod splay_tree;

pub use augment::{Augment, Plain, SubtreeSize};
pub use compare::{Compare, FnCompare, Natural, Reversed};
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, Range};
pub use order_statistic::Rank;
pub use position::Position;
pub use search_tree::{AugmentedSearchTree, SearchTree};
pub use splay_tree::{AugmentedSplayTree, SplayTree};
