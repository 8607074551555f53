mod adjust;
mod arena;
mod handle;
mod join_split;
mod node;
mod order_statistic;
mod raw_tree;
mod size;

pub(crate) use adjust::{Splay, Unbalanced};
pub(crate) use handle::Handle;
pub(crate) use node::Link;
pub(crate) use raw_tree::{Descent, RawTree};
pub(crate) use size::Size;
