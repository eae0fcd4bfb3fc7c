//! Ordered collections backed by a left-leaning red-black binary search tree.

mod entry;
pub mod red_black_tree;
