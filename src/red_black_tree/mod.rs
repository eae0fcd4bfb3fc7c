//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! The tree is a left-leaning red-black tree: every red link leans left, so the tree is
//! isomorphic to a 2-3 tree and its height never exceeds `2 * log2(n + 1)`.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::{
    RedBlackMap, RedBlackMapIntoIter, RedBlackMapIter, RedBlackMapIterMut, RedBlackMapKeys,
    RedBlackMapLevelOrder, RedBlackMapValues,
};
pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
use std::error;
use std::fmt;
use std::result;

/// Errors returned by structural queries on a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The operation requires at least one element but the tree is empty.
    Underflow,
    /// The rank passed to `select` is not in `[0, len)`.
    InvalidRank { rank: usize, len: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Underflow => write!(f, "red black tree underflow"),
            Error::InvalidRank { rank, len } => {
                write!(f, "rank {} is out of bounds for a tree of length {}", rank, len)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
