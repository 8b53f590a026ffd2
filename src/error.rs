//! Error types for the tree, the priority queue and code construction.
//!
//! Each component has its own error enum; [HuffmanError] wraps the other two
//! so that code construction can propagate them with `?`.

use thiserror::Error;

// =#========================================================================#=
// TREE ERROR
// =#========================================================================#=
/// Side of a child slot, used to report which slot an edit collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left child slot
    Left,
    /// Right child slot
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Precondition violations of [LinkedBinaryTree](crate::model::LinkedBinaryTree) operations.
///
/// All variants are fatal to the offending call only; the tree is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Handle is removed, belongs to another tree, or does not fit the operation.
    #[error("invalid position: {0}")]
    InvalidPosition(&'static str),

    /// `add_root` or a bulk construction was called on a tree that already has a root.
    #[error("tree is not empty")]
    TreeNotEmpty,

    /// The requested child slot is already occupied.
    #[error("position already has a {0} child")]
    ChildAlreadyExists(Side),

    /// `remove` on a position with two children, where the splice target is ambiguous.
    #[error("position has two children")]
    TwoChildren,
}

// =#========================================================================#=
// QUEUE ERROR
// =#========================================================================#=
/// Contract violations of [HeapPriorityQueue](crate::queue::HeapPriorityQueue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Extraction from a queue without entries.
    #[error("priority queue is empty")]
    EmptyQueue,
}

// =#========================================================================#=
// HUFFMAN ERROR
// =#========================================================================#=
/// Errors of code construction, encoding, decoding and metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// No symbols to build a code for.
    #[error("alphabet is empty")]
    EmptyAlphabet,

    /// A symbol to encode has no codeword in the table.
    #[error("symbol {0:?} has no codeword")]
    MissingCodeword(char),

    /// Bit sequence leads off the code tree (only possible for a single-leaf tree
    /// decoded with a bit other than the synthetic one).
    #[error("bit sequence does not match any codeword at bit {position}")]
    InvalidBitSequence {
        /// Index of the offending bit
        position: usize,
    },

    /// Bit sequence ended in the middle of a codeword.
    #[error("bit sequence ends inside a codeword")]
    IncompleteCodeword,

    /// Combined frequency of a merge exceeds `u64::MAX`.
    #[error("frequency overflow when merging {0} and {1}")]
    FrequencyOverflow(u64, u64),

    /// Code tree has a leaf without a symbol.
    #[error("code tree has a leaf without symbol")]
    MalformedCodeTree,

    /// Underlying tree operation failed.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Underlying queue operation failed.
    #[error(transparent)]
    Queue(#[from] QueueError),
}
