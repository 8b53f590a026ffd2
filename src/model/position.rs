//! Position handles addressing single nodes of a [LinkedBinaryTree](crate::model::LinkedBinaryTree).

use std::sync::atomic::{AtomicU64, Ordering};

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

/// Source of tree identities; every tree instance draws a fresh one.
static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a tree instance, carried by every [Position] it hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(u64);

impl TreeId {
    /// Returns an identity not used by any other tree in this process.
    pub(crate) fn fresh() -> Self {
        TreeId(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// =#========================================================================#=
// POSITION
// =#========================================================================#=
/// Opaque handle to a single node of a tree.
///
/// A position is only meaningful for the tree that created it: it carries
/// the [TreeId] of its tree and the arena index of its node. Every tree
/// operation checks both, so a position of another tree, or of a node that
/// has since been removed, fails with
/// [TreeError::InvalidPosition](crate::error::TreeError::InvalidPosition)
/// instead of silently addressing a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    tree: TreeId,
    index: NodeIndex,
}

impl Position {
    pub(crate) fn new(tree: TreeId, index: NodeIndex) -> Self {
        Position { tree, index }
    }

    /// Returns the identity of the tree this position belongs to.
    pub fn tree_id(&self) -> TreeId {
        self.tree
    }

    /// Returns the arena index of the addressed node.
    ///
    /// Indices are stable for the lifetime of the node, but not across
    /// [attach](crate::model::LinkedBinaryTree::attach), which moves nodes
    /// into another arena.
    pub fn index(&self) -> NodeIndex {
        self.index
    }
}
