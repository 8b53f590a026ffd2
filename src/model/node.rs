//! Node module for the arena binary tree.

use crate::model::position::NodeIndex;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A node of a [LinkedBinaryTree](crate::model::LinkedBinaryTree) arena.
///
/// Child links are owning in the sense that a node is reachable only
/// through its parent (or as root); the `parent` link is a plain index used
/// for navigation and splicing.
///
/// # Invariants
/// - `parent` is `None` only for the root
/// - If `parent` is `Some(p)`, then node `p` has this node as exactly one of
///   its `left` or `right` child
/// - Removed nodes are no longer stored (their arena slot is empty)
#[derive(Debug, Clone, PartialEq)]
pub struct Node<E> {
    /// Payload of this node
    element: E,
    /// Index of parent, `None` for the root
    parent: Option<NodeIndex>,
    /// Index of left child
    left: Option<NodeIndex>,
    /// Index of right child
    right: Option<NodeIndex>,
}

impl<E> Node<E> {
    /// Creates a new node without children.
    ///
    /// # Arguments
    /// * `element` - Payload of the node
    /// * `parent` - Index of the parent, `None` for a root
    pub(crate) fn new(element: E, parent: Option<NodeIndex>) -> Self {
        Node {
            element,
            parent,
            left: None,
            right: None,
        }
    }

    /// Returns a reference to the payload.
    pub fn element(&self) -> &E {
        &self.element
    }

    pub(crate) fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Replaces the payload, returning the old one.
    pub(crate) fn replace_element(&mut self, element: E) -> E {
        std::mem::replace(&mut self.element, element)
    }

    /// Consumes the node, returning its payload.
    pub(crate) fn into_element(self) -> E {
        self.element
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns the index of the left child, if any.
    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Returns the index of the right child, if any.
    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Returns the number of children (0, 1 or 2).
    pub fn num_children(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeIndex>) {
        self.parent = parent;
    }

    pub(crate) fn set_left(&mut self, left: Option<NodeIndex>) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Option<NodeIndex>) {
        self.right = right;
    }

    /// Applies `f` to every index this node stores; used when moving a node
    /// into another arena.
    pub(crate) fn remap(&mut self, f: impl Fn(NodeIndex) -> NodeIndex) {
        self.parent = self.parent.map(&f);
        self.left = self.left.map(&f);
        self.right = self.right.map(&f);
    }
}
