//! Provides the position-based binary tree.
//!
//! Core data structures:
//! * [`LinkedBinaryTree<E>`] - mutable binary tree using the arena pattern,
//!   generic over the payload `E` stored in each node
//! * [Position] as handle used to address nodes in public operations
//! * [NodeIndex] as type used to index nodes in the arena

use crate::error::{Side, TreeError};
use crate::model::node::Node;
use crate::model::position::{NodeIndex, Position, TreeId};

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A mutable binary tree represented using the arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector and linked by [NodeIndex];
/// callers address them through [Position] handles, which carry the
/// identity of the tree that issued them.
///
/// # Structure
/// - Each node has at most a left and a right child; parents are stored as
///   index, so there are no reference cycles.
/// - Removed nodes leave an empty arena slot behind. Slots are never reused,
///   so a handle of a removed node stays invalid.
/// - [size](LinkedBinaryTree::size) counts live nodes and is maintained on
///   every edit.
///
/// # Node lifecycle
/// A node is created by [add_root](LinkedBinaryTree::add_root),
/// [add_left](LinkedBinaryTree::add_left),
/// [add_right](LinkedBinaryTree::add_right) or a bulk construction, and is
/// gone for good after [remove](LinkedBinaryTree::remove). Nodes moved by
/// [attach](LinkedBinaryTree::attach) live on in the receiving tree, while
/// all handles of the donor tree become invalid.
///
/// # Example
/// ```
/// use huffwick::model::LinkedBinaryTree;
///
/// let mut tree = LinkedBinaryTree::new();
/// let root = tree.add_root(12)?;
/// let left = tree.add_left(root, 25)?;
/// tree.add_right(root, 31)?;
/// tree.add_left(left, 58)?;
///
/// assert_eq!(tree.size(), 4);
/// assert_eq!(tree.depth(left)?, 1);
/// assert_eq!(tree.height(root)?, 2);
/// # Ok::<(), huffwick::error::TreeError>(())
/// ```
#[derive(Debug)]
pub struct LinkedBinaryTree<E> {
    /// Identity handed out with every position
    id: TreeId,

    /// Nodes of this tree (arena pattern); `None` marks a removed node
    nodes: Vec<Option<Node<E>>>,

    /// Index of the root, `None` if the tree is empty
    root: Option<NodeIndex>,

    /// Number of live nodes
    size: usize,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<E> LinkedBinaryTree<E> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with arena capacity for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedBinaryTree {
            id: TreeId::fresh(),
            nodes: Vec::with_capacity(capacity),
            root: None,
            size: 0,
        }
    }

    /// Returns the identity of this tree instance.
    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Returns the number of nodes in this tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if this tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the position of the root, or `None` if the tree is empty.
    pub fn root(&self) -> Option<Position> {
        self.root.map(|index| self.position(index))
    }

    /// Returns a reference to the element stored at `p`.
    ///
    /// # Errors
    /// [TreeError::InvalidPosition] if `p` is removed or belongs to another tree.
    pub fn element(&self, p: Position) -> Result<&E, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node(index).element())
    }

    /// Returns a mutable reference to the element stored at `p`.
    ///
    /// # Errors
    /// [TreeError::InvalidPosition] if `p` is removed or belongs to another tree.
    pub fn element_mut(&mut self, p: Position) -> Result<&mut E, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node_mut(index).element_mut())
    }

    /// Returns the position of the parent of `p`, or `None` if `p` is the root.
    pub fn parent(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node(index).parent().map(|i| self.position(i)))
    }

    /// Returns the position of the left child of `p`, if any.
    pub fn left(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node(index).left().map(|i| self.position(i)))
    }

    /// Returns the position of the right child of `p`, if any.
    pub fn right(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node(index).right().map(|i| self.position(i)))
    }

    /// Returns the positions of the children of `p`, left before right.
    pub fn children(&self, p: Position) -> Result<Vec<Position>, TreeError> {
        let index = self.validate(p)?;
        let node = self.node(index);
        Ok([node.left(), node.right()]
            .into_iter()
            .flatten()
            .map(|i| self.position(i))
            .collect())
    }

    /// Returns the position of the other child of the parent of `p`, if any.
    pub fn sibling(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let index = self.validate(p)?;
        let Some(parent) = self.node(index).parent() else {
            return Ok(None);
        };

        let parent = self.node(parent);
        let sibling = if parent.left() == Some(index) {
            parent.right()
        } else {
            parent.left()
        };
        Ok(sibling.map(|i| self.position(i)))
    }

    /// Returns the number of children of `p` (0, 1 or 2).
    pub fn num_children(&self, p: Position) -> Result<usize, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node(index).num_children())
    }

    /// Returns `true` if `p` has at least one child.
    pub fn is_internal(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.num_children(p)? > 0)
    }

    /// Returns `true` if `p` has no children.
    pub fn is_leaf(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.num_children(p)? == 0)
    }

    /// Returns `true` if `p` is the root.
    pub fn is_root(&self, p: Position) -> Result<bool, TreeError> {
        let index = self.validate(p)?;
        Ok(self.root == Some(index))
    }

    /// Returns the number of ancestors of `p`, i.e. 0 for the root.
    pub fn depth(&self, p: Position) -> Result<usize, TreeError> {
        let mut index = self.validate(p)?;
        let mut depth = 0;
        while let Some(parent) = self.node(index).parent() {
            depth += 1;
            index = parent;
        }
        Ok(depth)
    }

    /// Returns the height of the subtree rooted at `p`, i.e. the number of
    /// edges on a longest downward path from `p` to a leaf (0 for a leaf).
    pub fn height(&self, p: Position) -> Result<usize, TreeError> {
        let index = self.validate(p)?;

        let mut height = 0;
        let mut stack = vec![(index, 0)];
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(index);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        Ok(height)
    }
}

// ============================================================================
// Structural edits (pub)
// ============================================================================
impl<E> LinkedBinaryTree<E> {
    /// Places `element` at the root of an empty tree and returns its position.
    ///
    /// # Errors
    /// [TreeError::TreeNotEmpty] if the tree already has a root.
    pub fn add_root(&mut self, element: E) -> Result<Position, TreeError> {
        if !self.is_empty() {
            return Err(TreeError::TreeNotEmpty);
        }

        let index = self.push_root(element);
        Ok(self.position(index))
    }

    /// Creates a new left child of `p` storing `element` and returns its position.
    ///
    /// # Errors
    /// * [TreeError::InvalidPosition] if `p` is removed or belongs to another tree
    /// * [TreeError::ChildAlreadyExists] if `p` already has a left child
    pub fn add_left(&mut self, p: Position, element: E) -> Result<Position, TreeError> {
        self.add_child(p, Side::Left, element)
    }

    /// Creates a new right child of `p` storing `element` and returns its position.
    ///
    /// # Errors
    /// * [TreeError::InvalidPosition] if `p` is removed or belongs to another tree
    /// * [TreeError::ChildAlreadyExists] if `p` already has a right child
    pub fn add_right(&mut self, p: Position, element: E) -> Result<Position, TreeError> {
        self.add_child(p, Side::Right, element)
    }

    /// Replaces the element at `p` with `element`, returning the replaced element.
    pub fn set(&mut self, p: Position, element: E) -> Result<E, TreeError> {
        let index = self.validate(p)?;
        Ok(self.node_mut(index).replace_element(element))
    }

    /// Removes the node at `p`, promoting its only child (if any) into its
    /// place, and returns the removed element.
    ///
    /// Afterwards `p` is invalid for every operation.
    ///
    /// # Errors
    /// * [TreeError::InvalidPosition] if `p` is removed or belongs to another tree
    /// * [TreeError::TwoChildren] if `p` has two children
    pub fn remove(&mut self, p: Position) -> Result<E, TreeError> {
        let index = self.validate(p)?;
        let node = self.node(index);
        if node.num_children() == 2 {
            return Err(TreeError::TwoChildren);
        }

        let child = node.left().or(node.right());
        let parent = node.parent();

        if let Some(child) = child {
            self.node_mut(child).set_parent(parent);
        }
        match parent {
            None => self.root = child,
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left() == Some(index) {
                    parent.set_left(child);
                } else {
                    parent.set_right(child);
                }
            }
        }

        let removed = self.nodes[index]
            .take()
            .ok_or(TreeError::InvalidPosition("position has been removed"))?;
        self.size -= 1;
        Ok(removed.into_element())
    }

    /// Attaches the trees `left` and `right` as left and right subtree of the
    /// leaf `p`. Both trees are left empty; their nodes now belong to this tree
    /// and all positions previously issued by them are invalid.
    ///
    /// An empty `left` or `right` leaves the respective slot empty.
    ///
    /// # Errors
    /// [TreeError::InvalidPosition] if `p` is removed, belongs to another tree,
    /// or is not a leaf.
    pub fn attach(&mut self, p: Position, left: &mut Self, right: &mut Self) -> Result<(), TreeError> {
        let index = self.validate(p)?;
        if !self.node(index).is_leaf() {
            return Err(TreeError::InvalidPosition("position is not a leaf"));
        }

        let left_root = self.graft(left, index);
        let right_root = self.graft(right, index);

        let node = self.node_mut(index);
        node.set_left(left_root);
        node.set_right(right_root);
        Ok(())
    }

    /// Builds this tree in level order from `elements`.
    ///
    /// Element `i` becomes the left child (odd `i`) or right child (even `i`)
    /// of element `(i - 1) / 2`, i.e. the children of `i` are at `2i + 1` and
    /// `2i + 2`. A `None` means "no node here"; elements whose parent slot is
    /// empty are dropped as well.
    ///
    /// # Returns
    /// The position of the root, or `None` if the first slot is empty.
    ///
    /// # Errors
    /// [TreeError::TreeNotEmpty] if the tree already has nodes.
    ///
    /// # Example
    /// ```
    /// use huffwick::model::LinkedBinaryTree;
    ///
    /// let mut tree = LinkedBinaryTree::new();
    /// tree.create_level_order(vec![Some('A'), Some('B'), None, Some('C'), Some('D')])?;
    ///
    /// let preorder: Vec<char> = tree.preorder().map(|p| tree[p]).collect();
    /// assert_eq!(preorder, vec!['A', 'B', 'C', 'D']);
    /// # Ok::<(), huffwick::error::TreeError>(())
    /// ```
    pub fn create_level_order<I>(&mut self, elements: I) -> Result<Option<Position>, TreeError>
    where
        I: IntoIterator<Item = Option<E>>,
    {
        if !self.is_empty() {
            return Err(TreeError::TreeNotEmpty);
        }

        // Arena index of the node created for each slot, if any
        let mut slots: Vec<Option<NodeIndex>> = Vec::new();
        for (i, element) in elements.into_iter().enumerate() {
            let index = match element {
                Some(element) if i == 0 => Some(self.push_root(element)),
                Some(element) => slots[(i - 1) / 2].map(|parent| {
                    let side = if i % 2 == 1 { Side::Left } else { Side::Right };
                    self.push_child(parent, side, element)
                }),
                None => None,
            };
            slots.push(index);
        }

        Ok(self.root())
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl<E> LinkedBinaryTree<E> {
    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - Root is set exactly if the tree is non-empty, and has no parent
    /// - All child indices point to live nodes that name this node as parent
    /// - Every live node is reachable from the root and
    ///   [size](LinkedBinaryTree::size) matches their count
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let live = self.nodes.iter().filter(|slot| slot.is_some()).count();
        if live != self.size {
            return false;
        }

        let Some(root) = self.root else {
            return self.size == 0;
        };
        match self.live_node(root) {
            Some(node) if node.parent().is_none() => {}
            _ => return false,
        }

        let mut reached = 0;
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            reached += 1;
            if reached > self.size {
                // Cycle or shared child
                return false;
            }

            let Some(node) = self.live_node(index) else {
                return false;
            };
            for child in [node.left(), node.right()].into_iter().flatten() {
                match self.live_node(child) {
                    Some(child_node) if child_node.parent() == Some(index) => stack.push(child),
                    _ => return false,
                }
            }
            if node.left().is_some() && node.left() == node.right() {
                return false;
            }
        }

        reached == self.size
    }
}

// ============================================================================
// Arena helpers (crate)
// ============================================================================
impl<E> LinkedBinaryTree<E> {
    /// Returns the handle for arena index `index` of this tree.
    pub(crate) fn position(&self, index: NodeIndex) -> Position {
        Position::new(self.id, index)
    }

    /// Resolves `p` to the arena index of a live node of this tree.
    pub(crate) fn validate(&self, p: Position) -> Result<NodeIndex, TreeError> {
        if p.tree_id() != self.id {
            return Err(TreeError::InvalidPosition("position belongs to another tree"));
        }

        match self.nodes.get(p.index()) {
            Some(Some(_)) => Ok(p.index()),
            Some(None) => Err(TreeError::InvalidPosition("position has been removed")),
            None => Err(TreeError::InvalidPosition("position is out of bounds")),
        }
    }

    /// Returns the live node at `index`.
    ///
    /// # Panics
    /// Panics if `index` does not refer to a live node; only called with
    /// validated indices or indices read from links of live nodes.
    pub(crate) fn node(&self, index: NodeIndex) -> &Node<E> {
        match self.live_node(index) {
            Some(node) => node,
            None => panic!("node {index} is not part of the tree"),
        }
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node<E> {
        match self.nodes.get_mut(index).and_then(Option::as_mut) {
            Some(node) => node,
            None => panic!("node {index} is not part of the tree"),
        }
    }

    fn live_node(&self, index: NodeIndex) -> Option<&Node<E>> {
        self.nodes.get(index).and_then(Option::as_ref)
    }

    fn push_node(&mut self, node: Node<E>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Some(node));
        self.size += 1;
        index
    }

    /// Creates the root of an empty tree.
    pub(crate) fn push_root(&mut self, element: E) -> NodeIndex {
        debug_assert!(self.root.is_none());
        let index = self.push_node(Node::new(element, None));
        self.root = Some(index);
        index
    }

    /// Creates a child of `parent` in the free slot `side`.
    pub(crate) fn push_child(&mut self, parent: NodeIndex, side: Side, element: E) -> NodeIndex {
        let child = self.push_node(Node::new(element, Some(parent)));
        let parent = self.node_mut(parent);
        match side {
            Side::Left => parent.set_left(Some(child)),
            Side::Right => parent.set_right(Some(child)),
        }
        child
    }

    fn add_child(&mut self, p: Position, side: Side, element: E) -> Result<Position, TreeError> {
        let index = self.validate(p)?;
        let node = self.node(index);
        let occupied = match side {
            Side::Left => node.left(),
            Side::Right => node.right(),
        };
        if occupied.is_some() {
            return Err(TreeError::ChildAlreadyExists(side));
        }

        let child = self.push_child(index, side, element);
        Ok(self.position(child))
    }

    /// Moves all live nodes of `other` into this arena, hanging its root below
    /// `parent`, and empties `other`. Returns the new index of the moved root.
    fn graft(&mut self, other: &mut Self, parent: NodeIndex) -> Option<NodeIndex> {
        let Some(other_root) = other.root else {
            other.reset();
            return None;
        };

        // New index of each live node; entries for removed slots are never read
        let mut new_index = vec![0; other.nodes.len()];
        let mut next = self.nodes.len();
        for (old, slot) in other.nodes.iter().enumerate() {
            if slot.is_some() {
                new_index[old] = next;
                next += 1;
            }
        }

        for mut node in std::mem::take(&mut other.nodes).into_iter().flatten() {
            node.remap(|i| new_index[i]);
            self.nodes.push(Some(node));
        }
        self.size += other.size;

        let root = new_index[other_root];
        self.node_mut(root).set_parent(Some(parent));
        other.reset();
        Some(root)
    }

    /// Empties this tree and gives it a new identity, invalidating old positions.
    fn reset(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.size = 0;
        self.id = TreeId::fresh();
    }
}

impl<E> Default for LinkedBinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::ops::Index<Position> for LinkedBinaryTree<E> {
    type Output = E;

    /// # Panics
    /// Panics if `p` is not a valid position of this tree.
    fn index(&self, p: Position) -> &Self::Output {
        match self.element(p) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<E> std::ops::IndexMut<Position> for LinkedBinaryTree<E> {
    fn index_mut(&mut self, p: Position) -> &mut Self::Output {
        match self.element_mut(p) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}
