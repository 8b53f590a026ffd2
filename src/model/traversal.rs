//! Traversal iterators over the positions of a [LinkedBinaryTree].
//!
//! All iterators borrow the tree immutably, so the tree cannot change while
//! one is alive. Each call to a traversal method starts a fresh iteration;
//! on an unchanged tree it yields the same sequence every time.

use crate::model::position::{NodeIndex, Position};
use crate::model::tree::LinkedBinaryTree;
use std::collections::VecDeque;

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl<E> LinkedBinaryTree<E> {
    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// # Example
    /// ```
    /// use huffwick::model::LinkedBinaryTree;
    ///
    /// let mut tree = LinkedBinaryTree::new();
    /// tree.create_level_order(vec![Some(1), Some(2), Some(3)])?;
    ///
    /// let elements: Vec<_> = tree.preorder().map(|p| tree[p]).collect();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// # Ok::<(), huffwick::error::TreeError>(())
    /// ```
    pub fn preorder(&self) -> PreOrderIter<'_, E> {
        PreOrderIter::new(self)
    }

    /// Returns an iterator over the tree in in-order (left subtree, node, right subtree).
    pub fn inorder(&self) -> InOrderIter<'_, E> {
        InOrderIter::new(self)
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// # Example
    /// ```
    /// use huffwick::model::LinkedBinaryTree;
    ///
    /// let mut tree = LinkedBinaryTree::new();
    /// tree.create_level_order(vec![Some(1), Some(2), Some(3)])?;
    ///
    /// let elements: Vec<_> = tree.postorder().map(|p| tree[p]).collect();
    /// assert_eq!(elements, vec![2, 3, 1]);
    /// # Ok::<(), huffwick::error::TreeError>(())
    /// ```
    pub fn postorder(&self) -> PostOrderIter<'_, E> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in level order (breadth first,
    /// left to right within a level).
    pub fn level_order(&self) -> LevelOrderIter<'_, E> {
        LevelOrderIter::new(self)
    }

    /// Returns an iterator over all positions of the tree (in-order).
    pub fn positions(&self) -> InOrderIter<'_, E> {
        self.inorder()
    }

    /// Returns an iterator over all elements of the tree, in the order of
    /// [positions](LinkedBinaryTree::positions).
    pub fn elements(&self) -> impl Iterator<Item = &E> + '_ {
        self.positions().map(move |p| self.node(p.index()).element())
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    stack: Vec<NodeIndex>,
}

impl<'a, E> PreOrderIter<'a, E> {
    fn new(tree: &'a LinkedBinaryTree<E>) -> Self {
        let stack = tree.root().map(|p| p.index()).into_iter().collect();
        PreOrderIter { tree, stack }
    }
}

impl<'a, E> Iterator for PreOrderIter<'a, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = self.tree.node(index);

        // Push children onto stack (right first, so left is processed first)
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(self.tree.position(index))
    }
}

/// Iterator for in-order traversal (left subtree, node, right subtree).
///
/// Keeps the path of nodes whose left subtree is still being visited.
pub struct InOrderIter<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    stack: Vec<NodeIndex>,
}

impl<'a, E> InOrderIter<'a, E> {
    fn new(tree: &'a LinkedBinaryTree<E>) -> Self {
        let mut iter = InOrderIter {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root().map(|p| p.index()));
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeIndex>) {
        while let Some(index) = current {
            self.stack.push(index);
            current = self.tree.node(index).left();
        }
    }
}

impl<'a, E> Iterator for InOrderIter<'a, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        self.push_left_spine(self.tree.node(index).right());
        Some(self.tree.position(index))
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited after all its descendants have been visited.
pub struct PostOrderIter<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    stack: Vec<(NodeIndex, bool)>, // (index, children_visited)
}

impl<'a, E> PostOrderIter<'a, E> {
    fn new(tree: &'a LinkedBinaryTree<E>) -> Self {
        let stack = tree.root().map(|p| (p.index(), false)).into_iter().collect();
        PostOrderIter { tree, stack }
    }
}

impl<'a, E> Iterator for PostOrderIter<'a, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = self.tree.node(index);

            if children_visited || node.is_leaf() {
                return Some(self.tree.position(index));
            }

            self.stack.push((index, true));
            // Right first, so left is processed first
            self.stack.extend(node.right().map(|i| (i, false)));
            self.stack.extend(node.left().map(|i| (i, false)));
        }
        None
    }
}

/// Iterator for level-order traversal (breadth first).
pub struct LevelOrderIter<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    queue: VecDeque<NodeIndex>,
}

impl<'a, E> LevelOrderIter<'a, E> {
    fn new(tree: &'a LinkedBinaryTree<E>) -> Self {
        let queue = tree.root().map(|p| p.index()).into_iter().collect();
        LevelOrderIter { tree, queue }
    }
}

impl<'a, E> Iterator for LevelOrderIter<'a, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let node = self.tree.node(index);
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(self.tree.position(index))
    }
}
