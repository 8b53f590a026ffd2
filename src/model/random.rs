//! Random tree shapes, mainly for exercising traversals and edits.

use crate::error::Side;
use crate::model::position::NodeIndex;
use crate::model::tree::LinkedBinaryTree;
use rand::Rng;

impl LinkedBinaryTree<usize> {
    /// Builds a tree with `n` nodes and a uniformly drawn shape per subtree,
    /// storing the values `1..=n` such that an in-order traversal yields
    /// them in ascending order (a binary search tree over `1..=n`).
    ///
    /// # Arguments
    /// * `n` - number of nodes; `0` yields an empty tree
    /// * `rng` - source of randomness
    ///
    /// # Example
    /// ```
    /// use huffwick::model::LinkedBinaryTree;
    ///
    /// let tree = LinkedBinaryTree::<usize>::make_random(10, &mut rand::thread_rng());
    /// let values: Vec<usize> = tree.inorder().map(|p| tree[p]).collect();
    /// assert_eq!(values, (1..=10).collect::<Vec<_>>());
    /// ```
    pub fn make_random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut tree = LinkedBinaryTree::with_capacity(n);

        // Value ranges [first, end) still to place, with the slot they hang from
        let mut pending: Vec<(Option<(NodeIndex, Side)>, usize, usize)> = vec![(None, 1, n + 1)];
        while let Some((slot, first, end)) = pending.pop() {
            if first >= end {
                continue;
            }

            let value = rng.gen_range(first..end);
            let index = match slot {
                None => tree.push_root(value),
                Some((parent, side)) => tree.push_child(parent, side, value),
            };

            pending.push((Some((index, Side::Right)), value + 1, end));
            pending.push((Some((index, Side::Left)), first, value));
        }

        tree
    }
}
