//! Data model for position-based binary trees.
//!
//! # Tree representation
//! Trees are represented by [LinkedBinaryTree], which uses the arena pattern
//! to store [Node]s. Nodes link to their children and their parent by
//! [NodeIndex]; callers never see indices directly but work with [Position]
//! handles, which also carry the identity of the issuing tree.
//!
//! # Operations
//! - Navigation: `root`, `parent`, `left`, `right`, `children`, `sibling`
//! - Edits: `add_root`, `add_left`, `add_right`, `set`, `remove`, `attach`
//! - Bulk construction: `create_level_order`, `make_random`
//! - Traversals: `preorder`, `inorder`, `postorder`, `level_order`
//! - Derived queries: `is_leaf`, `is_internal`, `is_root`, `depth`,
//!   `height`, `num_children`
//!
//! Operations taking a [Position] fail with
//! [TreeError::InvalidPosition](crate::error::TreeError::InvalidPosition)
//! for handles of removed nodes or of other trees.

pub mod node;
pub mod position;
pub mod printer;
pub mod random;
pub mod traversal;
pub mod tree;

pub use crate::error::Side;
pub use node::Node;
pub use position::{NodeIndex, Position, TreeId};
pub use traversal::{InOrderIter, LevelOrderIter, PostOrderIter, PreOrderIter};
pub use tree::LinkedBinaryTree;
