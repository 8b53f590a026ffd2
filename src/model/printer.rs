//! Text rendering of a [LinkedBinaryTree].

use crate::model::position::NodeIndex;
use crate::model::tree::LinkedBinaryTree;
use std::fmt;

/// Renders the tree top-down, one node per line, marking each child as `L` or `R`.
///
/// # Example Output
/// ```text
/// 12
/// ├─ L: 25
/// │  ├─ L: 58
/// │  └─ R: 36
/// └─ R: 31
/// ```
impl<E: fmt::Display> fmt::Display for LinkedBinaryTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            None => writeln!(f, "(empty tree)"),
            Some(root) => {
                writeln!(f, "{}", self.node(root.index()).element())?;
                self.fmt_children(f, root.index(), "")
            }
        }
    }
}

impl<E: fmt::Display> LinkedBinaryTree<E> {
    /// Helper function to recursively render the children of a node.
    fn fmt_children(&self, f: &mut fmt::Formatter<'_>, index: NodeIndex, prefix: &str) -> fmt::Result {
        let node = self.node(index);
        let children: Vec<(&str, NodeIndex)> = [("L", node.left()), ("R", node.right())]
            .into_iter()
            .filter_map(|(side, child)| child.map(|c| (side, c)))
            .collect();

        for (i, &(side, child)) in children.iter().enumerate() {
            let is_last = i + 1 == children.len();
            let connector = if is_last { "└─ " } else { "├─ " };
            writeln!(f, "{prefix}{connector}{side}: {}", self.node(child).element())?;

            let new_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
            self.fmt_children(f, child, &new_prefix)?;
        }

        Ok(())
    }
}
