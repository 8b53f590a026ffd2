//! Payload stored in the nodes of a code tree.

use std::fmt;

/// Element of a Huffman code tree node.
///
/// Leaves carry a real symbol; internal nodes are merge points without a
/// symbol, whose frequency is the sum of their children's frequencies.
/// Whether a node is a leaf is a property of its position in the tree
/// (no children), which for code trees coincides with carrying a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanNode {
    symbol: Option<char>,
    frequency: u64,
}

impl HuffmanNode {
    /// Creates the payload of a leaf for `symbol`.
    pub fn leaf(symbol: char, frequency: u64) -> Self {
        HuffmanNode {
            symbol: Some(symbol),
            frequency,
        }
    }

    /// Creates the payload of a merge point with the combined `frequency`.
    pub fn merged(frequency: u64) -> Self {
        HuffmanNode {
            symbol: None,
            frequency,
        }
    }

    /// Returns the symbol, or `None` for a merge point.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Returns the (combined) frequency.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }
}

impl fmt::Display for HuffmanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(symbol) => write!(f, "{symbol:?} ({})", self.frequency),
            None => write!(f, "* ({})", self.frequency),
        }
    }
}
