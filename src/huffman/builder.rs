//! Greedy construction of Huffman code trees.

use crate::error::HuffmanError;
use crate::huffman::code::{CodeTable, Codeword, HuffmanCode};
use crate::huffman::frequency::FrequencyTable;
use crate::huffman::node::HuffmanNode;
use crate::model::LinkedBinaryTree;
use crate::queue::HeapPriorityQueue;
use log::{debug, trace};

// =#========================================================================#=
// SINGLE SYMBOL POLICY
// =#========================================================================#=
/// Codeword assigned when the alphabet consists of a single symbol.
///
/// With one symbol no merge happens and the code tree is a single leaf, so
/// a depth-first labelling would produce the empty codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingleSymbolPolicy {
    /// The lone symbol gets the one-bit codeword `0`, so every occurrence
    /// still costs one bit and encodings stay decodable by length.
    #[default]
    SyntheticBit,

    /// The lone symbol gets the empty codeword; encodings are empty and the
    /// Huffman bit cost is zero.
    Empty,
}

impl SingleSymbolPolicy {
    pub(crate) fn lone_codeword(self) -> Codeword {
        match self {
            SingleSymbolPolicy::SyntheticBit => Codeword::from(bit_vec::BitVec::from_elem(1, false)),
            SingleSymbolPolicy::Empty => Codeword::default(),
        }
    }
}

// =#========================================================================#=
// HUFFMAN BUILDER
// =#========================================================================#=
/// Builds Huffman code trees and codeword tables from a [FrequencyTable].
///
/// # Algorithm
/// 1. Seed a [HeapPriorityQueue] with one single-node tree per symbol,
///    keyed by the symbol's frequency (symbols in ascending order).
/// 2. While more than one tree is queued, remove the two trees with the
///    lowest frequency, hang them as left and right subtree below a new
///    merge node carrying the sum of their frequencies, and queue the result.
/// 3. The last remaining tree is the code tree; codewords are read off it by
///    depth-first traversal (`0` for left, `1` for right).
///
/// For an alphabet of `k` symbols this takes exactly `k - 1` merges and
/// yields a tree with `2k - 1` nodes.
///
/// # Ties
/// The queue extracts trees with equal frequency in insertion order, so for
/// a given [FrequencyTable] the tree shape and codewords are always the same.
///
/// # Example
/// ```
/// use huffwick::huffman::{FrequencyTable, HuffmanBuilder, SingleSymbolPolicy};
///
/// let frequencies = FrequencyTable::from_counts([('a', 60), ('b', 5), ('c', 30)]);
/// let code = HuffmanBuilder::new()
///     .with_single_symbol_policy(SingleSymbolPolicy::SyntheticBit)
///     .build(&frequencies)?;
///
/// assert_eq!(code.codeword('a').unwrap().to_string(), "1");
/// assert_eq!(code.codeword('b').unwrap().to_string(), "00");
/// assert_eq!(code.codeword('c').unwrap().to_string(), "01");
/// # Ok::<(), huffwick::error::HuffmanError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HuffmanBuilder {
    single_symbol_policy: SingleSymbolPolicy,
}

impl HuffmanBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the codeword given to the only symbol of a one-symbol alphabet.
    ///
    /// Default is [SingleSymbolPolicy::SyntheticBit].
    pub fn with_single_symbol_policy(mut self, policy: SingleSymbolPolicy) -> Self {
        self.single_symbol_policy = policy;
        self
    }

    /// Returns the configured single-symbol policy.
    pub fn single_symbol_policy(&self) -> SingleSymbolPolicy {
        self.single_symbol_policy
    }

    /// Builds the code tree and its codeword table for `frequencies`.
    ///
    /// # Errors
    /// * [HuffmanError::EmptyAlphabet] if `frequencies` has no symbols
    /// * [HuffmanError::FrequencyOverflow] if a merged frequency exceeds `u64::MAX`
    pub fn build(&self, frequencies: &FrequencyTable) -> Result<HuffmanCode, HuffmanError> {
        let tree = self.build_tree(frequencies)?;
        let table = CodeTable::from_tree(&tree, self.single_symbol_policy)?;
        debug!(
            "Generated {} codewords from tree with {} nodes",
            table.len(),
            tree.size()
        );

        Ok(HuffmanCode::new(tree, table, frequencies.clone()))
    }

    /// Builds only the code tree for `frequencies` by repeatedly merging the
    /// two lowest-frequency trees.
    ///
    /// # Errors
    /// * [HuffmanError::EmptyAlphabet] if `frequencies` has no symbols
    /// * [HuffmanError::FrequencyOverflow] if a merged frequency exceeds `u64::MAX`
    pub fn build_tree(
        &self,
        frequencies: &FrequencyTable,
    ) -> Result<LinkedBinaryTree<HuffmanNode>, HuffmanError> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyAlphabet);
        }
        debug!("Building code tree for {} symbols", frequencies.len());

        let mut queue = HeapPriorityQueue::with_capacity(frequencies.len());
        for (symbol, frequency) in frequencies {
            let mut tree = LinkedBinaryTree::new();
            tree.add_root(HuffmanNode::leaf(symbol, frequency))?;
            queue.insert(frequency, tree);
        }

        let mut merges = 0;
        while queue.size() > 1 {
            let (left_frequency, mut left) = queue.remove_min()?.into_parts();
            let (right_frequency, mut right) = queue.remove_min()?.into_parts();
            let frequency = left_frequency
                .checked_add(right_frequency)
                .ok_or(HuffmanError::FrequencyOverflow(left_frequency, right_frequency))?;

            let mut merged = LinkedBinaryTree::with_capacity(left.size() + right.size() + 1);
            let root = merged.add_root(HuffmanNode::merged(frequency))?;
            merged.attach(root, &mut left, &mut right)?;
            merges += 1;
            trace!("Merge {merges}: {left_frequency} + {right_frequency} = {frequency}");

            queue.insert(frequency, merged);
        }

        let tree = queue.remove_min()?.into_value();
        debug!("Code tree complete after {merges} merges with {} nodes", tree.size());
        Ok(tree)
    }
}
