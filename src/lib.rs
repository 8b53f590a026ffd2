//! Huffwick builds minimum-redundancy prefix codes (Huffman codes) on top of
//! a general position-based binary tree.
//!
//! Core functionality provided:
//! - Binary tree: [LinkedBinaryTree] is a mutable binary tree using the arena
//!   pattern, addressed via [Position] handles, with structural edits
//!   (add, set, remove, attach), level-order bulk construction and
//!   pre-, in-, post- and level-order traversals. See [crate::model].
//! - Priority queue: [HeapPriorityQueue] is a binary min-heap with FIFO
//!   tie-breaking. See [crate::queue].
//! - Huffman codes: [HuffmanBuilder] merges single-node trees greedily into
//!   one code tree and reads the codewords off it; [HuffmanCode] encodes and
//!   decodes with the result. See [crate::huffman].
//! - Metrics: bit costs of fixed-width vs. generated code, compression ratio,
//!   longest and shortest encoded word. See [crate::metrics].
//!
//! Limitations:
//! - Static codes only, built once from a whole corpus
//! - No persistence or wire format for codes or encoded data
//!
//! # Usage patterns
//! 1. Quick access with default settings via [build_code] and
//!    [build_code_for_words].
//! 2. Configure a [HuffmanBuilder] and feed it a [FrequencyTable] for full
//!    control.
//!
//! ## Example Default Configuration
//! ```
//! use huffwick::build_code;
//!
//! let code = build_code("mississippi")?;
//! let bits = code.encode("mississippi")?;
//! assert_eq!(bits.len(), 21);
//! assert_eq!(code.decode(&bits)?, "mississippi");
//! # Ok::<(), huffwick::error::HuffmanError>(())
//! ```
//!
//! ## Example Builder Configuration
//! ```
//! use huffwick::huffman::{FrequencyTable, HuffmanBuilder, SingleSymbolPolicy};
//! use huffwick::metrics::{CompressionReport, MetricsConfig};
//!
//! let words = ["crane", "slate", "trace"];
//! let frequencies = FrequencyTable::from_words(words);
//! let code = HuffmanBuilder::new()
//!     .with_single_symbol_policy(SingleSymbolPolicy::Empty)
//!     .build(&frequencies)?;
//!
//! let dictionary = code.encode_words(words);
//! let report = CompressionReport::new(&code, &dictionary, &MetricsConfig::default())?;
//! assert_eq!(report.fixed_width_bits, 15 * 8);
//! # Ok::<(), huffwick::error::HuffmanError>(())
//! ```

pub mod error;
pub mod huffman;
pub mod metrics;
pub mod model;
pub mod queue;

use crate::error::HuffmanError;
pub use crate::huffman::{FrequencyTable, HuffmanBuilder, HuffmanCode};
pub use crate::model::{LinkedBinaryTree, Position};
pub use crate::queue::HeapPriorityQueue;

// ============================================================================
// Quick API
// ============================================================================
/// Builds a Huffman code over the characters of `text` using default settings.
///
/// # Errors
/// [HuffmanError::EmptyAlphabet] if `text` is empty.
pub fn build_code(text: &str) -> Result<HuffmanCode, HuffmanError> {
    HuffmanBuilder::new().build(&FrequencyTable::from_text(text))
}

/// Builds a Huffman code over the characters of all `words` using default
/// settings, as if they were concatenated into one corpus.
///
/// # Errors
/// [HuffmanError::EmptyAlphabet] if the words contain no characters.
pub fn build_code_for_words<I, S>(words: I) -> Result<HuffmanCode, HuffmanError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    HuffmanBuilder::new().build(&FrequencyTable::from_words(words))
}
