//! Huffman code construction on top of [LinkedBinaryTree](crate::model::LinkedBinaryTree).
//!
//! # Flow
//! 1. [FrequencyTable] - symbol counts of a corpus (or given counts)
//! 2. [HuffmanBuilder] - greedy merge of single-node trees via
//!    [HeapPriorityQueue](crate::queue::HeapPriorityQueue) into one code tree
//!    of [HuffmanNode]s
//! 3. [HuffmanCode] - the finished tree plus its [CodeTable], used to
//!    encode and decode text
//!
//! Bit costs of a finished code are computed in [crate::metrics].
//!
//! # Failure modes
//! * [EmptyAlphabet](crate::error::HuffmanError::EmptyAlphabet): nothing to build a code for
//! * [MissingCodeword](crate::error::HuffmanError::MissingCodeword): a symbol to encode
//!   is not in the alphabet; strict encoding fails, dictionary encoding logs
//!   it, skips the symbol and carries on

pub mod builder;
pub mod code;
pub mod frequency;
pub mod node;

pub use builder::{HuffmanBuilder, SingleSymbolPolicy};
pub use code::{CodeTable, Codeword, EncodedDictionary, EncodedWord, HuffmanCode};
pub use frequency::FrequencyTable;
pub use node::HuffmanNode;
