//! Codewords, code tables and the finished code with encoding and decoding.

use crate::error::HuffmanError;
use crate::huffman::builder::SingleSymbolPolicy;
use crate::huffman::frequency::FrequencyTable;
use crate::huffman::node::HuffmanNode;
use crate::model::{LinkedBinaryTree, Position};
use bit_vec::BitVec;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =#========================================================================#=
// CODEWORD
// =#========================================================================#=
/// A finite bit string assigned to one symbol; `false` is `0` (left), `true` is `1` (right).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Codeword(BitVec);

impl Codeword {
    /// Returns the number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty codeword.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the bits from first to last.
    pub fn bits(&self) -> bit_vec::Iter<'_> {
        self.0.iter()
    }

    /// Returns the underlying bit vector.
    pub fn as_bit_vec(&self) -> &BitVec {
        &self.0
    }

    /// Returns `true` if `self` is a (not necessarily proper) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        self.len() <= other.len() && self.bits().zip(other.bits()).all(|(a, b)| a == b)
    }

    fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }
}

impl From<BitVec> for Codeword {
    fn from(bits: BitVec) -> Self {
        Codeword(bits)
    }
}

/// Parses a string of `0` and `1` characters.
impl FromStr for Codeword {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(HuffmanError::InvalidBitSequence { position }),
            })
            .collect::<Result<BitVec, _>>()
            .map(Codeword)
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.0)
    }
}

/// Writes `bits` as a string of `0` and `1`.
pub(crate) fn write_bits(f: &mut fmt::Formatter<'_>, bits: &BitVec) -> fmt::Result {
    for bit in bits.iter() {
        f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
}

// =#========================================================================#=
// CODE TABLE
// =#========================================================================#=
/// Immutable mapping from symbol to [Codeword].
///
/// Built once from a finished code tree via
/// [HuffmanBuilder](crate::huffman::HuffmanBuilder), or assembled directly
/// from pairs with [FromIterator], e.g. to evaluate a given code.
///
/// # Example
/// ```
/// use huffwick::huffman::{CodeTable, Codeword};
///
/// let table: CodeTable = [('a', "0"), ('b', "10"), ('c', "11")]
///     .into_iter()
///     .map(|(symbol, bits)| (symbol, bits.parse::<Codeword>().unwrap()))
///     .collect();
///
/// assert!(table.is_prefix_free());
/// assert_eq!(table.get('b').unwrap().to_string(), "10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Codeword>,
}

impl CodeTable {
    /// Generates the codewords of a code tree by depth-first traversal.
    ///
    /// Descending left appends `0`, descending right appends `1`; every leaf
    /// binds the accumulated bits to its symbol. Internal nodes never get a
    /// codeword. A tree consisting of a single leaf gets the codeword chosen
    /// by `policy`; an empty tree yields an empty table.
    ///
    /// # Errors
    /// [HuffmanError::MalformedCodeTree] if a leaf carries no symbol.
    pub(crate) fn from_tree(
        tree: &LinkedBinaryTree<HuffmanNode>,
        policy: SingleSymbolPolicy,
    ) -> Result<Self, HuffmanError> {
        let mut codes = BTreeMap::new();
        let Some(root) = tree.root() else {
            return Ok(CodeTable { codes });
        };

        let mut stack: Vec<(Position, Codeword)> = vec![(root, Codeword::default())];
        while let Some((position, codeword)) = stack.pop() {
            if tree.is_leaf(position)? {
                let symbol = tree
                    .element(position)?
                    .symbol()
                    .ok_or(HuffmanError::MalformedCodeTree)?;
                let codeword = if position == root {
                    policy.lone_codeword()
                } else {
                    codeword
                };
                codes.insert(symbol, codeword);
                continue;
            }

            // Right first, so left subtrees are labelled first
            if let Some(right) = tree.right(position)? {
                let mut bits = codeword.clone();
                bits.push(true);
                stack.push((right, bits));
            }
            if let Some(left) = tree.left(position)? {
                let mut bits = codeword;
                bits.push(false);
                stack.push((left, bits));
            }
        }

        Ok(CodeTable { codes })
    }

    /// Returns the codeword of `symbol`, if any.
    pub fn get(&self, symbol: char) -> Option<&Codeword> {
        self.codes.get(&symbol)
    }

    /// Returns `true` if `symbol` has a codeword.
    pub fn contains(&self, symbol: char) -> bool {
        self.codes.contains_key(&symbol)
    }

    /// Returns the number of symbols with a codeword.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the table has no codewords.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates `(symbol, codeword)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Codeword)> + '_ {
        self.codes.iter().map(|(&symbol, codeword)| (symbol, codeword))
    }

    /// Checks that no codeword is a prefix of the codeword of another symbol.
    pub fn is_prefix_free(&self) -> bool {
        let codewords: Vec<&Codeword> = self.codes.values().collect();
        codewords.iter().enumerate().all(|(i, a)| {
            codewords[i + 1..]
                .iter()
                .all(|b| !a.is_prefix_of(b) && !b.is_prefix_of(a))
        })
    }

    /// Encodes `text` as concatenation of its symbols' codewords.
    ///
    /// # Errors
    /// [HuffmanError::MissingCodeword] for the first symbol without codeword.
    pub fn encode(&self, text: &str) -> Result<BitVec, HuffmanError> {
        let mut bits = BitVec::new();
        for symbol in text.chars() {
            let codeword = self.get(symbol).ok_or(HuffmanError::MissingCodeword(symbol))?;
            bits.extend(codeword.bits());
        }
        Ok(bits)
    }

    /// Encodes `word`, skipping symbols without codeword.
    ///
    /// Every skipped symbol is logged as warning and recorded in
    /// [EncodedWord::missing]; the result is then only of diagnostic use.
    pub fn encode_lossy(&self, word: &str) -> EncodedWord {
        let mut bits = BitVec::new();
        let mut missing = Vec::new();
        for symbol in word.chars() {
            match self.get(symbol) {
                Some(codeword) => bits.extend(codeword.bits()),
                None => {
                    warn!("{}", HuffmanError::MissingCodeword(symbol));
                    missing.push(symbol);
                }
            }
        }

        EncodedWord {
            word: word.to_string(),
            bits,
            missing,
        }
    }
}

impl FromIterator<(char, Codeword)> for CodeTable {
    fn from_iter<T: IntoIterator<Item = (char, Codeword)>>(iter: T) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}

// =#========================================================================#=
// ENCODED WORDS
// =#========================================================================#=
/// A word together with its encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedWord {
    word: String,
    bits: BitVec,
    missing: Vec<char>,
}

impl EncodedWord {
    /// Returns the original word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the encoded bits.
    pub fn bits(&self) -> &BitVec {
        &self.bits
    }

    /// Returns the number of encoded bits.
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// Returns the symbols that were skipped for lack of a codeword.
    pub fn missing(&self) -> &[char] {
        &self.missing
    }

    /// Returns `true` if every symbol of the word was encoded.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for EncodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.word)?;
        write_bits(f, &self.bits)
    }
}

/// Encodings of a list of words, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedDictionary {
    entries: Vec<EncodedWord>,
}

impl EncodedDictionary {
    /// Returns the number of encoded words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no words were encoded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the encoded words in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, EncodedWord> {
        self.entries.iter()
    }

    /// Returns the first encoding of `word`, if it was part of the input.
    pub fn get(&self, word: &str) -> Option<&EncodedWord> {
        self.entries.iter().find(|entry| entry.word == word)
    }

    /// Returns the word with the longest encoding; the first one on ties.
    pub fn longest(&self) -> Option<&EncodedWord> {
        self.entries.iter().rev().max_by_key(|entry| entry.num_bits())
    }

    /// Returns the word with the shortest encoding; the first one on ties.
    pub fn shortest(&self) -> Option<&EncodedWord> {
        self.entries.iter().min_by_key(|entry| entry.num_bits())
    }

    /// Returns the number of bits over all encoded words.
    pub fn total_bits(&self) -> usize {
        self.entries.iter().map(EncodedWord::num_bits).sum()
    }

    /// Returns the number of words that could not be encoded completely.
    pub fn num_incomplete(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_complete()).count()
    }
}

impl<'a> IntoIterator for &'a EncodedDictionary {
    type Item = &'a EncodedWord;
    type IntoIter = std::slice::Iter<'a, EncodedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =#========================================================================#=
// HUFFMAN CODE
// =#========================================================================#=
/// A finished Huffman code: the code tree, its codeword table and the
/// frequencies it was built from. Read-only after construction.
///
/// # Example
/// ```
/// use huffwick::huffman::{FrequencyTable, HuffmanBuilder};
///
/// let frequencies = FrequencyTable::from_text("abracadabra");
/// let code = HuffmanBuilder::new().build(&frequencies)?;
///
/// let bits = code.encode("cabbar")?;
/// assert_eq!(code.decode(&bits)?, "cabbar");
/// assert_eq!(code.codeword('a').unwrap().len(), 1);
/// # Ok::<(), huffwick::error::HuffmanError>(())
/// ```
#[derive(Debug)]
pub struct HuffmanCode {
    tree: LinkedBinaryTree<HuffmanNode>,
    table: CodeTable,
    frequencies: FrequencyTable,
}

impl HuffmanCode {
    pub(crate) fn new(
        tree: LinkedBinaryTree<HuffmanNode>,
        table: CodeTable,
        frequencies: FrequencyTable,
    ) -> Self {
        HuffmanCode {
            tree,
            table,
            frequencies,
        }
    }

    /// Returns the code tree.
    pub fn tree(&self) -> &LinkedBinaryTree<HuffmanNode> {
        &self.tree
    }

    /// Returns the codeword table.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Returns the frequencies the code was built from.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Returns the codeword of `symbol`, if any.
    pub fn codeword(&self, symbol: char) -> Option<&Codeword> {
        self.table.get(symbol)
    }

    /// Encodes `text`; see [CodeTable::encode].
    pub fn encode(&self, text: &str) -> Result<BitVec, HuffmanError> {
        self.table.encode(text)
    }

    /// Encodes each word, tolerating symbols without codeword (logged and
    /// recorded per word).
    pub fn encode_words<I, S>(&self, words: I) -> EncodedDictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<EncodedWord> = words
            .into_iter()
            .map(|word| self.table.encode_lossy(word.as_ref()))
            .collect();

        let dictionary = EncodedDictionary { entries };
        if dictionary.num_incomplete() > 0 {
            warn!(
                "{} of {} words encoded incompletely",
                dictionary.num_incomplete(),
                dictionary.len()
            );
        }
        debug!(
            "Encoded {} words into {} bits",
            dictionary.len(),
            dictionary.total_bits()
        );
        dictionary
    }

    /// Decodes `bits` by walking the code tree from the root, one level per
    /// bit, emitting a symbol at each leaf.
    ///
    /// # Errors
    /// * [HuffmanError::InvalidBitSequence] if a bit leads off the tree
    /// * [HuffmanError::IncompleteCodeword] if `bits` ends inside a codeword
    /// * [HuffmanError::MalformedCodeTree] if a reached leaf carries no symbol
    pub fn decode(&self, bits: &BitVec) -> Result<String, HuffmanError> {
        let Some(root) = self.tree.root() else {
            return Err(HuffmanError::EmptyAlphabet);
        };
        if self.tree.is_leaf(root)? {
            return self.decode_lone(root, bits);
        }

        let mut text = String::new();
        let mut current = root;
        for (position, bit) in bits.iter().enumerate() {
            let next = if bit {
                self.tree.right(current)?
            } else {
                self.tree.left(current)?
            };
            let next = next.ok_or(HuffmanError::InvalidBitSequence { position })?;

            if self.tree.is_leaf(next)? {
                let symbol = self.tree[next]
                    .symbol()
                    .ok_or(HuffmanError::MalformedCodeTree)?;
                text.push(symbol);
                current = root;
            } else {
                current = next;
            }
        }

        if current != root {
            return Err(HuffmanError::IncompleteCodeword);
        }
        Ok(text)
    }

    /// Decodes against a tree that is a single leaf, whose codeword is
    /// repeated once per symbol.
    fn decode_lone(&self, root: Position, bits: &BitVec) -> Result<String, HuffmanError> {
        let symbol = self.tree[root]
            .symbol()
            .ok_or(HuffmanError::MalformedCodeTree)?;
        let unit: Vec<bool> = self
            .table
            .get(symbol)
            .map(|codeword| codeword.bits().collect())
            .unwrap_or_default();

        if unit.is_empty() {
            if bits.is_empty() {
                return Ok(String::new());
            }
            return Err(HuffmanError::InvalidBitSequence { position: 0 });
        }

        let mut text = String::new();
        for (position, bit) in bits.iter().enumerate() {
            let offset = position % unit.len();
            if bit != unit[offset] {
                return Err(HuffmanError::InvalidBitSequence { position });
            }
            if offset + 1 == unit.len() {
                text.push(symbol);
            }
        }

        if bits.len() % unit.len() != 0 {
            return Err(HuffmanError::IncompleteCodeword);
        }
        Ok(text)
    }
}
