//! Symbol frequency counting over a corpus.

use rayon::prelude::*;
use std::collections::BTreeMap;
use std::collections::btree_map;

// =#========================================================================#=
// FREQUENCY TABLE
// =#========================================================================#=
/// Maps each symbol of an alphabet to its number of occurrences.
///
/// Symbols are kept in ascending order, so iterating a table, and thus
/// seeding a code construction from it, is deterministic.
///
/// # Example
/// ```
/// use huffwick::huffman::FrequencyTable;
///
/// let table = FrequencyTable::from_words(["crane", "slate"]);
/// assert_eq!(table.get('a'), Some(2));
/// assert_eq!(table.get('z'), None);
/// assert_eq!(table.len(), 7);
/// assert_eq!(table.total(), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every character of `text`.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Counts every character of all `words`, as if they were concatenated.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for word in words {
            table.add_text(word.as_ref());
        }
        table
    }

    /// Same as [from_words](FrequencyTable::from_words), but counts shards of
    /// `words` on the rayon thread pool and sums the partial tables.
    ///
    /// Summation is commutative, so the result equals the serial count.
    pub fn from_words_parallel<S: AsRef<str> + Sync>(words: &[S]) -> Self {
        words
            .par_iter()
            .fold(FrequencyTable::new, |mut table, word| {
                table.add_text(word.as_ref());
                table
            })
            .reduce(FrequencyTable::new, |mut left, right| {
                left.merge(&right);
                left
            })
    }

    /// Builds a table from precomputed `(symbol, count)` pairs; counts of
    /// repeated symbols are summed.
    pub fn from_counts<I: IntoIterator<Item = (char, u64)>>(counts: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in counts {
            table.add(symbol, count);
        }
        table
    }

    /// Adds `count` occurrences of `symbol`; counts saturate at `u64::MAX`.
    pub fn add(&mut self, symbol: char, count: u64) {
        let total = self.counts.entry(symbol).or_insert(0);
        *total = total.saturating_add(count);
    }

    /// Adds one occurrence for each character of `text`.
    pub fn add_text(&mut self, text: &str) {
        for symbol in text.chars() {
            self.add(symbol, 1);
        }
    }

    /// Adds all counts of `other` to this table.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (symbol, count) in other.iter() {
            self.add(symbol, count);
        }
    }

    /// Returns the count of `symbol`, or `None` if it is not part of the alphabet.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Returns `true` if `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Returns the number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no symbols have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the total number of counted occurrences, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |total, &count| total.saturating_add(count))
    }

    /// Iterates `(symbol, count)` in ascending symbol order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut table = FrequencyTable::new();
        for symbol in iter {
            table.add(symbol, 1);
        }
        table
    }
}

/// Iterator over `(symbol, count)` of a [FrequencyTable].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, char, u64>,
}

impl Iterator for Iter<'_> {
    type Item = (char, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&symbol, &count)| (symbol, count))
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (char, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
