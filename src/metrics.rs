//! Bit-cost comparison of a fixed-width encoding against a generated code.
//!
//! All functions are pure and work on already computed codeword and
//! frequency tables.

use crate::error::HuffmanError;
use crate::huffman::{CodeTable, EncodedDictionary, EncodedWord, FrequencyTable, HuffmanCode};
use std::fmt;

/// Bits per symbol of 8-bit ASCII
pub const ASCII_BITS_PER_SYMBOL: u32 = 8;

// =#========================================================================#=
// CONFIG
// =#========================================================================#=
/// Settings for computing a [CompressionReport].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsConfig {
    bits_per_symbol: u32,
}

impl MetricsConfig {
    /// Creates a config with 8 bits per symbol for the fixed-width baseline.
    pub fn new() -> Self {
        MetricsConfig {
            bits_per_symbol: ASCII_BITS_PER_SYMBOL,
        }
    }

    /// Configure the width of one symbol in the fixed-width baseline.
    pub fn with_bits_per_symbol(mut self, bits_per_symbol: u32) -> Self {
        self.bits_per_symbol = bits_per_symbol;
        self
    }

    /// Returns the width of one symbol in the fixed-width baseline.
    pub fn bits_per_symbol(&self) -> u32 {
        self.bits_per_symbol
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =#========================================================================#=
// BIT COSTS
// =#========================================================================#=
/// Returns the cost of `symbol_count` symbols at `bits_per_symbol` each,
/// saturating at `u64::MAX`.
pub fn fixed_width_bits(symbol_count: u64, bits_per_symbol: u32) -> u64 {
    symbol_count.saturating_mul(u64::from(bits_per_symbol))
}

/// Returns `Σ codeword_length(s) × frequency(s)` over all symbols of `codes`.
///
/// Symbols with a codeword but no frequency count as zero occurrences. The
/// cost saturates at `u64::MAX`.
///
/// # Example
/// ```
/// use huffwick::huffman::{CodeTable, Codeword, FrequencyTable};
/// use huffwick::metrics::huffman_bits;
///
/// let frequencies = FrequencyTable::from_counts([('a', 60), ('b', 5), ('c', 30)]);
/// let codes: CodeTable = [('a', "0"), ('b', "10"), ('c', "11")]
///     .into_iter()
///     .map(|(s, bits)| (s, bits.parse::<Codeword>().unwrap()))
///     .collect();
///
/// assert_eq!(huffman_bits(&codes, &frequencies), 130);
/// ```
pub fn huffman_bits(codes: &CodeTable, frequencies: &FrequencyTable) -> u64 {
    codes
        .iter()
        .map(|(symbol, codeword)| {
            (codeword.len() as u64).saturating_mul(frequencies.get(symbol).unwrap_or(0))
        })
        .fold(0u64, |total, cost| total.saturating_add(cost))
}

/// Returns `fixed_bits / huffman_bits`.
///
/// # Errors
/// [HuffmanError::EmptyAlphabet] if `huffman_bits` is zero, i.e. there was
/// nothing to encode.
pub fn compression_ratio(fixed_bits: u64, huffman_bits: u64) -> Result<f64, HuffmanError> {
    if huffman_bits == 0 {
        return Err(HuffmanError::EmptyAlphabet);
    }
    Ok(fixed_bits as f64 / huffman_bits as f64)
}

// =#========================================================================#=
// REPORT
// =#========================================================================#=
/// Summary of how a [HuffmanCode] compares to a fixed-width encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    /// Bits needed with the fixed-width encoding
    pub fixed_width_bits: u64,
    /// Bits needed with the Huffman code
    pub huffman_bits: u64,
    /// `fixed_width_bits / huffman_bits`
    pub ratio: f64,
    /// Huffman size in percent of the fixed-width size
    pub percentage: f64,
    /// Word with the longest encoding and its bit count
    pub longest: Option<(String, usize)>,
    /// Word with the shortest encoding and its bit count
    pub shortest: Option<(String, usize)>,
}

impl CompressionReport {
    /// Computes the report for `code` over the corpus it was built from,
    /// taking longest and shortest word from `dictionary`.
    ///
    /// # Errors
    /// [HuffmanError::EmptyAlphabet] if the Huffman bit cost is zero.
    pub fn new(
        code: &HuffmanCode,
        dictionary: &EncodedDictionary,
        config: &MetricsConfig,
    ) -> Result<Self, HuffmanError> {
        let frequencies = code.frequencies();
        let fixed = fixed_width_bits(frequencies.total(), config.bits_per_symbol());
        let huffman = huffman_bits(code.table(), frequencies);
        let ratio = compression_ratio(fixed, huffman)?;

        let summarize = |entry: &EncodedWord| (entry.word().to_string(), entry.num_bits());
        Ok(CompressionReport {
            fixed_width_bits: fixed,
            huffman_bits: huffman,
            ratio,
            percentage: 100.0 / ratio,
            longest: dictionary.longest().map(summarize),
            shortest: dictionary.shortest().map(summarize),
        })
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bits required for fixed-width encoding: {}", self.fixed_width_bits)?;
        writeln!(f, "Bits required for Huffman encoding: {}", self.huffman_bits)?;
        writeln!(f, "Compression ratio: {:.4}", self.ratio)?;
        writeln!(f, "Compression percentage: {:.2} percent", self.percentage)?;
        if let Some((word, bits)) = &self.longest {
            writeln!(f, "Word with the longest code: {word} with {bits} bits")?;
        }
        if let Some((word, bits)) = &self.shortest {
            writeln!(f, "Word with the shortest code: {word} with {bits} bits")?;
        }
        Ok(())
    }
}
