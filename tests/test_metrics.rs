use huffwick::error::HuffmanError;
use huffwick::huffman::{FrequencyTable, HuffmanBuilder, SingleSymbolPolicy};
use huffwick::metrics::{
    ASCII_BITS_PER_SYMBOL, CompressionReport, MetricsConfig, compression_ratio, fixed_width_bits,
    huffman_bits,
};

#[test]
fn test_fixed_width_bits() {
    assert_eq!(fixed_width_bits(95, ASCII_BITS_PER_SYMBOL), 760);
    assert_eq!(fixed_width_bits(0, ASCII_BITS_PER_SYMBOL), 0);
    assert_eq!(fixed_width_bits(10, 5), 50);
}

#[test]
fn test_huffman_bits_of_small_alphabet() {
    let frequencies = FrequencyTable::from_counts([('a', 60), ('b', 5), ('c', 30)]);
    let code = HuffmanBuilder::new().build(&frequencies).unwrap();
    assert_eq!(huffman_bits(code.table(), &frequencies), 130);
}

#[test]
fn test_huffman_bits_ignores_unknown_frequencies() {
    let code = HuffmanBuilder::new()
        .build(&FrequencyTable::from_counts([('a', 1), ('b', 1)]))
        .unwrap();
    let frequencies = FrequencyTable::from_counts([('a', 4)]);
    assert_eq!(huffman_bits(code.table(), &frequencies), 4);
}

#[test]
fn test_bit_costs_saturate() {
    assert_eq!(fixed_width_bits(u64::MAX / 2, ASCII_BITS_PER_SYMBOL), u64::MAX);

    let code = HuffmanBuilder::new()
        .build(&FrequencyTable::from_counts([('a', 1), ('b', 1), ('c', 2)]))
        .unwrap();
    let frequencies = FrequencyTable::from_counts([('a', u64::MAX / 2), ('b', u64::MAX / 2)]);
    assert_eq!(huffman_bits(code.table(), &frequencies), u64::MAX);
}

#[test]
fn test_compression_ratio() {
    let ratio = compression_ratio(760, 130).unwrap();
    assert!((ratio - 760.0 / 130.0).abs() < 1e-12);
    assert_eq!(compression_ratio(8, 8).unwrap(), 1.0);
}

#[test]
fn test_compression_ratio_of_nothing_fails() {
    assert_eq!(
        compression_ratio(0, 0).unwrap_err(),
        HuffmanError::EmptyAlphabet
    );
    assert_eq!(
        compression_ratio(24, 0).unwrap_err(),
        HuffmanError::EmptyAlphabet
    );
}

#[test]
fn test_metrics_config() {
    assert_eq!(MetricsConfig::default().bits_per_symbol(), 8);
    let config = MetricsConfig::new().with_bits_per_symbol(5);
    assert_eq!(config.bits_per_symbol(), 5);
}

#[test]
fn test_compression_report() {
    let words = ["aab", "ccc", "abc", "a"];
    let frequencies = FrequencyTable::from_words(words);
    let code = HuffmanBuilder::new().build(&frequencies).unwrap();
    let dictionary = code.encode_words(words);

    let report = CompressionReport::new(&code, &dictionary, &MetricsConfig::default()).unwrap();
    // a: 4, b: 2, c: 4 -> c = 0, b = 10, a = 11
    assert_eq!(report.fixed_width_bits, 80);
    assert_eq!(report.huffman_bits, 16);
    assert!((report.ratio - 5.0).abs() < 1e-12);
    assert!((report.percentage - 20.0).abs() < 1e-12);
    assert_eq!(report.huffman_bits as usize, dictionary.total_bits());
    assert_eq!(report.shortest.as_ref().map(|(w, _)| w.as_str()), Some("a"));

    let (longest, bits) = report.longest.clone().unwrap();
    assert_eq!(bits, dictionary.iter().map(|e| e.num_bits()).max().unwrap());
    assert_eq!(dictionary.get(&longest).unwrap().num_bits(), bits);

    let text = report.to_string();
    assert!(text.contains("Bits required for fixed-width encoding: 80"));
    assert!(text.contains("Compression ratio: 5.0000"));
}

#[test]
fn test_compression_report_with_custom_width() {
    let frequencies = FrequencyTable::from_counts([('a', 60), ('b', 5), ('c', 30)]);
    let code = HuffmanBuilder::new().build(&frequencies).unwrap();
    let dictionary = code.encode_words(Vec::<&str>::new());
    let config = MetricsConfig::new().with_bits_per_symbol(2);

    let report = CompressionReport::new(&code, &dictionary, &config).unwrap();
    assert_eq!(report.fixed_width_bits, 190);
    assert_eq!(report.huffman_bits, 130);
    assert!(report.longest.is_none());
    assert!(report.shortest.is_none());
}

#[test]
fn test_compression_report_of_empty_codeword_fails() {
    let frequencies = FrequencyTable::from_text("xxxx");
    let code = HuffmanBuilder::new()
        .with_single_symbol_policy(SingleSymbolPolicy::Empty)
        .build(&frequencies)
        .unwrap();
    let dictionary = code.encode_words(["xx"]);

    assert_eq!(
        CompressionReport::new(&code, &dictionary, &MetricsConfig::default()).unwrap_err(),
        HuffmanError::EmptyAlphabet
    );
}
