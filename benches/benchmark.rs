use criterion::{Criterion, criterion_group, criterion_main};
use huffwick::huffman::{FrequencyTable, HuffmanBuilder};
use huffwick::model::LinkedBinaryTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const CORPUS_SIZES: &[(&str, usize)] = &[("words-1k", 1_000), ("words-50k", 50_000)];

/// Five-letter words over a skewed alphabet, so codeword lengths differ.
fn corpus(num_words: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"eeeeeeaaaaarrrrooottiinnsslcudpmhgbfywkvxzjq";
    let mut rng = StdRng::seed_from_u64(42);
    (0..num_words)
        .map(|_| {
            (0..5)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

fn frequency_counting(c: &mut Criterion) {
    for (name, size) in CORPUS_SIZES {
        let words = corpus(*size);
        c.bench_function(&format!("count-serial/{name}"), |b| {
            b.iter(|| FrequencyTable::from_words(black_box(&words)));
        });
        c.bench_function(&format!("count-parallel/{name}"), |b| {
            b.iter(|| FrequencyTable::from_words_parallel(black_box(&words)));
        });
    }
}

fn code_construction(c: &mut Criterion) {
    let frequencies = FrequencyTable::from_words(corpus(50_000));
    let wide = FrequencyTable::from_counts((0..4096u32).filter_map(|i| {
        char::from_u32(0x4E00 + i).map(|symbol| (symbol, u64::from(i % 97 + 1)))
    }));

    c.bench_function("build/letters", |b| {
        b.iter(|| HuffmanBuilder::new().build(black_box(&frequencies)).unwrap());
    });
    c.bench_function("build/cjk-4096", |b| {
        b.iter(|| HuffmanBuilder::new().build(black_box(&wide)).unwrap());
    });
}

fn encoding(c: &mut Criterion) {
    let words = corpus(50_000);
    let code = HuffmanBuilder::new()
        .build(&FrequencyTable::from_words(&words))
        .unwrap();
    let text = words.concat();
    let bits = code.encode(&text).unwrap();

    c.bench_function("encode-words/words-50k", |b| {
        b.iter(|| code.encode_words(black_box(&words)));
    });
    c.bench_function("decode/words-50k", |b| {
        b.iter(|| code.decode(black_box(&bits)).unwrap());
    });
}

fn tree_traversal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let tree = LinkedBinaryTree::<usize>::make_random(100_000, &mut rng);

    c.bench_function("traverse/inorder-100k", |b| {
        b.iter(|| tree.inorder().count());
    });
    c.bench_function("traverse/postorder-100k", |b| {
        b.iter(|| tree.postorder().count());
    });
}

criterion_group!(regression, code_construction, encoding, tree_traversal);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = frequency_counting
}
criterion_main!(regression, reporting);
