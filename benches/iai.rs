use iai::black_box;
use rs127_tagword_fec::{decode_block, encode_block, CodecConfig, TaggedWord, DATA_WORDS};

fn sample_words() -> Vec<TaggedWord> {
    (0..DATA_WORDS).map(|i| TaggedWord::new(i % 37 == 0, (i as u32 * 2654435761) & 0x3FFFF)).collect()
}

fn bench_encode() {
    let words = sample_words();
    let _ = encode_block(black_box(&words), CodecConfig::default());
}

fn bench_roundtrip() {
    let words = sample_words();
    let block = encode_block(&words, CodecConfig::default()).unwrap();
    let _ = decode_block(black_box(&block), CodecConfig::default());
}

iai::main!(bench_encode, bench_roundtrip);
