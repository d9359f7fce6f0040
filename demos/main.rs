//! Small CLI demo: encodes a block of pseudo-random tagged words, flips
//! a handful of symbols, decodes, and reports what was corrected.
//!
//! Not part of the library's public contract, just a driver for poking
//! at the codec from the command line.

use rs127_tagword_fec::{decode_block, encode_block, CodecConfig, TaggedWord, DATA_WORDS};

fn sample_words() -> Vec<TaggedWord> {
    (0..DATA_WORDS)
        .map(|i| TaggedWord::new(i % 23 == 0, (i as u32 * 2654435761) & 0x3FFFF))
        .collect()
}

fn main() {
    tracing_subscriber::fmt::init();

    let config = CodecConfig { crc_enable: true };
    let words = sample_words();

    let mut block = encode_block(&words, config).expect("encode");
    println!("encoded {} words into a {}-word block", words.len(), block.len());

    block[3] ^= 0x15;
    block[60] ^= 0x2B << 6;
    block[119] ^= 0x07 << 12;
    println!("injected 3 symbol errors");

    let (decoded, status) = decode_block(&block, config).expect("decode");
    println!(
        "decoded {} words: corrected={} uncorrectable={} crc_pass={}",
        decoded.len(),
        status.corrected_errors,
        status.uncorrectable,
        status.crc_pass
    );

    let matches = decoded.iter().zip(words.iter().take(decoded.len())).filter(|(a, b)| a == b).count();
    println!("{matches}/{} words match the original input", decoded.len());
}
