//! External encode/decode interface (spec.md §6). This is the one
//! surface a wrapping program touches; everything behind it (GF tables,
//! generator, slicing, RS encode/decode) is process-internal.

use crate::config::CodecConfig;
use crate::crc18::crc18;
use crate::error::CodecError;
use crate::rs_encode::encode_slice;
use crate::slice::{
    assemble_block, pack_data_symbols, rebuild_words, unpack_block, ParitySymbols, TaggedWord, BLOCK_WORDS,
    DATA_WORDS,
};

/// The index, within a 121-word block, reserved for the CRC-18 residue
/// when `crc_enable` is set.
const CRC_WORD_INDEX: usize = DATA_WORDS - 1;

/// Status of a decode, returned alongside the decoded bits (spec.md §6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DecodeStatus {
    /// Sum of per-slice corrected symbol counts.
    pub corrected_errors: u8,
    /// `true` if any slice could not be reliably corrected.
    pub uncorrectable: bool,
    /// `true` if CRC-18 was enabled and matched; always `true` when CRC
    /// is disabled (there is nothing to fail).
    pub crc_pass: bool,
}

/// Encodes 121 tagged words into a 128-word protected block.
///
/// When `config.crc_enable` is set, only `words[..120]` are treated as
/// user data: `words[120]`'s content is ignored and overwritten with the
/// computed CRC-18 residue (is_k forced to 0).
///
/// # Errors
///
/// Returns [`CodecError::WrongWordCount`] if `words` is not exactly
/// [`DATA_WORDS`] long.
pub fn encode(words: &[TaggedWord], config: CodecConfig) -> Result<[u32; BLOCK_WORDS], CodecError> {
    if words.len() != DATA_WORDS {
        return Err(CodecError::WrongWordCount { expected: DATA_WORDS, got: words.len() });
    }

    let mut data_words = [TaggedWord::default(); DATA_WORDS];
    data_words.copy_from_slice(words);

    if config.crc_enable {
        let crc = crc18(data_words[..CRC_WORD_INDEX].iter().map(|w| w.din()));
        data_words[CRC_WORD_INDEX] = TaggedWord::new(false, crc);
    }

    let [a, b, c] = pack_data_symbols(&data_words);
    let parity = ParitySymbols { a: encode_slice(&a), b: encode_slice(&b), c: encode_slice(&c) };
    let block = assemble_block(&data_words, &parity);

    tracing::debug!(crc_enable = config.crc_enable, "encoded block");
    Ok(block)
}

/// Decodes a 128-word block, correcting up to three symbol errors per
/// RS slice, and optionally verifying the CRC-18.
///
/// Returns the decoded tagged words (120 of them if `crc_enable`, since
/// word 120 was the CRC; 121 otherwise) and a [`DecodeStatus`].
///
/// # Errors
///
/// Returns [`CodecError::WrongWordCount`] if `block` is not exactly
/// [`BLOCK_WORDS`] long.
pub fn decode(block: &[u32], config: CodecConfig) -> Result<(Vec<TaggedWord>, DecodeStatus), CodecError> {
    if block.len() != BLOCK_WORDS {
        return Err(CodecError::WrongWordCount { expected: BLOCK_WORDS, got: block.len() });
    }

    let mut fixed = [0u32; BLOCK_WORDS];
    fixed.copy_from_slice(block);

    let unpacked = unpack_block(&fixed);
    let mut slice_a = unpacked.a;
    let mut slice_b = unpacked.b;
    let mut slice_c = unpacked.c;

    let ra = crate::decode::decode_slice(&mut slice_a);
    let rb = crate::decode::decode_slice(&mut slice_b);
    let rc = crate::decode::decode_slice(&mut slice_c);

    let words = rebuild_words(&ra.data, &rb.data, &rc.data);

    let corrected_errors = (ra.corrected + rb.corrected + rc.corrected) as u8;
    let uncorrectable = ra.uncorrectable || rb.uncorrectable || rc.uncorrectable;

    let (out_words, crc_pass) = if config.crc_enable {
        let computed = crc18(words[..CRC_WORD_INDEX].iter().map(|w| w.din()));
        let pass = computed == words[CRC_WORD_INDEX].din();
        (words[..CRC_WORD_INDEX].to_vec(), pass)
    } else {
        (words.to_vec(), true)
    };

    let status = DecodeStatus { corrected_errors, uncorrectable, crc_pass };
    tracing::debug!(?status, "decoded block");
    Ok((out_words, status))
}

/// Flattens tagged words to a LSB-first bit vector, 19 bits per word, as
/// the external interface in spec.md §6 describes.
pub fn words_to_bits(words: &[TaggedWord]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(words.len() * 19);
    for w in words {
        let raw = w.raw();
        for i in 0..19 {
            bits.push((raw >> i) & 1 != 0);
        }
    }
    bits
}
