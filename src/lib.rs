//! Bit-exact RS(127,121) forward-error-correction codec for a serial
//! transport link carrying 19-bit tagged words.
//!
//! Encodes a block of 121 tagged words into a 128-word protected block
//! (121 data/CRC words, 6 RS parity words, 1 parity-MSB expansion word)
//! over three independent RS(127,121) slices, correcting up to three
//! symbol errors per slice on decode. An optional CRC-18 is layered
//! inside the RS-protected payload.
//!
//! See [`codec::encode`] and [`codec::decode`] for the external
//! interface; everything else is the machinery underneath.

pub mod bm;
pub mod chien;
pub mod codec;
pub mod config;
pub mod crc18;
pub mod decode;
pub mod error;
pub mod forney;
pub mod generator;
pub mod gf;
pub mod poly;
pub mod rs_encode;
pub mod slice;
pub mod syndrome;

pub use codec::{decode as decode_block, encode as encode_block, words_to_bits, DecodeStatus};
pub use config::CodecConfig;
pub use error::CodecError;
pub use slice::{TaggedWord, BLOCK_WORDS, DATA_WORDS, PARITY_SYMBOLS};
