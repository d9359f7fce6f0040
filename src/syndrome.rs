//! Syndrome computation: six parallel Horner accumulators over the
//! 127-symbol codeword evaluated at alpha^1..alpha^6 (spec.md §4.F).
//!
//! The codeword is stored in memory as `[d_0..d_120, p_0..p_5]`
//! (spec.md §3 "data-parity LSB-first" layout). `rs_encode.rs` feeds
//! `d_0` first through the encoding LFSR, so `d_0` is the
//! *highest*-degree coefficient of the shifted message: `d_0 = r_126 ..
//! d_120 = r_6`, `p_0 = r_5 .. p_5 = r_0`. The descending-degree stream
//! `r_126..r_0` the Horner evaluator wants is therefore the data segment
//! taken forward followed by the parity segment reversed.

use crate::gf::tables;
use crate::slice::{CODEWORD_LEN, DATA_WORDS, PARITY_SYMBOLS};

/// Number of parity checks / Berlekamp-Massey syndromes (2t, t = 3).
pub const NUM_SYNDROMES: usize = 6;

/// Produces the `r_126..r_0` stream from the `[d_0..d_120, p_0..p_5]`
/// memory layout.
fn descending_degree_stream(codeword: &[u8; CODEWORD_LEN]) -> impl Iterator<Item = u8> + '_ {
    codeword[..DATA_WORDS]
        .iter()
        .chain(codeword[DATA_WORDS..].iter().rev())
        .copied()
}

/// Computes `S_1..S_6` for the given 127-symbol codeword. All six are
/// zero iff the codeword is already a valid RS(127,121) codeword.
pub fn syndromes(codeword: &[u8; CODEWORD_LEN]) -> [u8; NUM_SYNDROMES] {
    let t = tables();
    let mut s = [0u8; NUM_SYNDROMES];
    let alpha_pow: Vec<u8> = (1..=NUM_SYNDROMES).map(|j| t.exp(j)).collect();

    for v in descending_degree_stream(codeword) {
        for j in 0..NUM_SYNDROMES {
            s[j] = t.mul(s[j], alpha_pow[j]) ^ v;
        }
    }
    s
}

/// `true` iff all syndromes are zero — the codeword needs no correction.
pub fn all_zero(syn: &[u8; NUM_SYNDROMES]) -> bool {
    syn.iter().all(|&s| s == 0)
}
