//! Systematic RS(127,121) encoding for a single slice: polynomial
//! division by g(x) via a 6-register Galois LFSR (spec.md §4.E).

use crate::gf::tables;
use crate::generator::generator;
use crate::slice::{DATA_WORDS, PARITY_SYMBOLS};

/// Runs the 121 input symbols through the systematic-encoding LFSR and
/// returns the six parity symbols `[s_0..s_5]`.
pub fn encode_slice(data: &[u8; DATA_WORDS]) -> [u8; PARITY_SYMBOLS] {
    let t = tables();
    let g = &generator().0;
    debug_assert_eq!(g.len(), 7, "generator polynomial must have degree 6");

    let mut s = [0u8; PARITY_SYMBOLS];
    for &d in data.iter() {
        let fb = d ^ s[5];
        for j in (1..PARITY_SYMBOLS).rev() {
            s[j] = s[j - 1] ^ t.mul(fb, g[j]);
        }
        s[0] = t.mul(fb, g[0]);
    }
    s
}

/// Encodes a slice and returns the full 127-symbol systematic codeword
/// `[d_0..d_120, p_0..p_5]`.
pub fn encode_codeword(data: &[u8; DATA_WORDS]) -> [u8; DATA_WORDS + PARITY_SYMBOLS] {
    let parity = encode_slice(data);
    let mut out = [0u8; DATA_WORDS + PARITY_SYMBOLS];
    out[..DATA_WORDS].copy_from_slice(data);
    out[DATA_WORDS..].copy_from_slice(&parity);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syndrome::syndromes;

    #[test]
    fn systematic_property_preserves_input() {
        let mut data = [0u8; DATA_WORDS];
        for (i, d) in data.iter_mut().enumerate() {
            *d = ((i * 31 + 7) % 128) as u8;
        }
        let codeword = encode_codeword(&data);
        assert_eq!(&codeword[..DATA_WORDS], &data[..]);
    }

    #[test]
    fn encoded_codeword_has_zero_syndromes() {
        let mut data = [0u8; DATA_WORDS];
        for (i, d) in data.iter_mut().enumerate() {
            *d = ((i * 53 + 11) % 128) as u8;
        }
        let codeword = encode_codeword(&data);
        let syn = syndromes(&codeword);
        assert!(syn.iter().all(|&s| s == 0), "syndromes not all zero: {syn:?}");
    }

    #[test]
    fn all_zero_input_encodes_to_all_zero_parity() {
        let data = [0u8; DATA_WORDS];
        let parity = encode_slice(&data);
        assert_eq!(parity, [0u8; PARITY_SYMBOLS]);
    }
}
