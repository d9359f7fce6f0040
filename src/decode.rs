//! Per-slice corrector: drives syndromes -> Berlekamp-Massey -> Chien
//! search -> Forney -> correction for one RS(127,121) codeword
//! (spec.md §4.K, §7).

use crate::bm::berlekamp_massey;
use crate::chien::{chien_search, MAX_ERRORS};
use crate::forney::forney_corrections;
use crate::slice::{CODEWORD_LEN, DATA_WORDS};
use crate::syndrome::{all_zero, syndromes};

/// Outcome of decoding one slice.
pub struct SliceDecodeResult {
    /// The (possibly corrected) 121 data symbols.
    pub data: [u8; DATA_WORDS],
    /// Number of symbol corrections applied.
    pub corrected: usize,
    /// `true` if this slice could not be reliably corrected; `data` is
    /// then the uncorrected received data (spec.md §7: "leave that
    /// slice's data unchanged").
    pub uncorrectable: bool,
}

fn take_data(codeword: &[u8; CODEWORD_LEN]) -> [u8; DATA_WORDS] {
    let mut data = [0u8; DATA_WORDS];
    data.copy_from_slice(&codeword[..DATA_WORDS]);
    data
}

/// Decodes and, in place, corrects one 127-symbol RS codeword.
///
/// Per spec.md §7 item 3, a slice is reported uncorrectable when any of:
/// Berlekamp-Massey yields `sigma` with degree outside `1..=3`; Chien
/// search finds a root count that doesn't match `deg(sigma)`; Chien
/// finds more than 3 roots; or Forney's denominator is zero. In every
/// uncorrectable case this slice's data is left unchanged, matching
/// spec.md §7's "do not attempt further processing of that slice".
pub fn decode_slice(codeword: &mut [u8; CODEWORD_LEN]) -> SliceDecodeResult {
    let syn = syndromes(codeword);
    if all_zero(&syn) {
        return SliceDecodeResult { data: take_data(codeword), corrected: 0, uncorrectable: false };
    }

    let bm = berlekamp_massey(&syn);
    let degree = match bm.sigma.degree() {
        Some(d) if (1..=MAX_ERRORS).contains(&d) => d,
        other => {
            tracing::warn!(degree = ?other, "berlekamp-massey locator degree out of range, slice uncorrectable");
            return SliceDecodeResult { data: take_data(codeword), corrected: 0, uncorrectable: true };
        }
    };

    let roots = chien_search(&bm.sigma);
    if roots.len() != degree || roots.len() > MAX_ERRORS {
        tracing::warn!(found = roots.len(), expected = degree, "chien search root count mismatch, slice uncorrectable");
        return SliceDecodeResult { data: take_data(codeword), corrected: 0, uncorrectable: true };
    }

    match forney_corrections(&bm.sigma, &bm.omega, &roots) {
        Ok(corrections) => {
            for c in &corrections {
                tracing::trace!(index = c.index, magnitude = c.magnitude, "applying correction");
                codeword[c.index] ^= c.magnitude;
            }
            SliceDecodeResult { data: take_data(codeword), corrected: corrections.len(), uncorrectable: false }
        }
        Err(_) => {
            tracing::warn!("forney denominator is zero, slice uncorrectable");
            SliceDecodeResult { data: take_data(codeword), corrected: 0, uncorrectable: true }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rs_encode::encode_codeword;

    fn sample_data(seed: u8) -> [u8; DATA_WORDS] {
        let mut data = [0u8; DATA_WORDS];
        for (i, d) in data.iter_mut().enumerate() {
            *d = ((i as u32 * 37 + seed as u32) % 128) as u8;
        }
        data
    }

    #[test]
    fn no_error_round_trips() {
        let data = sample_data(3);
        let mut codeword = encode_codeword(&data);
        let result = decode_slice(&mut codeword);
        assert_eq!(result.data, data);
        assert_eq!(result.corrected, 0);
        assert!(!result.uncorrectable);
    }

    #[test]
    fn single_error_is_corrected() {
        let data = sample_data(9);
        let mut codeword = encode_codeword(&data);
        codeword[42] ^= 0x5B;

        let result = decode_slice(&mut codeword);
        assert_eq!(result.data, data);
        assert_eq!(result.corrected, 1);
        assert!(!result.uncorrectable);
    }

    #[test]
    fn three_errors_are_corrected() {
        let data = sample_data(21);
        let mut codeword = encode_codeword(&data);
        codeword[0] ^= 0x12;
        codeword[60] ^= 0x34;
        codeword[120] ^= 0x56;

        let result = decode_slice(&mut codeword);
        assert_eq!(result.data, data);
        assert_eq!(result.corrected, 3);
        assert!(!result.uncorrectable);
    }

    #[test]
    fn four_errors_are_flagged_or_benignly_match() {
        let data = sample_data(40);
        let mut codeword = encode_codeword(&data);
        codeword[0] ^= 0x7F;
        codeword[30] ^= 0x7F;
        codeword[60] ^= 0x7F;
        codeword[90] ^= 0x7F;

        let result = decode_slice(&mut codeword);
        assert!(result.uncorrectable || result.data == data);
    }
}
