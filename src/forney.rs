//! Forney error-magnitude evaluation and the degree-to-codeword-index
//! mapping (spec.md §4.I, §4.J).

use crate::gf::tables;
use crate::poly::Poly;
use crate::slice::DATA_WORDS;

/// One correction to apply: XOR `magnitude` into the codeword at `index`
/// (0-based, within the 127-symbol `[d_0..d_120, p_0..p_5]` layout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Correction {
    pub index: usize,
    pub magnitude: u8,
}

/// Forney's denominator evaluated to zero — the block is uncorrectable
/// (spec.md §7 item 3d).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroDenominator;

/// Maps a 0-based Chien-search error degree `j` (`0..=126`) to its index
/// in the `[d_0..d_120, p_0..p_5]` codeword array.
///
/// Degrees `6..=126` are data (`d_0 = r_126 .. d_120 = r_6`); degrees
/// `0..=5` are parity (`p_0 = r_5 .. p_5 = r_0`). This is the mapping
/// consistent with the syndrome's descending-degree Horner order
/// (§4.F), where the data segment is read forward and the parity
/// segment reversed — see spec.md §9 for the two inconsistent variants
/// this rules out.
pub fn degree_to_index(j: usize) -> usize {
    if j >= 6 {
        DATA_WORDS - 1 - (j - 6)
    } else {
        DATA_WORDS + (5 - j)
    }
}

/// Computes the error magnitude for each root found by Chien search and
/// maps it to its codeword index.
///
/// # Errors
///
/// Returns [`ZeroDenominator`] the first time `sigma'(X_j^-1) = 0`,
/// signalling an uncorrectable block (spec.md §7 item 3d).
pub fn forney_corrections(sigma: &Poly, omega: &Poly, roots: &[usize]) -> Result<Vec<Correction>, ZeroDenominator> {
    let t = tables();
    let sigma_prime = sigma.deriv();

    let mut out = Vec::with_capacity(roots.len());
    for &j in roots {
        let x_inv = t.alpha_inv_pow(j);
        let num = omega.eval(x_inv);
        let den = sigma_prime.eval(x_inv);
        if den == 0 {
            return Err(ZeroDenominator);
        }
        let magnitude = t.div(num, den);
        out.push(Correction { index: degree_to_index(j), magnitude });
    }
    Ok(out)
}
