//! Polynomials over GF(2^7), ascending coefficient order (`coeffs[0]` is
//! the constant term). This is the convention spec.md §9 designates for
//! Berlekamp-Massey/Forney/Chien; the syndrome computer converts to the
//! descending Horner stream at its own interface (see `syndrome.rs`) so
//! this module need not know about that ordering at all.
//!
//! Shaped like `gf256.rs`'s free-function `poly_mul`, generalized to the
//! rest of the operations spec.md §4.B names.

use crate::gf::tables;

/// A polynomial over GF(2^7) with `coeffs[i]` the coefficient of `x^i`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Poly(pub Vec<u8>);

impl Poly {
    pub fn zero() -> Self {
        Poly(vec![0])
    }

    pub fn one() -> Self {
        Poly(vec![1])
    }

    pub fn from_coeffs(coeffs: impl Into<Vec<u8>>) -> Self {
        let mut p = Poly(coeffs.into());
        if p.0.is_empty() {
            p.0.push(0);
        }
        p
    }

    /// Highest index with a nonzero coefficient, or `None` if identically zero.
    pub fn degree(&self) -> Option<usize> {
        self.0.iter().rposition(|&c| c != 0)
    }

    pub fn coeff(&self, i: usize) -> u8 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Drops trailing zero coefficients above the true degree, keeping at
    /// least one coefficient (the constant term, even if it's zero).
    pub fn trim(&mut self) {
        while self.0.len() > 1 && *self.0.last().unwrap() == 0 {
            self.0.pop();
        }
    }

    /// Pointwise XOR-add with zero-padding to the longer operand.
    pub fn add(&self, other: &Poly) -> Poly {
        let n = self.0.len().max(other.0.len());
        let mut out = vec![0u8; n];
        for i in 0..n {
            out[i] = self.coeff(i) ^ other.coeff(i);
        }
        let mut p = Poly(out);
        p.trim();
        p
    }

    /// Schoolbook convolution: `self * other`.
    pub fn convolve(&self, other: &Poly) -> Poly {
        let t = tables();
        let mut out = vec![0u8; self.0.len() + other.0.len() - 1];
        for (i, &a) in self.0.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.0.iter().enumerate() {
                out[i + j] ^= t.mul(a, b);
            }
        }
        let mut p = Poly(out);
        p.trim();
        p
    }

    /// Multiply every coefficient by the scalar `s`.
    pub fn scale(&self, s: u8) -> Poly {
        let t = tables();
        Poly(self.0.iter().map(|&c| t.mul(c, s)).collect())
    }

    /// Multiply by `x^m`: prepend `m` zero coefficients.
    pub fn shift(&self, m: usize) -> Poly {
        let mut out = vec![0u8; m];
        out.extend_from_slice(&self.0);
        Poly(out)
    }

    /// Horner evaluation: `(...((c_k*x + c_{k-1})*x + ...) + c_0`.
    pub fn eval(&self, x: u8) -> u8 {
        let t = tables();
        let mut acc = 0u8;
        for &c in self.0.iter().rev() {
            acc = t.mul(acc, x) ^ c;
        }
        acc
    }

    /// Formal derivative. In characteristic 2, `d(x^{2k})/dx = 0` and
    /// `d(x^{2k+1})/dx = x^{2k}`, so odd-degree terms survive shifted
    /// down by one and even-degree terms vanish: `new[i] = P[i+1]` when
    /// `i` is even, else `0`.
    pub fn deriv(&self) -> Poly {
        let n = self.0.len();
        let mut out = vec![0u8; n];
        for i in (0..n).step_by(2) {
            out[i] = self.coeff(i + 1);
        }
        let mut p = Poly(out);
        p.trim();
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_xor_and_self_inverse() {
        let a = Poly::from_coeffs(vec![1, 2, 3]);
        let b = Poly::from_coeffs(vec![4, 5]);
        let c = a.add(&b);
        assert_eq!(c.add(&b), a);
    }

    #[test]
    fn convolve_by_one_is_identity() {
        let a = Poly::from_coeffs(vec![1, 2, 3, 4]);
        let one = Poly::one();
        assert_eq!(a.convolve(&one), a);
    }

    #[test]
    fn shift_prepends_zeros() {
        let a = Poly::from_coeffs(vec![1, 2]);
        let shifted = a.shift(3);
        assert_eq!(shifted.0, vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn eval_zero_is_constant_term() {
        let a = Poly::from_coeffs(vec![9, 2, 3]);
        assert_eq!(a.eval(0), 9);
    }

    #[test]
    fn deriv_drops_even_terms() {
        // p(x) = 1 + 2x + 3x^2 + 4x^3 -> p'(x) = 2 + 4x^2 (coeffs at odd original indices shift down)
        let a = Poly::from_coeffs(vec![1, 2, 3, 4]);
        let d = a.deriv();
        assert_eq!(d.coeff(0), 2);
        assert_eq!(d.coeff(1), 0);
        assert_eq!(d.coeff(2), 4);
    }

    #[test]
    fn scale_by_zero_is_zero_poly() {
        let a = Poly::from_coeffs(vec![1, 2, 3]);
        let z = a.scale(0);
        assert_eq!(z.degree(), None);
    }
}
