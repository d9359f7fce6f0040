//! Generator polynomial g(x) = prod_{i=1..6} (x + alpha^i), and the
//! build-time check against the fixed constants spec.md §3 requires.

use crate::gf::tables;
use crate::poly::Poly;

/// g_0..g_5, leading coefficient g_6 = 1 implicit. A mismatch here means
/// the GF tables or the build loop have drifted from spec.md §3 — a
/// configuration error, fatal per spec.md §7 item 1.
pub const GENERATOR_COEFFS: [u8; 6] = [0x6D, 0x22, 0x64, 0x44, 0x40, 0x7E];

/// Builds g(x) and asserts it matches [`GENERATOR_COEFFS`].
///
/// # Panics
///
/// Panics if the computed coefficients disagree with the spec constants.
/// This is a fatal configuration error (spec.md §7 item 1): there is no
/// way to recover a correct codec from a miscomputed generator, so the
/// process aborts rather than returning a `Result`.
pub fn build_generator() -> Poly {
    let t = tables();
    let mut g = Poly::one();
    for i in 1..=6 {
        let root = t.exp(i);
        g = g.convolve(&Poly::from_coeffs(vec![root, 1]));
    }

    if g.0.len() != 7 || g.0[..6] != GENERATOR_COEFFS || g.0[6] != 1 {
        tracing::error!(
            computed = ?g.0,
            expected_low6 = ?GENERATOR_COEFFS,
            "generator polynomial does not match spec constants"
        );
        panic!(
            "generator polynomial mismatch: computed {:?}, expected [{:?}, leading 1]",
            g.0, GENERATOR_COEFFS
        );
    }

    g
}

use std::sync::OnceLock;

static GENERATOR: OnceLock<Poly> = OnceLock::new();

/// Process-wide generator polynomial, built and verified once.
pub fn generator() -> &'static Poly {
    GENERATOR.get_or_init(build_generator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_matches_spec_constants() {
        let g = generator();
        assert_eq!(&g.0[..6], &GENERATOR_COEFFS[..]);
        assert_eq!(g.0[6], 1);
    }
}
