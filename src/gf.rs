//! GF(2^7) arithmetic: exponent/log tables over the fixed primitive
//! polynomial p(x) = x^7 + x^3 + 1, and the four scalar operations built
//! on top of them.
//!
//! Mirrors the table-generation shape of `f2e16.rs`'s `init()` (log/exp
//! tables built once from a generator constant), scaled down from
//! GF(2^16) to the 7-bit field this codec actually uses.

/// Field size: 2^7.
pub const FIELD_SIZE: usize = 128;

/// `exp[i] = alpha^i` for `i` in `0..=126`; never indexed outside that range.
pub const EXP_LEN: usize = 127;

/// Primitive element.
pub const ALPHA: u8 = 2;

/// 8-bit feedback constant used while walking the LFSR that generates the
/// table: XORing it into a 8-bit overflowed state is equivalent to
/// reducing modulo p(x) = x^7 + x^3 + 1 (low 7 bits 0x09) with bit 7
/// cleared.
pub const GF_FEEDBACK: u8 = 0x89;

/// Low-7-bit residue of p(x) - x^7, kept only for documentation parity
/// with spec.md; table construction uses [`GF_FEEDBACK`] directly.
pub const GF_PRIMITIVE_LOW7: u8 = 0x09;

/// Precomputed exponent/log tables for GF(2^7).
///
/// `log[0]` is never populated meaningfully (index 0 of the field has no
/// logarithm) and must never be consulted; callers route through
/// [`GfTables::mul`]/[`div`]/[`inv`] which all special-case zero first.
pub struct GfTables {
    exp: [u8; EXP_LEN],
    log: [u8; FIELD_SIZE],
}

impl GfTables {
    /// Builds the tables once. Cheap enough (127 iterations) to not need
    /// `OnceLock` caching beyond what [`tables()`] already provides.
    pub fn new() -> Self {
        let mut exp = [0u8; EXP_LEN];
        let mut log = [0u8; FIELD_SIZE];

        let mut v: u16 = 1;
        exp[0] = 1;
        log[1] = 0;
        for i in 1..EXP_LEN {
            v <<= 1;
            if v >= 128 {
                v ^= GF_FEEDBACK as u16;
            }
            exp[i] = v as u8;
            log[v as usize] = i as u8;
        }

        GfTables { exp, log }
    }

    #[inline]
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % EXP_LEN]
    }

    #[inline]
    pub fn log(&self, v: u8) -> u8 {
        debug_assert!(v != 0, "log(0) is undefined and must never be consulted");
        self.log[v as usize]
    }

    #[inline]
    pub fn add(&self, a: u8, b: u8) -> u8 {
        a ^ b
    }

    #[inline]
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            0
        } else {
            let sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
            self.exp[sum % EXP_LEN]
        }
    }

    /// Defined only for `a != 0`; spec.md §4.A treats `inv(0)` as a
    /// precondition violation, so it is a fatal unconditional `assert!`
    /// here rather than a `Result`.
    #[inline]
    pub fn inv(&self, a: u8) -> u8 {
        assert!(a != 0, "inv(0) is a precondition violation");
        let l = self.log[a as usize] as usize;
        self.exp[(EXP_LEN - l) % EXP_LEN]
    }

    /// `b == 0` is a fatal precondition violation (spec.md §4.A).
    #[inline]
    pub fn div(&self, a: u8, b: u8) -> u8 {
        assert!(b != 0, "division by zero in GF(2^7)");
        if a == 0 {
            0
        } else {
            self.mul(a, self.inv(b))
        }
    }

    /// `alpha^(-j mod 127)`, used throughout Chien search and Forney.
    #[inline]
    pub fn alpha_inv_pow(&self, j: usize) -> u8 {
        self.exp((EXP_LEN - (j % EXP_LEN)) % EXP_LEN)
    }
}

impl Default for GfTables {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::OnceLock;

static TABLES: OnceLock<GfTables> = OnceLock::new();

/// Process-wide, read-only GF(2^7) tables. Constructed once on first use
/// and shared by reference thereafter (spec.md §9 "Table lifetime and
/// sharing").
pub fn tables() -> &'static GfTables {
    TABLES.get_or_init(GfTables::new)
}
