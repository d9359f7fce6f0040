//! Error taxonomy (spec.md §7). Only input-shape preconditions that are
//! genuinely a caller mistake are reported as `Result`s; everything else
//! spec.md calls "fatal" remains a panic/`debug_assert!`, and the
//! "expected" per-slice/CRC conditions are reported via
//! [`crate::codec::DecodeStatus`], not this error type.

use thiserror::Error;

/// Preconditions a caller can violate when invoking [`crate::codec::encode`]
/// or [`crate::codec::decode`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The supplied word buffer did not have the length this block
    /// format requires.
    #[error("expected {expected} words, got {got}")]
    WrongWordCount { expected: usize, got: usize },
}
