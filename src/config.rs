//! Ambient per-call configuration. The codec's field and generator
//! constants are fixed (spec.md §6: "no runtime configuration"); the one
//! flag a wrapping program actually drives per block is whether CRC-18
//! is layered into the payload.

/// Per-block codec configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// When `true`, word 120's `din` is reserved for the CRC-18 residue
    /// (spec.md §6).
    pub crc_enable: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig { crc_enable: false }
    }
}
