//! Error type shared by every primitive in the crate.
//!
//! All variants describe caller input that a primitive refuses to process.
//! None of them are transient: the same input always produces the same error.

/// Error returned when a primitive is handed input outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum BinopsError {
    /// Rotation amount is not in `[0, bits)`.
    #[error("shift of {shift} bits is out of range for a {bits}-bit word")]
    InvalidShift {
        /// Requested rotation amount.
        shift: u32,
        /// Width of the word being rotated.
        bits: u32,
    },

    /// Block size of zero passed to a padding query.
    #[error("block size must be positive, got {block_size}")]
    InvalidBlockSize {
        /// Rejected block size.
        block_size: usize,
    },

    /// Integer type is not an 8, 16, 32 or 64-bit word.
    #[error("unsupported word width of {bits} bits")]
    UnsupportedWidth {
        /// Width of the rejected type.
        bits: u32,
    },

    /// Byte sequence cannot be split into whole words.
    #[error("{len} bytes do not divide into {word_bytes}-byte words")]
    UnalignedLength {
        /// Length of the byte sequence.
        len: usize,
        /// Size of one word in bytes.
        word_bytes: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = BinopsError> = core::result::Result<T, E>;
