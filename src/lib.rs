//! # Binops
//!
//! Bit-level building blocks for block cipher implementations such as RC6:
//! circular word rotation, byte order detection and swapping, and block
//! padding detection.
//!
//! ## Word Operations
//! All scalar operations are generic over the unsigned primitives through the
//! [`Word`] bound. Only 8, 16, 32 and 64-bit words are accepted; a wider type
//! is reported as [`BinopsError::UnsupportedWidth`] rather than silently
//! producing a different bit pattern.
//!
//! * **Rotation**: [`rotate_left`] and [`rotate_right`] require a shift in
//!   `[0, bits)`. Anything else is a [`BinopsError::InvalidShift`].
//! * **Byte order**: [`is_big_endian`], [`swap_byte_order`], and the
//!   [`to_endian`] / [`from_endian`] pair for normalizing words to a wire
//!   order. [`load_words`] and [`store_words`] convert between byte blocks
//!   and cipher registers.
//! * **Padding**: [`needs_padding`] answers whether a message splits into
//!   whole blocks. Padding itself is left to the cipher mode.
//!
//! ## Buffer Operations
//! The [`batch`] module applies a rotation or byte swap to a whole buffer in
//! place, mirroring the serial / parallel / auto split used by the block
//! processing code that consumes these primitives:
//! * **Serial Path**: `*_slice` for small buffers.
//! * **Parallel Path**: `*_par` uses Rayon over fixed-size chunks.
//! * **Auto Dispatch**: `*_auto` switches to the parallel path at
//!   [`batch::AUTO_PAR_THRESHOLD`] bytes.
//!
//! ## Logging
//! Rejected arguments are reported through the [`log`] facade at `debug`
//! level and dispatch decisions at `trace`. The crate never installs a logger.
//!
//! ## Examples
//!
//! ```rust
//! use binops::{Endian, load_words, needs_padding, rotate_left, store_words};
//!
//! let block = *b"0123456789abcdef";
//! assert_eq!(needs_padding(&block, 16), Ok(false));
//!
//! let mut regs: Vec<u32> = load_words(&block, Endian::Little).unwrap();
//! regs[0] = rotate_left(regs[0], 5).unwrap();
//! let out = store_words(&regs, Endian::Little).unwrap();
//! assert_eq!(out.len(), 16);
//! ```

pub mod batch;
pub mod endian;
pub mod error;
pub mod padding;
pub mod word;

pub use endian::{
    Endian, from_endian, is_big_endian, load_words, store_words, swap_byte_order, to_endian,
};
pub use error::{BinopsError, Result};
pub use padding::{full_blocks, needs_padding, trailing_bytes};
pub use word::{Word, bits, rotate_left, rotate_right};
