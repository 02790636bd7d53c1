//! Byte order detection, swapping and word (de)serialization.
//!
//! Everything here works on explicit shifts and masks. The native byte order
//! is only ever observed through `to_ne_bytes`, never through pointer casts.

use log::debug;
use num_traits::AsPrimitive;

use crate::error::{BinopsError, Result};
use crate::word::{Word, bits};

const PROBE: u32 = 0x0102_0304;

/// Byte order of a multi-byte word in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endian {
    /// Byte order of the compilation target.
    pub const NATIVE: Endian = if cfg!(target_endian = "big") {
        Endian::Big
    } else {
        Endian::Little
    };

    /// Byte order observed at runtime by [`is_big_endian`].
    pub fn detect() -> Self {
        if is_big_endian() {
            Endian::Big
        } else {
            Endian::Little
        }
    }
}

/// Returns `true` when the running machine stores the most significant byte
/// of a word first.
///
/// ```
/// assert_eq!(binops::is_big_endian(), cfg!(target_endian = "big"));
/// ```
#[inline]
pub fn is_big_endian() -> bool {
    PROBE.to_ne_bytes()[0] == 0x01
}

/// `bits` must be the validated width of `T`.
#[inline(always)]
pub(crate) fn swap<T: Word>(value: T, bits: u32) -> T {
    let mask = T::max_value() >> (bits - 8) as usize;
    let mut out = T::zero();
    for k in 0..(bits / 8) as usize {
        let byte = (value >> (k * 8)) & mask;
        // an 8-bit word never reaches the shift
        out = if k == 0 { byte } else { (out << 8) | byte };
    }
    out
}

/// Reverses the byte order of `value`. Bits within each byte are untouched.
///
/// # Errors
/// [`BinopsError::UnsupportedWidth`] for words wider than 64 bits.
///
/// ```
/// assert_eq!(binops::swap_byte_order(0x1122_3344u32), Ok(0x4433_2211));
/// ```
#[inline]
pub fn swap_byte_order<T: Word>(value: T) -> Result<T> {
    let bits = bits::<T>()?;
    Ok(swap(value, bits))
}

/// Converts a native value into the value whose in-memory bytes are laid out
/// in `order`.
#[inline]
pub fn to_endian<T: Word>(value: T, order: Endian) -> Result<T> {
    let bits = bits::<T>()?;
    if order == Endian::NATIVE {
        Ok(value)
    } else {
        Ok(swap(value, bits))
    }
}

/// Converts a value stored in `order` back into a native value.
#[inline]
pub fn from_endian<T: Word>(value: T, order: Endian) -> Result<T> {
    to_endian(value, order)
}

fn word_bytes<T: Word>() -> Result<usize> {
    Ok((bits::<T>()? / 8) as usize)
}

fn pack<'a, T: Word>(bytes: impl Iterator<Item = &'a u8>) -> T {
    bytes.enumerate().fold(T::zero(), |acc, (i, &b)| {
        let b = <T as From<u8>>::from(b);
        if i == 0 { b } else { (acc << 8) | b }
    })
}

/// Decodes a byte sequence into words stored in `order`.
///
/// # Errors
/// [`BinopsError::UnalignedLength`] if `bytes` does not split into whole
/// words.
///
/// ```
/// use binops::{Endian, load_words};
///
/// let words: Vec<u32> = load_words(&[0x04, 0x03, 0x02, 0x01], Endian::Little).unwrap();
/// assert_eq!(words, [0x0102_0304]);
/// ```
pub fn load_words<T: Word>(bytes: &[u8], order: Endian) -> Result<Vec<T>> {
    let word_bytes = word_bytes::<T>()?;
    if !bytes.len().is_multiple_of(word_bytes) {
        debug!(
            "cannot load {}-byte words from {} bytes",
            word_bytes,
            bytes.len()
        );
        return Err(BinopsError::UnalignedLength {
            len: bytes.len(),
            word_bytes,
        });
    }

    let words: Vec<T> = bytes
        .chunks_exact(word_bytes)
        .map(|chunk| match order {
            Endian::Big => pack(chunk.iter()),
            Endian::Little => pack(chunk.iter().rev()),
        })
        .collect();
    Ok(words)
}

/// Encodes words into a byte sequence laid out in `order`.
pub fn store_words<T: Word>(words: &[T], order: Endian) -> Result<Vec<u8>> {
    let word_bytes = word_bytes::<T>()?;
    let mut out = Vec::with_capacity(words.len() * word_bytes);
    for &word in words {
        for i in 0..word_bytes {
            let shift = match order {
                Endian::Big => 8 * (word_bytes - 1 - i),
                Endian::Little => 8 * i,
            };
            out.push(<T as AsPrimitive<u8>>::as_(word >> shift));
        }
    }
    Ok(out)
}
