//! Circular rotation over fixed-width unsigned words.

use core::fmt::Debug;

use log::debug;
use num_traits::{AsPrimitive, PrimInt, Unsigned};

use crate::error::{BinopsError, Result};

/// Unsigned integer usable as a cipher word.
///
/// Implemented for every unsigned primitive. Only 8, 16, 32 and 64-bit
/// widths are accepted at call time; anything else (`u128`) is reported as
/// [`BinopsError::UnsupportedWidth`].
pub trait Word: PrimInt + Unsigned + Debug + From<u8> + AsPrimitive<u8> {}

impl<T> Word for T where T: PrimInt + Unsigned + Debug + From<u8> + AsPrimitive<u8> {}

/// Width of `T` in bits, if `T` is a supported word.
#[inline]
pub fn bits<T: Word>() -> Result<u32> {
    let bits = T::zero().count_zeros();
    match bits {
        8 | 16 | 32 | 64 => Ok(bits),
        _ => {
            debug!("rejecting {bits}-bit word type");
            Err(BinopsError::UnsupportedWidth { bits })
        }
    }
}

/// Validates `shift` against the width of `T` and returns that width.
#[inline]
pub(crate) fn check_shift<T: Word>(shift: u32) -> Result<u32> {
    let bits = bits::<T>()?;
    if shift >= bits {
        debug!("rejecting rotation by {shift} on a {bits}-bit word");
        return Err(BinopsError::InvalidShift { shift, bits });
    }
    Ok(bits)
}

/// `shift` must already be in `[0, bits)`.
#[inline(always)]
pub(crate) fn rol<T: Word>(word: T, shift: u32, bits: u32) -> T {
    if shift == 0 {
        return word;
    }
    (word << shift as usize) | (word >> (bits - shift) as usize)
}

/// `shift` must already be in `[0, bits)`.
#[inline(always)]
pub(crate) fn ror<T: Word>(word: T, shift: u32, bits: u32) -> T {
    if shift == 0 {
        return word;
    }
    (word >> shift as usize) | (word << (bits - shift) as usize)
}

/// Rotates `word` left by `shift` bits, wrapping the high bits around.
///
/// # Errors
/// [`BinopsError::InvalidShift`] if `shift` is not below the word width.
///
/// ```
/// assert_eq!(binops::rotate_left(0b1011_0000u8, 3), Ok(0b1000_0101));
/// assert!(binops::rotate_left(1u32, 32).is_err());
/// ```
#[inline]
pub fn rotate_left<T: Word>(word: T, shift: u32) -> Result<T> {
    let bits = check_shift::<T>(shift)?;
    Ok(rol(word, shift, bits))
}

/// Rotates `word` right by `shift` bits, wrapping the low bits around.
///
/// # Errors
/// [`BinopsError::InvalidShift`] if `shift` is not below the word width.
#[inline]
pub fn rotate_right<T: Word>(word: T, shift: u32) -> Result<T> {
    let bits = check_shift::<T>(shift)?;
    Ok(ror(word, shift, bits))
}
