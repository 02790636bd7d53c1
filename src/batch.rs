//! In-place rotation and byte-order swapping over whole word buffers.
//!
//! Every operation comes in three flavours:
//! * **Serial** (`*_slice`): a single pass on the calling thread.
//! * **Parallel** (`*_par`): Rayon work-stealing over chunks of
//!   [`PAR_CHUNK_WORDS`] words.
//! * **Auto** (`*_auto`): serial below [`AUTO_PAR_THRESHOLD`] bytes, or when
//!   the pool has a single thread, parallel otherwise.
//!
//! Arguments are validated before the first word is touched, so a rejected
//! call leaves the buffer exactly as it was.

use log::trace;
use rayon::prelude::*;

use crate::endian::swap;
use crate::error::Result;
use crate::word::{Word, bits, check_shift, rol, ror};

/// Buffers at least this many bytes long take the parallel path in `*_auto`.
pub const AUTO_PAR_THRESHOLD: usize = 32_768;

/// Words handed to each Rayon task.
pub const PAR_CHUNK_WORDS: usize = 1024;

#[derive(Clone, Copy, Debug)]
enum Op {
    RotateLeft(u32),
    RotateRight(u32),
    Swap,
}

impl Op {
    /// Checks the operation against `T` and returns the word width.
    fn validate<T: Word>(self) -> Result<u32> {
        match self {
            Op::RotateLeft(shift) | Op::RotateRight(shift) => check_shift::<T>(shift),
            Op::Swap => bits::<T>(),
        }
    }

    #[inline(always)]
    fn apply<T: Word>(self, word: T, bits: u32) -> T {
        match self {
            Op::RotateLeft(shift) => rol(word, shift, bits),
            Op::RotateRight(shift) => ror(word, shift, bits),
            Op::Swap => swap(word, bits),
        }
    }
}

fn process_chunk<T: Word>(chunk: &mut [T], op: Op, bits: u32) {
    for word in chunk.iter_mut() {
        *word = op.apply(*word, bits);
    }
}

fn dispatch_serial<T: Word>(data: &mut [T], op: Op) -> Result<()> {
    let bits = op.validate::<T>()?;
    process_chunk(data, op, bits);
    Ok(())
}

fn dispatch_par<T: Word + Send>(data: &mut [T], op: Op) -> Result<()> {
    let bits = op.validate::<T>()?;
    data.par_chunks_mut(PAR_CHUNK_WORDS)
        .for_each(|c| process_chunk(c, op, bits));
    Ok(())
}

fn dispatch_auto<T: Word + Send>(data: &mut [T], op: Op) -> Result<()> {
    let bits = op.validate::<T>()?;
    let len = data.len() * (bits / 8) as usize;
    if len >= AUTO_PAR_THRESHOLD && rayon::current_num_threads() >= 2 {
        trace!("{op:?} over {len} bytes: parallel");
        data.par_chunks_mut(PAR_CHUNK_WORDS)
            .for_each(|c| process_chunk(c, op, bits));
    } else {
        trace!("{op:?} over {len} bytes: serial");
        process_chunk(data, op, bits);
    }
    Ok(())
}

/// Rotates every word in `data` left by `shift` bits.
///
/// # Errors
/// [`BinopsError::InvalidShift`](crate::BinopsError::InvalidShift) if `shift`
/// is not below the word width; `data` is left unchanged.
pub fn rotate_left_slice<T: Word>(data: &mut [T], shift: u32) -> Result<()> {
    dispatch_serial(data, Op::RotateLeft(shift))
}

/// Rotates every word in `data` left by `shift` bits in parallel.
pub fn rotate_left_par<T: Word + Send>(data: &mut [T], shift: u32) -> Result<()> {
    dispatch_par(data, Op::RotateLeft(shift))
}

/// Rotates every word in `data` left, choosing serial or parallel by size.
pub fn rotate_left_auto<T: Word + Send>(data: &mut [T], shift: u32) -> Result<()> {
    dispatch_auto(data, Op::RotateLeft(shift))
}

/// Rotates every word in `data` right by `shift` bits.
///
/// # Errors
/// [`BinopsError::InvalidShift`](crate::BinopsError::InvalidShift) if `shift`
/// is not below the word width; `data` is left unchanged.
pub fn rotate_right_slice<T: Word>(data: &mut [T], shift: u32) -> Result<()> {
    dispatch_serial(data, Op::RotateRight(shift))
}

/// Rotates every word in `data` right by `shift` bits in parallel.
pub fn rotate_right_par<T: Word + Send>(data: &mut [T], shift: u32) -> Result<()> {
    dispatch_par(data, Op::RotateRight(shift))
}

/// Rotates every word in `data` right, choosing serial or parallel by size.
pub fn rotate_right_auto<T: Word + Send>(data: &mut [T], shift: u32) -> Result<()> {
    dispatch_auto(data, Op::RotateRight(shift))
}

/// Reverses the byte order of every word in `data`.
pub fn swap_byte_order_slice<T: Word>(data: &mut [T]) -> Result<()> {
    dispatch_serial(data, Op::Swap)
}

/// Reverses the byte order of every word in `data` in parallel.
pub fn swap_byte_order_par<T: Word + Send>(data: &mut [T]) -> Result<()> {
    dispatch_par(data, Op::Swap)
}

/// Reverses the byte order of every word in `data`, choosing serial or
/// parallel by size.
pub fn swap_byte_order_auto<T: Word + Send>(data: &mut [T]) -> Result<()> {
    dispatch_auto(data, Op::Swap)
}
