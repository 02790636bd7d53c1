//! Block alignment queries. Nothing here inserts padding.

use log::debug;

use crate::error::{BinopsError, Result};

#[inline]
fn check_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 {
        debug!("rejecting zero block size");
        return Err(BinopsError::InvalidBlockSize { block_size });
    }
    Ok(())
}

/// Reports whether `bytes` must be padded before it can be split into
/// complete blocks of `block_size` bytes.
///
/// An empty sequence reports `true`: a cipher always emits at least one
/// block, so an empty message is padded to a full block.
///
/// # Errors
/// [`BinopsError::InvalidBlockSize`] if `block_size` is zero.
///
/// ```
/// use binops::needs_padding;
///
/// assert_eq!(needs_padding(&[0u8; 16], 16), Ok(false));
/// assert_eq!(needs_padding(&[0u8; 20], 16), Ok(true));
/// assert_eq!(needs_padding(&[], 16), Ok(true));
/// ```
#[inline]
pub fn needs_padding(bytes: &[u8], block_size: usize) -> Result<bool> {
    check_block_size(block_size)?;
    let len = bytes.len();
    Ok((len < block_size && block_size - len != 0) || len % block_size != 0)
}

/// Number of bytes left over after the last complete block.
pub fn trailing_bytes(bytes: &[u8], block_size: usize) -> Result<usize> {
    check_block_size(block_size)?;
    Ok(bytes.len() % block_size)
}

/// Number of complete blocks of `block_size` bytes in `bytes`.
pub fn full_blocks(bytes: &[u8], block_size: usize) -> Result<usize> {
    check_block_size(block_size)?;
    Ok(bytes.len() / block_size)
}
