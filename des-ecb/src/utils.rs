//! Big-endian conversion between byte sequences and unsigned integers

use crate::error::{DesError, Result};
use crate::BLOCK_SIZE;

/// Interpret `bytes` as an unsigned big-endian integer.
///
/// Inputs longer than eight bytes are accepted as long as the extra leading
/// bytes are zero; otherwise the value cannot be represented and
/// [`DesError::IntegerOverflow`] is returned.
pub fn bytes_to_int(bytes: &[u8]) -> Result<u64> {
    let first_significant = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_significant..];

    if significant.len() > BLOCK_SIZE {
        return Err(DesError::IntegerOverflow { bytes: BLOCK_SIZE });
    }

    Ok(significant
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Encode `value` as exactly `length` big-endian bytes, zero-padded on the left.
///
/// Fails instead of truncating when `value` needs more than `length` bytes.
pub fn int_to_bytes(value: u64, length: usize) -> Result<Vec<u8>> {
    let needed = BLOCK_SIZE - (value.leading_zeros() as usize / 8);
    if needed > length {
        return Err(DesError::IntegerOverflow { bytes: length });
    }

    let mut out = vec![0u8; length];
    let be = value.to_be_bytes();
    out[length - needed..].copy_from_slice(&be[BLOCK_SIZE - needed..]);
    Ok(out)
}

/// Read one full block as a `u64`. The caller guarantees `block.len() == 8`.
pub(crate) fn block_from_bytes(block: &[u8]) -> u64 {
    let mut buf = [0u8; BLOCK_SIZE];
    buf.copy_from_slice(block);
    u64::from_be_bytes(buf)
}

pub(crate) fn block_to_bytes(block: u64) -> [u8; BLOCK_SIZE] {
    block.to_be_bytes()
}
