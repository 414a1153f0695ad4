//! PKCS#7 padding

use crate::error::{DesError, Result};

/// How much of the padding trailer `unpad_with` inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingCheck {
    /// Every pad byte must equal the pad length, and the length must not
    /// exceed the block size.
    #[default]
    Strict,
    /// Trust the last byte as the pad length without looking at the other
    /// pad bytes. Compatible with ciphertexts from tools that never checked.
    Lenient,
}

/// Append `n = block_size - len % block_size` bytes of value `n`.
///
/// Padding is always added, so aligned input grows by a full block.
pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if block_size == 0 || block_size > usize::from(u8::MAX) {
        return Err(DesError::InvalidBlockSize);
    }

    let pad_len = block_size - (data.len() % block_size);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);

    Ok(padded)
}

/// Strip PKCS#7 padding, rejecting malformed trailers.
pub fn unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    unpad_with(data, block_size, PaddingCheck::Strict)
}

pub fn unpad_with(data: &[u8], block_size: usize, check: PaddingCheck) -> Result<Vec<u8>> {
    if block_size == 0 || block_size > usize::from(u8::MAX) {
        return Err(DesError::InvalidBlockSize);
    }

    let pad_len = match data.last() {
        Some(&n) => usize::from(n),
        None => return Err(DesError::InvalidPadding),
    };

    if pad_len == 0 || pad_len > data.len() {
        return Err(DesError::InvalidPadding);
    }

    let (body, trailer) = data.split_at(data.len() - pad_len);

    if check == PaddingCheck::Strict
        && (pad_len > block_size || trailer.iter().any(|&b| usize::from(b) != pad_len))
    {
        return Err(DesError::InvalidPadding);
    }

    Ok(body.to_vec())
}
