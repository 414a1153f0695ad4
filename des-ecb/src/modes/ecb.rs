//! ECB (Electronic Code Book) mode implementation

use log::trace;

use crate::error::DesError;
use crate::padding::{self, PaddingCheck};
use crate::{utils, BlockCipher, Result, BLOCK_SIZE};

use super::CipherModes;

impl CipherModes {
    /// ECB mode encryption
    ///
    /// Pads `plaintext` and transforms every block independently with the
    /// same key. Identical plaintext blocks give identical ciphertext blocks.
    pub fn ecb_encrypt<C: BlockCipher + Sync>(
        cipher: &C,
        key: u64,
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let padded_data = padding::pad(plaintext, BLOCK_SIZE)?;
        trace!("ecb encrypt: {} blocks", padded_data.len() / BLOCK_SIZE);

        Ok(transform_blocks(&padded_data, |block| cipher.encrypt(key, block)))
    }

    /// ECB mode decryption with strict padding checks
    pub fn ecb_decrypt<C: BlockCipher + Sync>(
        cipher: &C,
        key: u64,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        Self::ecb_decrypt_with(cipher, key, ciphertext, PaddingCheck::Strict)
    }

    /// ECB mode decryption, choosing how the padding trailer is verified
    pub fn ecb_decrypt_with<C: BlockCipher + Sync>(
        cipher: &C,
        key: u64,
        ciphertext: &[u8],
        check: PaddingCheck,
    ) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(DesError::MisalignedCiphertext {
                len: ciphertext.len(),
                block_size: BLOCK_SIZE,
            });
        }
        trace!("ecb decrypt: {} blocks", ciphertext.len() / BLOCK_SIZE);

        let plaintext = transform_blocks(ciphertext, |block| cipher.decrypt(key, block));
        padding::unpad_with(&plaintext, BLOCK_SIZE, check)
    }
}

/// Apply `op` to every block of `data` (length a multiple of the block size),
/// keeping each output block at its input position.
#[cfg(not(feature = "parallel"))]
fn transform_blocks<F>(data: &[u8], op: F) -> Vec<u8>
where
    F: Fn(u64) -> u64,
{
    let mut out = vec![0u8; data.len()];
    for (src, dst) in data
        .chunks_exact(BLOCK_SIZE)
        .zip(out.chunks_exact_mut(BLOCK_SIZE))
    {
        dst.copy_from_slice(&utils::block_to_bytes(op(utils::block_from_bytes(src))));
    }
    out
}

#[cfg(feature = "parallel")]
fn transform_blocks<F>(data: &[u8], op: F) -> Vec<u8>
where
    F: Fn(u64) -> u64 + Sync,
{
    use rayon::prelude::*;

    let mut out = vec![0u8; data.len()];
    data.par_chunks_exact(BLOCK_SIZE)
        .zip(out.par_chunks_exact_mut(BLOCK_SIZE))
        .for_each(|(src, dst)| {
            dst.copy_from_slice(&utils::block_to_bytes(op(utils::block_from_bytes(src))));
        });
    out
}
