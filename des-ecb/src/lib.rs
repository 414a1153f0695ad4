//! # DES-style ECB Library
//!
//! A keyed 64-bit block transform, the ECB mode of operation and PKCS#7
//! padding, exposed through four length-checked entry points.
//!
//! ## Usage
//!
//! ```rust
//! use des_ecb::{decrypt_bytes, encrypt_bytes};
//!
//! let key = b"8bytekey";
//! let ciphertext = encrypt_bytes(b"Hello, World!", key)?;
//! assert_eq!(ciphertext.len(), 16);
//!
//! let plaintext = decrypt_bytes(&ciphertext, key)?;
//! assert_eq!(plaintext, b"Hello, World!");
//! # Ok::<(), des_ecb::DesError>(())
//! ```
//!
//! ## Security
//!
//! The bundled [`XorCipher`] is a toy transform and ECB leaks repeated
//! blocks. Neither is suitable for protecting real data. A real cipher can be
//! plugged in by implementing [`BlockCipher`] and driving it through
//! [`CipherModes`].
//!
//! ## Features
//!
//! - `parallel`: transform the blocks of a message on the rayon thread pool.
//!   Output is identical to the sequential path.

// Public modules
pub mod cipher;
pub mod error;
pub mod modes;
pub mod padding;
pub mod utils;

// Re-exports for easy access
pub use cipher::{BlockCipher, XorCipher};
pub use error::{DesError, Result};
pub use modes::CipherModes;
pub use padding::{pad, unpad, unpad_with, PaddingCheck};

/// Block and key size in bytes
pub const BLOCK_SIZE: usize = 8;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encrypt exactly one 8-byte block with an 8-byte key. No padding is applied.
///
/// # Example
///
/// ```rust
/// use des_ecb::encrypt_block;
///
/// let ciphertext = encrypt_block(&[0u8; 8], &[0xff; 8])?;
/// assert_eq!(ciphertext, [0xff; 8]);
/// # Ok::<(), des_ecb::DesError>(())
/// ```
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
    let (block, key) = check_block_and_key(plaintext, key)?;
    Ok(utils::block_to_bytes(XorCipher.encrypt(key, block)))
}

/// Decrypt exactly one 8-byte block with an 8-byte key.
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
    let (block, key) = check_block_and_key(ciphertext, key)?;
    Ok(utils::block_to_bytes(XorCipher.decrypt(key, block)))
}

/// Encrypt data of any length (including empty) in ECB mode.
pub fn encrypt_bytes(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = check_key(key)?;
    CipherModes::ecb_encrypt(&XorCipher, key, data)
}

/// Decrypt ECB ciphertext whose length is a positive multiple of 8 and
/// strip its padding.
pub fn decrypt_bytes(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = check_key(key)?;
    CipherModes::ecb_decrypt(&XorCipher, key, data)
}

fn check_key(key: &[u8]) -> Result<u64> {
    if key.len() != BLOCK_SIZE {
        return Err(DesError::InvalidKeyLength {
            expected: BLOCK_SIZE,
            actual: key.len(),
        });
    }
    Ok(utils::block_from_bytes(key))
}

fn check_block_and_key(block: &[u8], key: &[u8]) -> Result<(u64, u64)> {
    if block.len() != BLOCK_SIZE {
        return Err(DesError::InvalidBlockLength {
            expected: BLOCK_SIZE,
            actual: block.len(),
        });
    }
    let key = check_key(key)?;
    Ok((utils::block_from_bytes(block), key))
}

/// Convenience functions for common operations
impl CipherModes {
    /// Get version information
    pub fn version() -> &'static str {
        VERSION
    }

    /// List all supported cipher modes
    pub fn supported_modes() -> Vec<&'static str> {
        vec!["ECB"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8; 8] = b"k3y!k3y!";

    #[test]
    fn test_block_round_trip() {
        let plaintext = b"hello123";

        let encrypted = encrypt_block(plaintext, KEY).unwrap();
        assert_ne!(&encrypted, plaintext);

        let decrypted = decrypt_block(&encrypted, KEY).unwrap();
        assert_eq!(&decrypted, plaintext);
    }

    #[test]
    fn test_block_vectors() {
        assert_eq!(encrypt_block(&[0x01; 8], &[0x00; 8]).unwrap(), [0x01; 8]);
        assert_eq!(encrypt_block(&[0x00; 8], &[0xff; 8]).unwrap(), [0xff; 8]);
        assert_eq!(decrypt_block(&[0xff; 8], &[0xff; 8]).unwrap(), [0x00; 8]);
    }

    #[test]
    fn test_block_length_validation() {
        assert_eq!(
            encrypt_block(b"1234567", KEY),
            Err(DesError::InvalidBlockLength { expected: 8, actual: 7 })
        );
        assert_eq!(
            decrypt_block(b"123456789", KEY),
            Err(DesError::InvalidBlockLength { expected: 8, actual: 9 })
        );
        assert_eq!(
            encrypt_block(b"12345678", b"short"),
            Err(DesError::InvalidKeyLength { expected: 8, actual: 5 })
        );
    }

    #[test]
    fn test_bytes_key_validation() {
        assert_eq!(
            encrypt_bytes(b"data", b"short"),
            Err(DesError::InvalidKeyLength { expected: 8, actual: 5 })
        );
        assert_eq!(
            decrypt_bytes(&[0u8; 8], b"waytoolongkey"),
            Err(DesError::InvalidKeyLength { expected: 8, actual: 13 })
        );
    }

    #[test]
    fn test_bytes_empty_input() {
        let ciphertext = encrypt_bytes(b"", KEY).unwrap();
        assert_eq!(ciphertext, encrypt_block(&[0x08; 8], KEY).unwrap().to_vec());
        assert!(decrypt_bytes(&ciphertext, KEY).unwrap().is_empty());
    }

    #[test]
    fn test_bytes_ciphertext_length() {
        for len in 0..33 {
            let data = vec![b'x'; len];
            let ciphertext = encrypt_bytes(&data, KEY).unwrap();
            assert_eq!(ciphertext.len(), len + (8 - len % 8));
            assert_eq!(decrypt_bytes(&ciphertext, KEY).unwrap(), data);
        }
    }

    #[test]
    fn test_bytes_misaligned_ciphertext() {
        assert!(matches!(
            decrypt_bytes(&[0u8; 9], KEY),
            Err(DesError::MisalignedCiphertext { len: 9, block_size: 8 })
        ));
    }

    #[test]
    fn test_cipher_modes_metadata() {
        assert_eq!(CipherModes::supported_modes(), vec!["ECB"]);
        assert!(!CipherModes::version().is_empty());
    }
}
