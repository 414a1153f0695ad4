//! Keyed 64-bit block transform

/// A keyed, invertible, length-preserving transform on 64-bit blocks.
///
/// Blocks and keys are passed as big-endian `u64` values. `decrypt` must
/// undo `encrypt` for the same key; the two need not be the same function.
/// The block width is fixed at [`BLOCK_SIZE`](crate::BLOCK_SIZE) bytes.
pub trait BlockCipher {
    /// Encrypts a single block
    fn encrypt(&self, key: u64, block: u64) -> u64;

    /// Decrypts a single block
    fn decrypt(&self, key: u64, block: u64) -> u64;
}

/// XOR of block and key.
///
/// This is the toy primitive the ciphertext format was defined with. It is
/// an involution: `encrypt(k, encrypt(k, x)) == x`, so `decrypt` is the same
/// operation. It offers no security and must **never** protect real data;
/// swapping in a real cipher means implementing [`BlockCipher`] and losing
/// the involution, which changes the compatibility contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XorCipher;

impl XorCipher {
    pub fn new() -> Self {
        Self
    }
}

impl BlockCipher for XorCipher {
    fn encrypt(&self, key: u64, block: u64) -> u64 {
        block ^ key
    }

    fn decrypt(&self, key: u64, block: u64) -> u64 {
        // XOR is self-inverse
        self.encrypt(key, block)
    }
}
