//! Error types for block transform, padding and ECB operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesError {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid block length: expected {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("Ciphertext length {len} is not a positive multiple of {block_size}")]
    MisalignedCiphertext { len: usize, block_size: usize },

    #[error("Padding error")]
    InvalidPadding,

    #[error("Value does not fit in {bytes} bytes")]
    IntegerOverflow { bytes: usize },

    #[error("Invalid block size (must be between 1 and 255)")]
    InvalidBlockSize,
}

pub type Result<T> = std::result::Result<T, DesError>;
