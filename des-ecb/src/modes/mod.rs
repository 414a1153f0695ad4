//! Modes of operation over a [`BlockCipher`](crate::BlockCipher)

pub mod ecb;

/// Main struct for cipher modes
///
/// Every mode function takes `C: BlockCipher + Sync`, with or without the
/// `parallel` feature, so enabling the feature anywhere in a build never
/// breaks a caller whose cipher compiled without it.
pub struct CipherModes;
