//! Input normalisation and output formatting shared by the command line and
//! any windowed front end.
//!
//! Keys and ciphertexts travel as hex strings, plaintext as UTF-8 text.

use des_ecb::{decrypt_bytes, encrypt_bytes, DesError, BLOCK_SIZE};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("Enter both key and {0}!")]
    MissingInput(&'static str),

    #[error("Key must be {expected} bytes ({} hex characters), got {actual} bytes", .expected * 2)]
    KeyLength { expected: usize, actual: usize },

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Cipher(#[from] DesError),
}

pub type Result<T> = std::result::Result<T, FrontendError>;

/// Decode a key given as 16 hex characters. Surrounding whitespace is ignored.
pub fn parse_key_hex(key_hex: &str) -> Result<[u8; BLOCK_SIZE]> {
    let bytes = hex::decode(key_hex.trim())?;
    bytes.as_slice().try_into().map_err(|_| FrontendError::KeyLength {
        expected: BLOCK_SIZE,
        actual: bytes.len(),
    })
}

/// Drop every whitespace character, so wrapped or grouped hex dumps decode.
pub fn normalize_hex(input: &str) -> String {
    input.split_whitespace().collect()
}

/// Decode hex ciphertext after stripping whitespace.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(normalize_hex(input))?)
}

/// Plaintext for display; invalid UTF-8 is replaced rather than reported.
pub fn display_text(plaintext: &[u8]) -> String {
    String::from_utf8_lossy(plaintext).into_owned()
}

/// Encrypt a line of text and return lowercase hex ciphertext.
///
/// Line breaks are removed from the text before encryption.
pub fn encrypt_text(key_hex: &str, text: &str) -> Result<String> {
    let key_hex = key_hex.trim();
    let text: String = text.trim().chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    if key_hex.is_empty() || text.is_empty() {
        return Err(FrontendError::MissingInput("text"));
    }

    let key = parse_key_hex(key_hex)?;
    let ciphertext = encrypt_bytes(text.as_bytes(), &key)?;
    Ok(hex::encode(ciphertext))
}

/// Decrypt hex ciphertext and return the plaintext as (lossy) text.
pub fn decrypt_hex(key_hex: &str, ciphertext_hex: &str) -> Result<String> {
    let key_hex = key_hex.trim();
    let ciphertext_hex = normalize_hex(ciphertext_hex);
    if key_hex.is_empty() || ciphertext_hex.is_empty() {
        return Err(FrontendError::MissingInput("ciphertext"));
    }

    let key = parse_key_hex(key_hex)?;
    let plaintext = decrypt_bytes(&hex::decode(ciphertext_hex)?, &key)?;
    Ok(display_text(&plaintext))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "133457799bbcdff1";

    #[test]
    fn test_parse_key_hex() {
        let key = parse_key_hex("  0123456789ABCDEF\n").unwrap();
        assert_eq!(key, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
    }

    #[test]
    fn test_parse_key_hex_wrong_length() {
        let err = parse_key_hex("0011").unwrap_err();
        assert!(matches!(err, FrontendError::KeyLength { expected: 8, actual: 2 }));
        assert_eq!(err.to_string(), "Key must be 8 bytes (16 hex characters), got 2 bytes");
        assert!(matches!(parse_key_hex("zz").unwrap_err(), FrontendError::Hex(_)));
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex(" de ad\nbe\tef \r\n"), "deadbeef");
        assert_eq!(decode_hex("de ad").unwrap(), vec![0xde, 0xad]);
    }

    #[test]
    fn test_text_round_trip() {
        let ciphertext = encrypt_text(KEY_HEX, "Grüße, world").unwrap();
        assert_eq!(ciphertext.len() % 16, 0);
        assert_eq!(decrypt_hex(KEY_HEX, &ciphertext).unwrap(), "Grüße, world");
    }

    #[test]
    fn test_encrypt_text_strips_line_breaks() {
        let joined = encrypt_text(KEY_HEX, "line one\r\nline two\n").unwrap();
        assert_eq!(joined, encrypt_text(KEY_HEX, "line oneline two").unwrap());
    }

    #[test]
    fn test_decrypt_hex_ignores_whitespace() {
        let ciphertext = encrypt_text(KEY_HEX, "spaced out").unwrap();
        let (a, b) = ciphertext.split_at(8);
        let spaced = format!("{a}\n  {b} ");
        assert_eq!(decrypt_hex(KEY_HEX, &spaced).unwrap(), "spaced out");
    }

    #[test]
    fn test_missing_input() {
        assert!(matches!(
            encrypt_text("", "text").unwrap_err(),
            FrontendError::MissingInput("text")
        ));
        assert!(matches!(
            decrypt_hex(KEY_HEX, " \n ").unwrap_err(),
            FrontendError::MissingInput("ciphertext")
        ));
    }

    #[test]
    fn test_cipher_errors_pass_through() {
        let err = decrypt_hex(KEY_HEX, "00112233").unwrap_err();
        assert!(matches!(
            err,
            FrontendError::Cipher(DesError::MisalignedCiphertext { len: 4, .. })
        ));
    }

    #[test]
    fn test_display_text_is_lossy() {
        assert_eq!(display_text(b"ok\xffok"), "ok\u{fffd}ok");
    }
}
