use thiserror::Error;

use crate::types::Alphabet;

/// Failures while configuring a codec or producing a token.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Secret can't be empty, use Secret::Disabled for test mode")]
    EmptySecret,

    #[error("Random number generation failed: {0}")]
    RngFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),
}

/// A token could not be turned back into its plaintext.
///
/// This is the one error a host application is expected to catch when reading
/// a cookie: treat the visitor as unauthenticated. The messages may contain
/// the offending token or context values and are meant for logs only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodingError {
    #[error("Nothing to decrypt")]
    Empty,

    #[error("Text '{text}' is not valid {alphabet}")]
    Alphabet { text: String, alphabet: Alphabet },

    #[error("Cipher rejected the token: {0}")]
    Cipher(String),

    #[error("Decrypted text has no salt")]
    MissingSalt,

    #[error("Decrypted text has no body after the salt")]
    MissingBody,

    #[error("Decrypted text is not UTF-8: {0}")]
    Utf8(String),

    #[error("Cookie has no user id")]
    MissingId,

    #[error("Cookie record has {found} fields, {expected} expected")]
    ShortRecord { found: usize, expected: usize },

    #[error("Context '{expected}' expected, but '{found}' found")]
    ContextMismatch { expected: String, found: String },
}

impl DecodingError {
    /// True when the token was in the right alphabet but did not decrypt to
    /// a record minted under this key and context, as opposed to plain
    /// garbage that never reached the cipher.
    pub fn is_tampering(&self) -> bool {
        matches!(
            self,
            DecodingError::Cipher(_)
                | DecodingError::MissingSalt
                | DecodingError::MissingBody
                | DecodingError::Utf8(_)
                | DecodingError::ShortRecord { .. }
                | DecodingError::ContextMismatch { .. }
        )
    }
}
