use std::fmt;

use serde::{Deserialize, Serialize};

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// AES block length in bytes (128 bits).
pub const AES_BLOCK_LENGTH: usize = 16;

/// AES-GCM nonce length in bytes (96 bits per NIST recommendation).
pub const AES_GCM_NONCE_LENGTH: usize = 12;

/// AES-GCM tag length in bytes (128 bits).
pub const AES_GCM_TAG_LENGTH: usize = 16;

/// Shortest salt prepended to a plaintext, in characters.
pub const SALT_MIN_LENGTH: usize = 8;

/// Longest salt prepended to a plaintext, in characters.
pub const SALT_MAX_LENGTH: usize = 32;

/// Separator between the salt and the body inside the encrypted buffer.
pub const SALT_SEPARATOR: char = ' ';

/// Text encoding applied to raw ciphertext bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// Standard padded Base64: `A-Z a-z 0-9 + / =`.
    Base64,
    /// Bitcoin Base58: no `0`, `O`, `I` or `l`.
    #[default]
    Base58,
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Base64 => f.write_str("Base64"),
            Alphabet::Base58 => f.write_str("Base58"),
        }
    }
}

/// Cipher construction used for tokens.
///
/// `Cbc` is the historical format: AES-256-CBC, zero IV, PKCS#7 padding, key
/// taken from the hex SHA-1 of the secret. `Gcm` is AES-256-GCM with a random
/// nonce prepended to the ciphertext and an HKDF-derived key; it detects any
/// modification of the token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Cbc,
    Gcm,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Cbc => f.write_str("AES-256-CBC"),
            Scheme::Gcm => f.write_str("AES-256-GCM"),
        }
    }
}
