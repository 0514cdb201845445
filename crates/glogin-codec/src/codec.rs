//! Reversible text-to-token transform.
//!
//! Token layout:
//! `alphabet(cipher(salt + " " + plaintext))`
//!
//! A fresh salt of 8..=32 characters is prepended on every call, so the same
//! plaintext never produces the same token twice. With a disabled secret both
//! directions are the identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::cipher;
use crate::error::{CodecError, DecodingError};
use crate::key::DerivedKey;
use crate::salt::generate_salt;
use crate::secret::Secret;
use crate::types::{Alphabet, Scheme, SALT_SEPARATOR};

/// Output alphabet and cipher construction of a codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    pub alphabet: Alphabet,
    pub scheme: Scheme,
}

/// Salted AES-256 codec bound to one secret.
///
/// The key is derived once at construction; the codec is immutable afterwards
/// and can be shared between threads.
#[derive(Clone)]
pub struct Codec {
    key: Option<DerivedKey>,
    options: CodecOptions,
}

impl Codec {
    /// Base58 tokens, CBC scheme.
    pub fn new(secret: Secret) -> Result<Self, CodecError> {
        Self::with_options(secret, CodecOptions::default())
    }

    pub fn with_options(secret: Secret, options: CodecOptions) -> Result<Self, CodecError> {
        let key = secret
            .expose()
            .map(|bytes| DerivedKey::derive(bytes, options.scheme))
            .transpose()?;
        Ok(Self { key, options })
    }

    /// Identity codec for tests.
    pub fn disabled() -> Self {
        Self {
            key: None,
            options: CodecOptions::default(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.key.is_none()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.options.alphabet
    }

    pub fn scheme(&self) -> Scheme {
        self.options.scheme
    }

    /// Encrypt `plaintext` into a single-line token.
    ///
    /// Empty plaintext is allowed. Fails only when the OS random source or
    /// the cipher does.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CodecError> {
        let Some(key) = &self.key else {
            debug!("codec disabled, token is the plaintext");
            return Ok(plaintext.to_string());
        };

        let salt = generate_salt()?;
        let mut buffer = Zeroizing::new(String::with_capacity(salt.len() + 1 + plaintext.len()));
        buffer.push_str(&salt);
        buffer.push(SALT_SEPARATOR);
        buffer.push_str(plaintext);

        let ciphertext = cipher::seal(self.options.scheme, key, buffer.as_bytes())?;
        let token = self.options.alphabet.encode(&ciphertext);
        debug!(
            alphabet = %self.options.alphabet,
            scheme = %self.options.scheme,
            len = token.len(),
            "encrypted token"
        );
        Ok(token)
    }

    /// Recover the plaintext from a token produced by [`Codec::encrypt`].
    ///
    /// # Errors
    /// Returns `DecodingError` if the token is empty, not in the configured
    /// alphabet, rejected by the cipher, or does not carry a salt and a body.
    pub fn decrypt(&self, token: &str) -> Result<String, DecodingError> {
        let Some(key) = &self.key else {
            debug!("codec disabled, plaintext is the token");
            return Ok(token.to_string());
        };

        if token.is_empty() {
            return Err(DecodingError::Empty);
        }
        let raw = self.options.alphabet.decode(token)?;
        if raw.is_empty() {
            return Err(DecodingError::Empty);
        }

        let plain = Zeroizing::new(cipher::open(self.options.scheme, key, &raw).map_err(|e| {
            warn!(scheme = %self.options.scheme, len = token.len(), "token rejected by cipher");
            e
        })?);

        let space = plain
            .iter()
            .position(|&b| b == SALT_SEPARATOR as u8)
            .ok_or(DecodingError::MissingBody)?;
        if space == 0 {
            return Err(DecodingError::MissingSalt);
        }

        String::from_utf8(plain[space + 1..].to_vec())
            .map_err(|e| DecodingError::Utf8(e.to_string()))
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("disabled", &self.is_disabled())
            .field("alphabet", &self.options.alphabet)
            .field("scheme", &self.options.scheme)
            .finish()
    }
}
