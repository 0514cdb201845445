//! Text encodings for raw ciphertext.
//!
//! Base64 is the standard padded alphabet, emitted on one line. Base58 uses
//! the Bitcoin alphabet, which leaves out `0`, `O`, `I` and `l`.

use std::sync::LazyLock;

use base64ct::{Base64, Encoding};
use regex::Regex;

use crate::error::DecodingError;
use crate::types::Alphabet;

static BASE64_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/=]+$").expect("static regex"));

static BASE58_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]+$").expect("static regex"));

impl Alphabet {
    /// Whether every character of `text` belongs to this alphabet.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Alphabet::Base64 => BASE64_TEXT.is_match(text),
            Alphabet::Base58 => BASE58_TEXT.is_match(text),
        }
    }

    /// Encode bytes as a single line of text.
    pub fn encode(&self, data: &[u8]) -> String {
        match self {
            Alphabet::Base64 => Base64::encode_string(data),
            Alphabet::Base58 => bs58::encode(data).into_string(),
        }
    }

    /// Decode text back to bytes, rejecting foreign characters up front.
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, DecodingError> {
        if !self.matches(text) {
            return Err(self.rejects(text));
        }
        match self {
            Alphabet::Base64 => Base64::decode_vec(text).map_err(|_| self.rejects(text)),
            Alphabet::Base58 => bs58::decode(text)
                .into_vec()
                .map_err(|_| self.rejects(text)),
        }
    }

    fn rejects(&self, text: &str) -> DecodingError {
        DecodingError::Alphabet {
            text: text.to_string(),
            alphabet: *self,
        }
    }
}
