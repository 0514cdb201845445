//! Key derivation from the static secret.

use hkdf::Hkdf;
use sha1::{Digest, Sha1};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CodecError;
use crate::types::{Scheme, AES_KEY_LENGTH};

/// Fixed HKDF salt for the GCM scheme.
const GCM_KEY_SALT: &[u8] = b"glogin-codec-salt-v1";

/// HKDF info for the GCM scheme.
const GCM_KEY_INFO: &[u8] = b"glogin:cookie:aes-256-gcm";

/// 256-bit cipher key. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; AES_KEY_LENGTH],
}

impl DerivedKey {
    /// Derive the key a scheme uses for `secret`.
    pub fn derive(secret: &[u8], scheme: Scheme) -> Result<Self, CodecError> {
        match scheme {
            Scheme::Cbc => Ok(Self::sha1_hex(secret)),
            Scheme::Gcm => Self::hkdf(secret),
        }
    }

    /// First 32 characters of the lowercase hex SHA-1 digest, used as raw
    /// key bytes. This is the key existing CBC cookies were minted with.
    pub fn sha1_hex(secret: &[u8]) -> Self {
        let mut hex = hex::encode(Sha1::digest(secret));
        let mut bytes = [0u8; AES_KEY_LENGTH];
        bytes.copy_from_slice(&hex.as_bytes()[..AES_KEY_LENGTH]);
        hex.zeroize();
        Self { bytes }
    }

    /// HKDF-SHA256 over the secret.
    pub fn hkdf(secret: &[u8]) -> Result<Self, CodecError> {
        let hk = Hkdf::<Sha256>::new(Some(GCM_KEY_SALT), secret);
        let mut bytes = [0u8; AES_KEY_LENGTH];
        hk.expand(GCM_KEY_INFO, &mut bytes)
            .map_err(|e| CodecError::KeyDerivation(format!("HKDF expand failed: {}", e)))?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.bytes
    }
}
