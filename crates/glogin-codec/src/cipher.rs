//! Raw block-cipher operations behind the codec.
//!
//! CBC wire format: `AES-256-CBC(key, iv = 0, PKCS#7, plaintext)`
//! GCM wire format: `[12 bytes: nonce][ciphertext + 16 byte tag]`

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::{CodecError, DecodingError};
use crate::key::DerivedKey;
use crate::types::{Scheme, AES_BLOCK_LENGTH, AES_GCM_NONCE_LENGTH, AES_GCM_TAG_LENGTH};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const ZERO_IV: [u8; AES_BLOCK_LENGTH] = [0u8; AES_BLOCK_LENGTH];

/// Encrypt `data` under `key` with the given scheme.
pub fn seal(scheme: Scheme, key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>, CodecError> {
    match scheme {
        Scheme::Cbc => cbc_encrypt(key, data),
        Scheme::Gcm => gcm_encrypt(key, data),
    }
}

/// Decrypt `data` under `key` with the given scheme.
pub fn open(scheme: Scheme, key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>, DecodingError> {
    match scheme {
        Scheme::Cbc => cbc_decrypt(key, data),
        Scheme::Gcm => gcm_decrypt(key, data),
    }
}

fn cbc_encrypt(key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), &ZERO_IV)
        .map_err(|e| CodecError::EncryptionFailed(e.to_string()))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(data))
}

fn cbc_decrypt(key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>, DecodingError> {
    if data.len() % AES_BLOCK_LENGTH != 0 {
        return Err(DecodingError::Cipher(format!(
            "data length {} is not a multiple of the block size {}",
            data.len(),
            AES_BLOCK_LENGTH
        )));
    }
    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), &ZERO_IV)
        .map_err(|e| DecodingError::Cipher(e.to_string()))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map_err(|_| DecodingError::Cipher("bad decrypt".to_string()))
}

fn gcm_encrypt(key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CodecError::EncryptionFailed(e.to_string()))?;
    let mut nonce = [0u8; AES_GCM_NONCE_LENGTH];
    getrandom::getrandom(&mut nonce).map_err(|e| CodecError::RngFailed(e.to_string()))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), data)
        .map_err(|e| CodecError::EncryptionFailed(e.to_string()))?;

    let mut result = Vec::with_capacity(nonce.len() + ciphertext.len());
    result.extend_from_slice(&nonce);
    result.extend_from_slice(&ciphertext);
    Ok(result)
}

fn gcm_decrypt(key: &DerivedKey, data: &[u8]) -> Result<Vec<u8>, DecodingError> {
    if data.len() < AES_GCM_NONCE_LENGTH + AES_GCM_TAG_LENGTH {
        return Err(DecodingError::Cipher("encrypted data too short".to_string()));
    }
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| DecodingError::Cipher(e.to_string()))?;
    let (nonce, ciphertext) = data.split_at(AES_GCM_NONCE_LENGTH);
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| DecodingError::Cipher("authentication tag mismatch".to_string()))
}
