//! Per-token random salt.

use base64ct::{Base64UrlUnpadded, Encoding};

use crate::error::CodecError;
use crate::types::{SALT_MAX_LENGTH, SALT_MIN_LENGTH};

/// Random bytes needed for the longest salt (4 base64 chars per 3 bytes).
const SALT_ENTROPY_BYTES: usize = SALT_MAX_LENGTH / 4 * 3;

/// Generate a salt of random length between `SALT_MIN_LENGTH` and
/// `SALT_MAX_LENGTH` characters, drawn from the base64url alphabet.
///
/// The salt never contains a space, so the first space after it marks the
/// start of the body.
pub fn generate_salt() -> Result<String, CodecError> {
    let mut bytes = [0u8; SALT_ENTROPY_BYTES + 1];
    getrandom::getrandom(&mut bytes).map_err(|e| CodecError::RngFailed(e.to_string()))?;

    let span = SALT_MAX_LENGTH - SALT_MIN_LENGTH + 1;
    let len = SALT_MIN_LENGTH + bytes[0] as usize % span;

    let mut salt = Base64UrlUnpadded::encode_string(&bytes[1..]);
    salt.truncate(len);
    Ok(salt)
}
