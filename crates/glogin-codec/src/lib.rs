//! Token codec for glogin session cookies.
//!
//! Turns a short UTF-8 record into an opaque, cookie-safe string and back:
//! - random salt per token
//! - AES-256-CBC (historical format) or AES-256-GCM
//! - Base58 or Base64 text encoding
//! - explicit disabled mode for application tests

pub mod alphabet;
pub mod cipher;
pub mod codec;
pub mod error;
pub mod key;
pub mod salt;
pub mod secret;
pub mod types;

pub use codec::{Codec, CodecOptions};
pub use error::{CodecError, DecodingError};
pub use key::DerivedKey;
pub use salt::generate_salt;
pub use secret::Secret;
pub use types::{Alphabet, Scheme, AES_KEY_LENGTH, SALT_MAX_LENGTH, SALT_MIN_LENGTH};
