use std::fmt;

use zeroize::Zeroizing;

use crate::error::CodecError;

/// The single static secret a codec encrypts with.
///
/// `Disabled` turns the codec into an identity transform so application tests
/// can hand around readable cookies. It has to be chosen explicitly.
#[derive(Clone)]
pub enum Secret {
    Disabled,
    Key(Zeroizing<String>),
}

impl Secret {
    /// A real secret. Empty strings are refused.
    pub fn new(secret: impl Into<String>) -> Result<Self, CodecError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(CodecError::EmptySecret);
        }
        Ok(Secret::Key(Zeroizing::new(secret)))
    }

    /// Test mode.
    pub fn disabled() -> Self {
        Secret::Disabled
    }

    /// Accept the historical convention where an empty string means test mode.
    pub fn from_legacy(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if secret.is_empty() {
            Secret::Disabled
        } else {
            Secret::Key(Zeroizing::new(secret))
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Secret::Disabled)
    }

    pub(crate) fn expose(&self) -> Option<&[u8]> {
        match self {
            Secret::Disabled => None,
            Secret::Key(key) => Some(key.as_bytes()),
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secret::Disabled => f.write_str("Secret::Disabled"),
            Secret::Key(_) => f.write_str("Secret::Key(<redacted>)"),
        }
    }
}
