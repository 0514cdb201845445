use thiserror::Error;

/// Failures while building an outbound cookie.
///
/// Reading a cookie back fails with [`glogin_codec::DecodingError`] instead.
#[derive(Debug, Error)]
pub enum CookieError {
    #[error("Profile id can't be empty")]
    EmptyId,

    #[error("Codec error: {0}")]
    Codec(#[from] glogin_codec::CodecError),
}
