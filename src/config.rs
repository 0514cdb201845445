//! Application configuration.

use std::fmt;

use glogin_codec::{Alphabet, Codec, CodecOptions, Scheme, Secret};
use glogin_github::GithubAuth;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Codec error: {0}")]
    Codec(#[from] glogin_codec::CodecError),

    #[error("GitHub error: {0}")]
    Github(#[from] glogin_github::GithubError),
}

/// Everything a host application needs to run the login flow.
///
/// `cookieSecret` is required and must not be empty. Unencrypted test-mode
/// cookies are only produced when `testMode` is set to `true`, in which case
/// the secret is ignored. Unknown keys are rejected.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GloginConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub redirect_uri: String,
    pub cookie_secret: String,
    #[serde(default)]
    pub test_mode: bool,
    #[serde(default)]
    pub alphabet: Alphabet,
    #[serde(default)]
    pub scheme: Scheme,
}

impl GloginConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Codec for session cookies.
    ///
    /// # Errors
    /// `ConfigError::Codec` when `cookieSecret` is empty outside test mode.
    pub fn codec(&self) -> Result<Codec, ConfigError> {
        let secret = if self.test_mode {
            warn!("test mode is on, session cookies are NOT encrypted");
            Secret::disabled()
        } else {
            Secret::new(self.cookie_secret.as_str())?
        };
        let options = CodecOptions {
            alphabet: self.alphabet,
            scheme: self.scheme,
        };
        Ok(Codec::with_options(secret, options)?)
    }

    /// GitHub OAuth application.
    pub fn github(&self) -> Result<GithubAuth, ConfigError> {
        Ok(GithubAuth::new(
            self.client_id.as_str(),
            self.client_secret.as_str(),
            &self.redirect_uri,
        )?)
    }
}

impl fmt::Debug for GloginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GloginConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("cookie_secret", &"<redacted>")
            .field("test_mode", &self.test_mode)
            .field("alphabet", &self.alphabet)
            .field("scheme", &self.scheme)
            .finish()
    }
}
