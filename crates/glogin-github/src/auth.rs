use std::fmt;

use url::Url;

use crate::error::GithubError;
use crate::types::FormField;
use crate::{AUTHORIZE_URL, TOKEN_URL};

/// Registered GitHub OAuth application.
///
/// Builds the URLs and form bodies of the login flow. The requests
/// themselves are sent by the caller's HTTP client.
#[derive(Clone)]
pub struct GithubAuth {
    client_id: String,
    client_secret: String,
    redirect_uri: Url,
}

impl GithubAuth {
    /// # Errors
    /// Returns `GithubError` if any argument is empty or the redirect is not
    /// an absolute URL.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: &str,
    ) -> Result<Self, GithubError> {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(GithubError::EmptyArgument("client ID"));
        }
        let client_secret = client_secret.into();
        if client_secret.is_empty() {
            return Err(GithubError::EmptyArgument("client secret"));
        }
        if redirect_uri.is_empty() {
            return Err(GithubError::EmptyArgument("redirect URL"));
        }
        let redirect_uri = Url::parse(redirect_uri)?;
        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn redirect_uri(&self) -> &Url {
        &self.redirect_uri
    }

    /// Where to send the visitor to start the login.
    pub fn login_uri(&self) -> Result<String, GithubError> {
        let url = Url::parse_with_params(
            AUTHORIZE_URL,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
            ],
        )?;
        Ok(url.into())
    }

    /// Form body that exchanges the callback `code` for an access token at
    /// [`TOKEN_URL`].
    pub fn access_token_form(&self, code: &str) -> Result<Vec<FormField>, GithubError> {
        if code.is_empty() {
            return Err(GithubError::EmptyArgument("code"));
        }
        Ok(vec![
            ("code", code.to_string()),
            ("client_id", self.client_id.clone()),
            ("client_secret", self.client_secret.clone()),
        ])
    }

    /// Endpoint the token-exchange form is posted to.
    pub fn token_url(&self) -> &'static str {
        TOKEN_URL
    }
}

impl fmt::Debug for GithubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubAuth")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri.as_str())
            .finish()
    }
}
