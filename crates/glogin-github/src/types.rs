use serde::{Deserialize, Serialize};

/// Response from `POST https://github.com/login/oauth/access_token` with
/// `Accept: application/json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
}

/// One `name=value` pair of the token-exchange form body.
pub type FormField = (&'static str, String);
