//! GitHub side of the glogin flow.
//!
//! This crate builds the authorization URL and the token-exchange form, and
//! parses the JSON GitHub answers with into a [`glogin_cookie::Profile`].
//!
//! HTTP requests are made by the caller with its own client.

mod auth;
mod error;
mod response;
mod types;

pub use auth::GithubAuth;
pub use error::GithubError;
pub use response::{authorization_header, parse_access_token, parse_user};
pub use types::{AccessToken, FormField};

/// Page the visitor is redirected to for consent.
pub const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";

/// Endpoint exchanging the callback code for an access token (POST, form).
pub const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

/// Authenticated user profile endpoint (GET).
pub const USER_URL: &str = "https://api.github.com/user";
