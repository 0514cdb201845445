//! GitHub login for web applications, remembered in a stateless, encrypted
//! cookie.
//!
//! ```text
//! GithubAuth::login_uri  ->  visitor consents on GitHub  ->  callback ?code=
//! access_token_form(code) -> POST TOKEN_URL -> parse_access_token
//! GET USER_URL (authorization_header) -> parse_user -> Profile
//! Open::new(profile, &codec).with_context(ip).serialize() -> Set-Cookie
//! ...
//! Closed::new(cookie, &codec).with_context(ip).to_user() -> User
//! ```

pub mod config;

pub use config::{ConfigError, GloginConfig};
pub use glogin_codec::{Alphabet, Codec, CodecError, CodecOptions, DecodingError, Scheme, Secret};
pub use glogin_cookie::{Closed, CookieError, Open, Profile, User};
pub use glogin_github::{
    authorization_header, parse_access_token, parse_user, AccessToken, GithubAuth, GithubError,
    AUTHORIZE_URL, TOKEN_URL, USER_URL,
};
