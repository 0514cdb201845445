//! Stateless session cookies for GitHub logins.
//!
//! This crate provides:
//! - `Open`: turns a GitHub profile into encrypted cookie text
//! - `Closed`: turns cookie text back into a user, checking its context
//! - the delimited record format both sides agree on
//!
//! Setting and reading the actual `Cookie` header stays with the host
//! application.

mod closed;
mod error;
mod open;
pub mod record;
mod types;

pub use closed::Closed;
pub use error::CookieError;
pub use glogin_codec::DecodingError;
pub use open::Open;
pub use types::{Profile, User};
