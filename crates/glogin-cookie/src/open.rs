//! Outbound cookie: identity in, cookie text out.

use glogin_codec::Codec;
use tracing::debug;

use crate::error::CookieError;
use crate::record::join_fields;
use crate::types::Profile;

/// A cookie about to be sent to the browser.
///
/// The bearer token of the profile is never written into the cookie.
#[derive(Debug)]
pub struct Open<'a> {
    profile: Profile,
    codec: &'a Codec,
    context: String,
}

impl<'a> Open<'a> {
    /// Wrap a profile. The profile id must not be empty.
    pub fn new(profile: Profile, codec: &'a Codec) -> Result<Self, CookieError> {
        if profile.id.is_empty() {
            return Err(CookieError::EmptyId);
        }
        Ok(Self {
            profile,
            codec,
            context: String::new(),
        })
    }

    /// Bind the cookie to a context, e.g. the client IP. Empty means unbound.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    pub fn login(&self) -> &str {
        self.profile.login.as_deref().unwrap_or_default()
    }

    pub fn avatar_url(&self) -> &str {
        self.profile.avatar_url.as_deref().unwrap_or_default()
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// The text to drop back to the user as a cookie.
    pub fn serialize(&self) -> Result<String, CookieError> {
        let record = join_fields(&[self.id(), self.login(), self.avatar_url(), &self.context]);
        let text = self.codec.encrypt(&record)?;
        debug!(bound = !self.context.is_empty(), "serialized session cookie");
        Ok(text)
    }
}
