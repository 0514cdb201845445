//! Inbound cookie: cookie text in, identity out.

use glogin_codec::{Codec, DecodingError};
use tracing::warn;

use crate::record::{split_fields, RECORD_FIELDS};
use crate::types::User;

/// A cookie received from the browser.
#[derive(Debug)]
pub struct Closed<'a> {
    text: &'a str,
    codec: &'a Codec,
    context: String,
}

impl<'a> Closed<'a> {
    pub fn new(text: &'a str, codec: &'a Codec) -> Self {
        Self {
            text,
            codec,
            context: String::new(),
        }
    }

    /// Context the cookie must have been minted for.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Decrypt the cookie and return the user it identifies.
    ///
    /// With a disabled codec the text is read as a plain record, missing
    /// trailing fields are allowed and the context is not checked.
    ///
    /// # Errors
    /// Any `DecodingError` from the codec, `ShortRecord` when a decrypted
    /// record has fewer than four fields, `ContextMismatch` when the cookie
    /// was minted for another context, `MissingId` for an empty id. Callers
    /// should ignore the login attempt and must not show the message to the
    /// user.
    pub fn to_user(&self) -> Result<User, DecodingError> {
        let plain = self.codec.decrypt(self.text)?;
        let fields = split_fields(&plain);
        if !self.codec.is_disabled() && fields.len() < RECORD_FIELDS {
            warn!(count = fields.len(), "session cookie record too short");
            return Err(DecodingError::ShortRecord {
                found: fields.len(),
                expected: RECORD_FIELDS,
            });
        }
        let mut fields = fields.into_iter();

        let id = fields.next().unwrap_or_default();
        let login = fields.next();
        let avatar_url = fields.next();
        let found = fields.next().unwrap_or_default();

        if !self.codec.is_disabled() && found != self.context {
            warn!("session cookie context mismatch");
            return Err(DecodingError::ContextMismatch {
                expected: self.context.clone(),
                found,
            });
        }
        if id.is_empty() {
            return Err(DecodingError::MissingId);
        }

        Ok(User {
            id,
            login: login.filter(|s| !s.is_empty()),
            avatar_url: avatar_url.filter(|s| !s.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::open::Open;
    use crate::types::Profile;
    use glogin_codec::Secret;

    #[test]
    fn decrypts_in_test_mode() {
        let codec = Codec::disabled();
        let user = Closed::new("123|test|http://example.com", &codec)
            .to_user()
            .unwrap();
        assert_eq!(user.id, "123");
        assert_eq!(user.login.as_deref(), Some("test"));
        assert_eq!(user.avatar_url.as_deref(), Some("http://example.com"));
    }

    #[test]
    fn test_mode_ignores_context() {
        let codec = Codec::disabled();
        let user = Closed::new("123", &codec)
            .with_context("some context")
            .to_user()
            .unwrap();
        assert_eq!(
            user,
            User {
                id: "123".into(),
                login: None,
                avatar_url: None
            }
        );
    }

    #[test]
    fn ignores_trailing_bearer_slot() {
        let codec = Codec::disabled();
        let user = Closed::new("1|octocat|#||gho_token", &codec)
            .to_user()
            .unwrap();
        assert_eq!(user.login.as_deref(), Some("octocat"));
        assert_eq!(user.avatar_url.as_deref(), Some("#"));
    }

    #[test]
    fn rejects_empty_id() {
        let codec = Codec::disabled();
        let err = Closed::new("|login", &codec).to_user().unwrap_err();
        assert_eq!(err, DecodingError::MissingId);
    }

    #[test]
    fn fails_on_broken_text() {
        let one = Codec::new(Secret::new("secret-1").unwrap()).unwrap();
        let two = Codec::new(Secret::new("secret-2").unwrap()).unwrap();
        let text = Open::new(Profile::new("1").with_login("x").with_avatar_url("x"), &one)
            .unwrap()
            .serialize()
            .unwrap();
        assert!(Closed::new(&text, &two).to_user().is_err());
    }

    #[test]
    fn rejects_short_record_under_real_key() {
        let codec = Codec::new(Secret::new("kfdj7").unwrap()).unwrap();
        let text = codec.encrypt("1").unwrap();
        let err = Closed::new(&text, &codec).to_user().unwrap_err();
        assert_eq!(
            err,
            DecodingError::ShortRecord {
                found: 1,
                expected: 4
            }
        );
        assert!(err.is_tampering());

        let text = codec.encrypt("1|admin|x").unwrap();
        assert!(Closed::new(&text, &codec).to_user().is_err());
    }

    #[test]
    fn wrong_keys_never_yield_a_user() {
        let right = Codec::new(Secret::new("right").unwrap()).unwrap();
        let text = right.encrypt("1").unwrap();
        for i in 0..2000 {
            let wrong = Codec::new(Secret::new(format!("wrong{i}")).unwrap()).unwrap();
            assert!(Closed::new(&text, &wrong).to_user().is_err(), "wrong{i}");
        }
    }

    #[test]
    fn rejects_other_context() {
        let codec = Codec::new(Secret::new("kfdj7").unwrap()).unwrap();
        let text = Open::new(Profile::new("123"), &codec)
            .unwrap()
            .with_context("127.0.0.1")
            .serialize()
            .unwrap();
        let err = Closed::new(&text, &codec)
            .with_context("127.0.0.2")
            .to_user()
            .unwrap_err();
        assert_eq!(
            err,
            DecodingError::ContextMismatch {
                expected: "127.0.0.2".into(),
                found: "127.0.0.1".into()
            }
        );
    }

    #[test]
    fn unbound_cookie_rejected_under_context() {
        let codec = Codec::new(Secret::new("kfdj7").unwrap()).unwrap();
        let text = Open::new(Profile::new("123"), &codec)
            .unwrap()
            .serialize()
            .unwrap();
        assert!(Closed::new(&text, &codec)
            .with_context("127.0.0.1")
            .to_user()
            .is_err());
    }
}
