//! Integration tests for the open/closed cookie round trip.

use glogin::{
    Alphabet, Closed, Codec, CodecOptions, DecodingError, Open, Profile, Scheme, Secret, User,
};

// ============================================================================
// Helpers
// ============================================================================

const SECRET: &str = "kfdj7-this&84-- (832=_";

fn codec(alphabet: Alphabet, scheme: Scheme) -> Codec {
    Codec::with_options(Secret::new(SECRET).unwrap(), CodecOptions { alphabet, scheme }).unwrap()
}

fn every_codec() -> Vec<Codec> {
    [
        (Alphabet::Base58, Scheme::Cbc),
        (Alphabet::Base58, Scheme::Gcm),
        (Alphabet::Base64, Scheme::Cbc),
        (Alphabet::Base64, Scheme::Gcm),
    ]
    .into_iter()
    .map(|(a, s)| codec(a, s))
    .collect()
}

fn jeffrey() -> Profile {
    Profile::new("123").with_login("jeffrey").with_avatar_url("#")
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn binds_cookie_to_context() {
    for codec in every_codec() {
        let text = Open::new(jeffrey(), &codec)
            .unwrap()
            .with_context("127.0.0.1")
            .serialize()
            .unwrap();

        let user = Closed::new(&text, &codec)
            .with_context("127.0.0.1")
            .to_user()
            .unwrap();
        assert_eq!(
            user,
            User {
                id: "123".into(),
                login: Some("jeffrey".into()),
                avatar_url: Some("#".into()),
            }
        );

        let err = Closed::new(&text, &codec)
            .with_context("127.0.0.2")
            .to_user()
            .unwrap_err();
        assert!(matches!(err, DecodingError::ContextMismatch { .. }));
        assert!(err.is_tampering());
    }
}

#[test]
fn encrypts_and_decrypts_github_profile() {
    let profile: Profile = serde_json::from_str(
        r#"{"id": 526301, "login": "yegor256",
            "avatar_url": "https://avatars1.githubusercontent.com/u/526301"}"#,
    )
    .unwrap();
    for codec in every_codec() {
        let text = Open::new(profile.clone(), &codec)
            .unwrap()
            .serialize()
            .unwrap();
        let user = Closed::new(&text, &codec).to_user().unwrap();
        assert_eq!(user.id, "526301");
        assert_eq!(user.login.as_deref(), Some("yegor256"));
        assert_eq!(
            user.avatar_url.as_deref(),
            Some("https://avatars1.githubusercontent.com/u/526301")
        );
    }
}

#[test]
fn delimiter_inside_fields_survives() {
    let codec = codec(Alphabet::Base58, Scheme::Cbc);
    let profile = Profile::new("42")
        .with_login("odd|login")
        .with_avatar_url("https://example.com/a.png?x=100%|y");
    let text = Open::new(profile, &codec)
        .unwrap()
        .with_context("ctx|with|pipes")
        .serialize()
        .unwrap();
    let user = Closed::new(&text, &codec)
        .with_context("ctx|with|pipes")
        .to_user()
        .unwrap();
    assert_eq!(user.login.as_deref(), Some("odd|login"));
    assert_eq!(
        user.avatar_url.as_deref(),
        Some("https://example.com/a.png?x=100%|y")
    );
}

#[test]
fn unicode_login_round_trips() {
    let codec = codec(Alphabet::Base64, Scheme::Gcm);
    let text = Open::new(Profile::new("1").with_login("дорогой товарищ"), &codec)
        .unwrap()
        .serialize()
        .unwrap();
    let user = Closed::new(&text, &codec).to_user().unwrap();
    assert_eq!(user.login.as_deref(), Some("дорогой товарищ"));
    assert_eq!(user.avatar_url, None);
}

#[test]
fn bearer_is_never_written() {
    let codec = Codec::disabled();
    let text = Open::new(jeffrey().with_bearer("gho_secret"), &codec)
        .unwrap()
        .serialize()
        .unwrap();
    assert!(!text.contains("gho_secret"));
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn wrong_secret_is_rejected() {
    let right = codec(Alphabet::Base58, Scheme::Gcm);
    let wrong = Codec::with_options(
        Secret::new("another secret").unwrap(),
        CodecOptions {
            alphabet: Alphabet::Base58,
            scheme: Scheme::Gcm,
        },
    )
    .unwrap();
    let text = Open::new(jeffrey(), &right).unwrap().serialize().unwrap();
    let err = Closed::new(&text, &wrong).to_user().unwrap_err();
    assert!(matches!(err, DecodingError::Cipher(_)));
}

#[test]
fn empty_cookie_is_rejected() {
    for codec in every_codec() {
        assert_eq!(
            Closed::new("", &codec).to_user().unwrap_err(),
            DecodingError::Empty
        );
    }
}

#[test]
fn foreign_alphabet_is_rejected() {
    let base58 = codec(Alphabet::Base58, Scheme::Cbc);
    let err = Closed::new("Il0O", &base58).to_user().unwrap_err();
    assert!(matches!(err, DecodingError::Alphabet { .. }));

    let base64 = codec(Alphabet::Base64, Scheme::Cbc);
    let err = Closed::new("not base64!", &base64).to_user().unwrap_err();
    assert!(matches!(err, DecodingError::Alphabet { .. }));
}

#[test]
fn test_mode_cookie_is_not_accepted_by_real_codec() {
    let codec = codec(Alphabet::Base64, Scheme::Cbc);
    assert!(Closed::new("123|test|http://example.com", &codec)
        .to_user()
        .is_err());
}

// ============================================================================
// Test mode
// ============================================================================

#[test]
fn test_mode_reads_plain_cookie() {
    let codec = Codec::disabled();
    let user = Closed::new("123|test|http://example.com", &codec)
        .to_user()
        .unwrap();
    assert_eq!(user.id, "123");
    assert_eq!(user.login.as_deref(), Some("test"));
    assert_eq!(user.avatar_url.as_deref(), Some("http://example.com"));
}

#[test]
fn test_mode_skips_context() {
    let codec = Codec::new(Secret::from_legacy("")).unwrap();
    let user = Closed::new("123", &codec)
        .with_context("some context")
        .to_user()
        .unwrap();
    assert_eq!(user.id, "123");
    assert_eq!(user.login, None);
    assert_eq!(user.avatar_url, None);
}
