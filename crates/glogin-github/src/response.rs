use glogin_cookie::Profile;
use tracing::debug;

use crate::error::GithubError;
use crate::types::AccessToken;

/// Parse the JSON answer of the token exchange.
///
/// GitHub answers a bad or reused code with `200 OK` and an
/// `{"error": .., "error_description": ..}` body, which becomes
/// `GithubError::Provider`.
pub fn parse_access_token(json: &serde_json::Value) -> Result<AccessToken, GithubError> {
    let obj = json.as_object().ok_or(GithubError::NotAnObject)?;

    if let Some(error) = obj.get("error").and_then(|v| v.as_str()) {
        let description = obj
            .get("error_description")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        return Err(GithubError::Provider {
            error: error.to_string(),
            description,
        });
    }

    let token: AccessToken = serde_json::from_value(json.clone())
        .map_err(|_| GithubError::MissingField {
            field: "access_token",
        })?;
    if token.access_token.is_empty() {
        return Err(GithubError::MissingField {
            field: "access_token",
        });
    }
    debug!(scope = %token.scope, "received GitHub access token");
    Ok(token)
}

/// Parse the JSON answer of `GET https://api.github.com/user` into a profile,
/// optionally merging in the access token as `bearer`.
pub fn parse_user(json: &serde_json::Value, bearer: Option<&str>) -> Result<Profile, GithubError> {
    let obj = json.as_object().ok_or(GithubError::NotAnObject)?;

    if !obj.contains_key("id") {
        if let Some(message) = obj.get("message").and_then(|v| v.as_str()) {
            return Err(GithubError::Provider {
                error: "api".to_string(),
                description: message.to_string(),
            });
        }
        return Err(GithubError::MissingField { field: "id" });
    }

    let mut profile: Profile = serde_json::from_value(json.clone())?;
    if profile.id.is_empty() {
        return Err(GithubError::MissingField { field: "id" });
    }
    if let Some(token) = bearer {
        profile.bearer = Some(token.to_string());
    }
    Ok(profile)
}

/// Value of the `Authorization` header for GitHub API calls.
pub fn authorization_header(access_token: &str) -> String {
    format!("token {}", access_token)
}
