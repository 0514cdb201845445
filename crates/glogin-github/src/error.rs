use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("GitHub {0} can't be empty")]
    EmptyArgument(&'static str),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid GitHub response: expected object")]
    NotAnObject,

    #[error("Invalid GitHub response: missing {field}")]
    MissingField { field: &'static str },

    #[error("GitHub error '{error}': {description}")]
    Provider { error: String, description: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
