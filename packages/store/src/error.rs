use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Content store is not configured")]
    NotConfigured,

    #[error("Invalid store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Content store unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication is not configured")]
    NotConfigured,

    #[error("Sign-in request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Request(err.to_string())
    }
}
