//! Error types for the content model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Unknown section key: {0}")]
    UnknownSection(String),

    #[error("Invalid content for section '{key}': {source}")]
    InvalidContent {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
