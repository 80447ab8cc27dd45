use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("failed to encode request")]
    Encode(#[source] serde_json::Error),

    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),

    #[error("failed to decode response")]
    Decode(#[source] serde_json::Error),
}
