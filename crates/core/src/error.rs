use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid response from {feed}: {details}")]
    FeedResponse { feed: String, details: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("deserialize error: {0}")]
    Serialization(#[from] serde_json::Error),
}
