use thiserror::Error;

/// A turn could not be completed.
///
/// Every variant is presented to the user the same way; the cause only
/// reaches the diagnostic log.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to reach chat endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("chat endpoint returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed chat response: {0}")]
    Decode(String),
}
