use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned a malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("unknown job: {0}")]
    UnknownJob(String),
}

pub type Result<T> = std::result::Result<T, WatchError>;
