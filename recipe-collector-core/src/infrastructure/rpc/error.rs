use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to read from stdin: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write to stdout: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}
