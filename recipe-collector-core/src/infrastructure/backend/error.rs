use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to {operation}: {status} {reason}")]
    Status {
        operation: String,
        status: u16,
        reason: String,
    },
    #[error("Failed to {operation}: {source}")]
    Network {
        operation: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to {operation}: response body is not valid JSON: {source}")]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    /// `reason` is the canonical phrase for `status`; the phrase on the
    /// response's status line is not available through the HTTP client.
    pub fn status(operation: impl Into<String>, status: StatusCode) -> Self {
        Self::Status {
            operation: operation.into(),
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    pub fn network(operation: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            operation: operation.into(),
            source,
        }
    }

    pub fn decode(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            operation: operation.into(),
            source,
        }
    }

    /// HTTP status of the failed call, when the service answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            BackendError::Network { source, .. } => source.status().map(|s| s.as_u16()),
            BackendError::Decode { .. } => None,
        }
    }
}
