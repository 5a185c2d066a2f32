use axum::http::StatusCode;
use std::fmt;

/// Why a call to the upstream catalog API produced no usable result.
#[derive(Debug)]
pub enum UpstreamError {
    Request(reqwest::Error),
    Status(StatusCode),
    Decode(serde_json::Error),
    Rejected(String),
    UnexpectedShape,
}

impl UpstreamError {
    /// Status reported by the upstream, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Request(e) => write!(f, "Upstream request failed: {}", e),
            UpstreamError::Status(status) => write!(f, "Server error: {}", status),
            UpstreamError::Decode(e) => write!(f, "Malformed upstream body: {}", e),
            UpstreamError::Rejected(msg) => write!(f, "{}", msg),
            UpstreamError::UnexpectedShape => write!(f, "Unexpected catalog response shape"),
        }
    }
}

impl std::error::Error for UpstreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpstreamError::Request(e) => Some(e),
            UpstreamError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Request(err)
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Decode(err)
    }
}
