//! Upstream (Steam store / SteamSpy) error types

use axum::http::StatusCode;

#[derive(Debug)]
pub enum UpstreamError {
    Request(reqwest::Error),
    /// Upstream answered with a non-success status
    Status(StatusCode),
    Decode(serde_json::Error),
    /// Upstream has no data for the requested app
    NotFound,
}

impl UpstreamError {
    /// Status to report to our own clients
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Request(e)
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(e: serde_json::Error) -> Self {
        UpstreamError::Decode(e)
    }
}

impl std::fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamError::Request(e) => write!(f, "Request error: {}", e),
            UpstreamError::Status(s) => write!(f, "Upstream returned status: {}", s),
            UpstreamError::Decode(e) => write!(f, "Failed to parse upstream response: {}", e),
            UpstreamError::NotFound => write!(f, "Not found upstream"),
        }
    }
}

impl std::error::Error for UpstreamError {}
