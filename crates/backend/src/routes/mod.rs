//! REST API routes

pub mod appdetails;
pub mod guess;
pub mod reviews;
pub mod top;

// Re-export all route handlers
pub use appdetails::*;
pub use guess::*;
pub use reviews::*;
pub use top::*;

use axum::{http::StatusCode, Json};

/// Error tuple returned by every fallible handler
pub type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(serde_json::json!({ "error": message })))
}
