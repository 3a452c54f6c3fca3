//! App details route handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use steamguessr_core::AppDetails;
use crate::AppState;
use crate::error::UpstreamError;
use super::{api_error, ApiError};

/// Title, header image and type of a game
/// GET /api/appdetails/{appid}
pub async fn get_app_details(
    State(state): State<Arc<AppState>>,
    Path(appid): Path<u64>,
) -> Result<Json<AppDetails>, ApiError> {
    match crate::steam_api::fetch_app_details(&state.http, &state.config, appid).await {
        Ok(details) => Ok(Json(details)),
        Err(UpstreamError::NotFound) => {
            tracing::info!(appid = %appid, "App not found");
            Err(api_error(StatusCode::NOT_FOUND, "App not found"))
        }
        Err(e) => {
            tracing::error!(appid = %appid, "Failed to fetch app details: {}", e);
            Err(api_error(e.status_code(), "Failed to fetch app details"))
        }
    }
}
