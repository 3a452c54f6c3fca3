//! Guess checking route handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use steamguessr_core::{titles_match, GuessQuery, GuessResponse};
use crate::AppState;
use crate::error::UpstreamError;
use super::{api_error, ApiError};

/// Compare a guessed app id with the actual one, as strings
/// GET /api/check-appid/{appid}?guess=
pub async fn check_appid(
    Path(appid): Path<String>,
    Query(query): Query<GuessQuery>,
) -> Json<GuessResponse> {
    Json(GuessResponse {
        correct: appid.trim() == query.guess.trim(),
        name: None,
    })
}

/// Compare a guessed title with the game's store title
/// GET /api/guess/{appid}?guess=
pub async fn guess_title(
    State(state): State<Arc<AppState>>,
    Path(appid): Path<u64>,
    Query(query): Query<GuessQuery>,
) -> Result<Json<GuessResponse>, ApiError> {
    let details = crate::steam_api::fetch_app_details(&state.http, &state.config, appid)
        .await
        .map_err(|e| {
            tracing::warn!(appid = %appid, "Guess check failed: {}", e);
            let message = match e {
                UpstreamError::NotFound => "App not found",
                _ => "Failed to check guess",
            };
            api_error(e.status_code(), message)
        })?;

    let correct = titles_match(&query.guess, &details.name);
    tracing::debug!(appid = %appid, correct, "Title guess checked");

    Ok(Json(GuessResponse {
        correct,
        name: correct.then_some(details.name),
    }))
}
