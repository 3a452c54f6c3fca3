//! Top-owned games route handlers

use axum::{extract::State, Json};
use std::sync::Arc;
use steamguessr_core::{rank_by_owners_descending, TopAppIdsResponse};
use crate::AppState;
use super::{api_error, ApiError};

/// App ids of the most owned games according to SteamSpy
/// GET /api/top500appids
pub async fn get_top_appids(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TopAppIdsResponse>, ApiError> {
    let entries = crate::steamspy::fetch_all(&state.http, &state.config)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch SteamSpy listing: {}", e);
            api_error(e.status_code(), "Failed to fetch top 500 appIDs")
        })?;

    let appids = rank_by_owners_descending(&entries, state.config.top_appids_limit);
    tracing::debug!(listed = entries.len(), returned = appids.len(), "Ranked SteamSpy listing");

    Ok(Json(TopAppIdsResponse { appids }))
}
