//! Review highlight route handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use steamguessr_core::{select_highlights, ReviewsResponse};
use crate::AppState;
use super::{api_error, ApiError};

#[derive(serde::Deserialize)]
pub struct ReviewsQuery {
    /// Overrides the configured review window
    pub day_range: Option<u32>,
}

/// Funniest, most upvoted positive and most upvoted negative review
/// GET /api/reviews/{appid}
pub async fn get_reviews(
    State(state): State<Arc<AppState>>,
    Path(appid): Path<u64>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let day_range = query.day_range.unwrap_or(state.config.review_day_range);

    let reviews = crate::steam_api::fetch_reviews(&state.http, &state.config, appid, day_range)
        .await
        .map_err(|e| {
            tracing::error!(appid = %appid, "Failed to fetch reviews: {}", e);
            api_error(e.status_code(), "Failed to fetch reviews")
        })?;

    let highlights = select_highlights(&reviews).into_labeled();
    tracing::debug!(
        appid = %appid,
        fetched = reviews.len(),
        selected = highlights.len(),
        "Review highlights selected"
    );

    Ok(Json(ReviewsResponse { reviews: highlights }))
}
