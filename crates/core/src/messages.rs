//! JSON payloads exchanged between the proxy server and its clients

use serde::{Deserialize, Serialize};

use crate::models::LabeledReview;

/// GET /api/reviews/{appid}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewsResponse {
    /// `[funniest, positive, negative]`, empty slots omitted
    pub reviews: Vec<LabeledReview>,
}

/// GET /api/top500appids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopAppIdsResponse {
    pub appids: Vec<u64>,
}

/// GET /api/check-appid/{appid} and GET /api/guess/{appid}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessResponse {
    pub correct: bool,
    /// Revealed title, only present on a correct title guess
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Query string carrying a player's guess
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuessQuery {
    #[serde(default)]
    pub guess: String,
}
