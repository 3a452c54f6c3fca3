//! SteamSpy API integration for the top-owned games listing
//!
//! SteamSpy API: https://steamspy.com/api.php?request=all
//! Returns: { "<appid>": { "appid": 570, "name": "...", "owners": "200,000,000 .. 500,000,000", ... }, ... }

use serde_json::Value;
use steamguessr_core::SteamSpyEntry;

use crate::config::ServerConfig;
use crate::error::UpstreamError;
use crate::steam_api::get_json;

/// Fetch SteamSpy's full listing in the order SteamSpy sent it
pub async fn fetch_all(
    client: &reqwest::Client,
    config: &ServerConfig,
) -> Result<Vec<SteamSpyEntry>, UpstreamError> {
    let url = format!("{}/api.php?request=all", config.steamspy_url);
    let body = get_json(client, &url).await?;
    Ok(parse_all_body(&body))
}

/// Entries of a `request=all` body; values without an appid are skipped
pub fn parse_all_body(body: &Value) -> Vec<SteamSpyEntry> {
    body.as_object()
        .map(|apps| {
            apps.values()
                .filter_map(|app| serde_json::from_value(app.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}
