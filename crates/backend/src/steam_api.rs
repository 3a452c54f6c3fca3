//! Steam store API proxy: app reviews and app details
//!
//! Reviews: {store}/appreviews/{appid}?json=1&filter=all&...
//! Details: {store}/api/appdetails?appids={appid}
//!          returns { "<appid>": { "success": bool, "data": {...} } }

use serde_json::Value;
use steamguessr_core::{AppDetails, Review};

use crate::config::ServerConfig;
use crate::error::UpstreamError;

/// GET a URL and parse the body as JSON, treating non-2xx as an error
pub(crate) async fn get_json(client: &reqwest::Client, url: &str) -> Result<Value, UpstreamError> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(UpstreamError::Status(response.status()));
    }

    let body_text = response.text().await?;
    Ok(serde_json::from_str(&body_text)?)
}

/// Fetch recent reviews for a game, most helpful first as ranked by Steam
pub async fn fetch_reviews(
    client: &reqwest::Client,
    config: &ServerConfig,
    appid: u64,
    day_range: u32,
) -> Result<Vec<Review>, UpstreamError> {
    let url = format!(
        "{}/appreviews/{}?json=1&filter=all&language={}&day_range={}&num_per_page={}",
        config.steam_store_url,
        appid,
        urlencoding::encode(&config.review_language),
        day_range,
        config.reviews_per_page
    );

    let body = get_json(client, &url).await?;
    Ok(parse_reviews_body(&body))
}

/// Reviews from an appreviews body; malformed entries are skipped
pub fn parse_reviews_body(body: &Value) -> Vec<Review> {
    body["reviews"]
        .as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(|r| serde_json::from_value(r.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

pub async fn fetch_app_details(
    client: &reqwest::Client,
    config: &ServerConfig,
    appid: u64,
) -> Result<AppDetails, UpstreamError> {
    let url = format!("{}/api/appdetails?appids={}", config.steam_store_url, appid);
    let body = get_json(client, &url).await?;
    parse_app_details_body(appid, &body)
}

/// Details from an appdetails body; `success: false` or missing data is `NotFound`
pub fn parse_app_details_body(appid: u64, body: &Value) -> Result<AppDetails, UpstreamError> {
    let app = &body[appid.to_string()];
    let found = app["success"].as_bool().unwrap_or(false);

    match &app["data"] {
        Value::Object(_) if found => Ok(serde_json::from_value(app["data"].clone())?),
        _ => Err(UpstreamError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_reviews_and_skips_malformed() {
        let body = json!({
            "success": 1,
            "reviews": [
                { "recommendationid": "1", "review": "good", "voted_up": true, "votes_up": 4 },
                { "review": "no id" },
                { "recommendationid": "2", "review": "bad", "voted_up": false,
                  "author": { "steamid": "765", "playtime_forever": 120 } }
            ]
        });
        let reviews = parse_reviews_body(&body);
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[1].author.playtime_forever, 120);
    }

    #[test]
    fn missing_reviews_array_is_empty() {
        assert!(parse_reviews_body(&json!({ "success": 2 })).is_empty());
    }

    #[test]
    fn parses_app_details() {
        let body = json!({
            "620": {
                "success": true,
                "data": {
                    "type": "game",
                    "name": "Portal 2",
                    "steam_appid": 620,
                    "header_image": "https://example.invalid/620/header.jpg"
                }
            }
        });
        let details = parse_app_details_body(620, &body).unwrap();
        assert_eq!(details.name, "Portal 2");
        assert_eq!(details.steam_appid, 620);
    }

    #[test]
    fn unsuccessful_app_details_is_not_found() {
        let body = json!({ "1": { "success": false } });
        assert!(matches!(parse_app_details_body(1, &body), Err(UpstreamError::NotFound)));
        // Different appid key
        assert!(matches!(parse_app_details_body(2, &body), Err(UpstreamError::NotFound)));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_app_details() {
        let client = reqwest::Client::new();
        let details = fetch_app_details(&client, &ServerConfig::default(), 620).await.unwrap();
        assert!(details.name.contains("Portal"));
    }
}
