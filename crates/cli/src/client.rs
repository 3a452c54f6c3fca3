//! Blocking client for the SteamGuessr proxy server

use steamguessr_core::{AppDetails, LabeledReview, ReviewsResponse, TopAppIdsResponse};

use crate::round::GameRound;

/// Result of fetching everything a round needs
pub enum RoundLoad {
    Ready(GameRound),
    NotFound,
    Failed(String),
}

pub struct ProxyClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Result<Self, String> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn get(&self, path: &str) -> Result<reqwest::blocking::Response, String> {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .get(&url)
            .header("User-Agent", "SteamGuessr-CLI/1.0")
            .send()
            .map_err(|e| format!("Network error: {}", e))
    }

    /// Most owned games, highest first
    pub fn top_appids(&self) -> Result<Vec<u64>, String> {
        let response = self.get("/api/top500appids")?;
        if !response.status().is_success() {
            return Err(format!("Server returned status: {}", response.status()));
        }
        let data: TopAppIdsResponse = response
            .json()
            .map_err(|e| format!("Failed to parse top games: {}", e))?;
        Ok(data.appids)
    }

    /// Title and header image; `Ok(None)` when the store has no such app
    pub fn app_details(&self, appid: u64) -> Result<Option<AppDetails>, String> {
        let response = self.get(&format!("/api/appdetails/{}", appid))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(format!("Server returned status: {}", response.status()));
        }
        response
            .json()
            .map(Some)
            .map_err(|e| format!("Failed to parse app details: {}", e))
    }

    pub fn reviews(&self, appid: u64) -> Result<Vec<LabeledReview>, String> {
        let response = self.get(&format!("/api/reviews/{}", appid))?;
        if !response.status().is_success() {
            return Err(format!("Server returned status: {}", response.status()));
        }
        let data: ReviewsResponse = response
            .json()
            .map_err(|e| format!("Failed to parse reviews: {}", e))?;
        Ok(data.reviews)
    }

    /// Details and reviews for one game; errors are returned, never propagated
    pub fn load_round(&self, appid: u64, max_attempts: Option<u32>) -> RoundLoad {
        let details = match self.app_details(appid) {
            Ok(Some(details)) => details,
            Ok(None) => return RoundLoad::NotFound,
            Err(e) => return RoundLoad::Failed(format!("Error fetching game details: {}", e)),
        };
        match self.reviews(appid) {
            Ok(reviews) => RoundLoad::Ready(GameRound::new(appid, details, reviews, max_attempts)),
            Err(e) => RoundLoad::Failed(format!("Error fetching reviews: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_server_fails_the_round_load() {
        let client = ProxyClient::new("http://127.0.0.1:9").unwrap();
        match client.load_round(620, None) {
            RoundLoad::Failed(message) => assert!(message.starts_with("Error fetching game details")),
            RoundLoad::Ready(_) => panic!("expected a failed load, got a round"),
            RoundLoad::NotFound => panic!("expected a failed load, got not found"),
        }
    }

    #[test]
    #[ignore] // Requires a running proxy server
    fn test_fetch_round_data() {
        let client = ProxyClient::new("http://localhost:3001").unwrap();
        let details = client.app_details(620).unwrap().unwrap();
        assert!(details.name.contains("Portal"));
        assert!(client.reviews(620).unwrap().len() <= 3);
    }
}
