//! Server configuration from environment variables (a `.env` file is honored)

use std::str::FromStr;
use std::time::Duration;

use steamguessr_core::constants::{
    DEFAULT_REVIEW_DAY_RANGE, DEFAULT_REVIEW_LANGUAGE, DEFAULT_SERVER_PORT, MAX_REVIEWS_PER_PAGE,
    STEAMSPY_URL, STEAM_STORE_URL, TOP_APPIDS_LIMIT,
};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Base URL of the Steam store, without trailing slash
    pub steam_store_url: String,
    /// Base URL of SteamSpy, without trailing slash
    pub steamspy_url: String,
    pub review_language: String,
    pub review_day_range: u32,
    pub reviews_per_page: u32,
    pub top_appids_limit: usize,
    pub upstream_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", DEFAULT_SERVER_PORT),
            steam_store_url: STEAM_STORE_URL.to_string(),
            steamspy_url: STEAMSPY_URL.to_string(),
            review_language: DEFAULT_REVIEW_LANGUAGE.to_string(),
            review_day_range: DEFAULT_REVIEW_DAY_RANGE,
            reviews_per_page: MAX_REVIEWS_PER_PAGE,
            top_appids_limit: TOP_APPIDS_LIMIT,
            upstream_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source; unset or unparsable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            steam_store_url: lookup("STEAM_STORE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.steam_store_url),
            steamspy_url: lookup("STEAMSPY_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.steamspy_url),
            review_language: lookup("REVIEW_LANGUAGE").unwrap_or(defaults.review_language),
            review_day_range: parse_or(&lookup, "REVIEW_DAY_RANGE", defaults.review_day_range),
            reviews_per_page: parse_or(&lookup, "REVIEWS_PER_PAGE", defaults.reviews_per_page)
                .clamp(1, MAX_REVIEWS_PER_PAGE),
            top_appids_limit: parse_or(&lookup, "TOP_APPIDS_LIMIT", defaults.top_appids_limit),
            upstream_timeout: parsed("UPSTREAM_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.upstream_timeout),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config.bind_address, "0.0.0.0:3001");
        assert_eq!(config.steam_store_url, "https://store.steampowered.com");
        assert_eq!(config.top_appids_limit, 500);
        assert_eq!(config.review_day_range, 30);
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("STEAMSPY_URL", "http://localhost:4000/"),
            ("REVIEW_DAY_RANGE", "90"),
            ("TOP_APPIDS_LIMIT", "50"),
            ("UPSTREAM_TIMEOUT_SECS", "5"),
        ]);
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.steamspy_url, "http://localhost:4000");
        assert_eq!(config.review_day_range, 90);
        assert_eq!(config.top_appids_limit, 50);
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_numbers_fall_back_and_page_size_is_clamped() {
        let config = config_from(&[("REVIEW_DAY_RANGE", "soon"), ("REVIEWS_PER_PAGE", "1000")]);
        assert_eq!(config.review_day_range, 30);
        assert_eq!(config.reviews_per_page, 100);
    }
}
