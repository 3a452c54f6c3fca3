//! Upstream endpoints and defaults

/// Steam store base URL (reviews and app details)
pub const STEAM_STORE_URL: &str = "https://store.steampowered.com";

/// SteamSpy base URL
pub const STEAMSPY_URL: &str = "https://steamspy.com";

/// Number of app ids returned by the top-owners listing
pub const TOP_APPIDS_LIMIT: usize = 500;

/// Separator between the low and high bound of a SteamSpy owners range
pub const OWNERS_RANGE_SEPARATOR: &str = " .. ";

/// Reviews are only considered from this many days back
pub const DEFAULT_REVIEW_DAY_RANGE: u32 = 30;

pub const DEFAULT_REVIEW_LANGUAGE: &str = "english";

/// Steam caps `num_per_page` at 100
pub const MAX_REVIEWS_PER_PAGE: u32 = 100;

/// Default proxy port, matches what the web front end expects
pub const DEFAULT_SERVER_PORT: u16 = 3001;
