//! SteamGuessr core
//!
//! Pure data transformations shared by the proxy server and the clients:
//! - highlight selection over fetched reviews
//! - title normalization and guess matching
//! - title redaction inside review text
//! - SteamSpy ownership ranking

pub mod constants;
pub mod error;
pub mod highlights;
pub mod messages;
pub mod models;
pub mod ownership;
pub mod redact;
pub mod title;

pub use error::CoreError;
pub use highlights::select_highlights;
pub use messages::*;
pub use models::*;
pub use ownership::{parse_owners_lower_bound, rank_by_owners_descending};
pub use redact::{redact_title, Segment};
pub use title::{normalize_title, titles_match};
