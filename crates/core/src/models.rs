//! Data models shared between server and clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review author as reported by the Steam reviews endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    #[serde(default)]
    pub steamid: String,
    /// Lifetime playtime in minutes
    #[serde(default)]
    pub playtime_forever: u64,
}

/// A single Steam user review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub recommendationid: String,
    #[serde(default)]
    pub author: ReviewAuthor,
    #[serde(default)]
    pub review: String,
    /// true = "Recommended"
    #[serde(default)]
    pub voted_up: bool,
    /// Helpful votes
    #[serde(default)]
    pub votes_up: u64,
    #[serde(default)]
    pub votes_funny: u64,
    /// Unix timestamp (seconds)
    #[serde(default)]
    pub timestamp_created: i64,
}

impl Review {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp_created, 0)
    }

    /// Author playtime rounded to whole hours
    pub fn playtime_hours(&self) -> u64 {
        self.author.playtime_forever.saturating_add(30) / 60
    }
}

/// Which highlight a selected review fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightSlot {
    Funniest,
    MostUpvotedPositive,
    MostUpvotedNegative,
}

impl HighlightSlot {
    pub fn label(&self) -> &'static str {
        match self {
            HighlightSlot::Funniest => "Most Funny Review",
            HighlightSlot::MostUpvotedPositive => "Most Upvoted Positive Review",
            HighlightSlot::MostUpvotedNegative => "Most Upvoted Negative Review",
        }
    }
}

/// Up to three representative reviews for one game.
///
/// No review identifier appears in more than one slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    pub funniest: Option<Review>,
    pub most_upvoted_positive: Option<Review>,
    pub most_upvoted_negative: Option<Review>,
}

impl Highlights {
    pub fn is_empty(&self) -> bool {
        self.funniest.is_none()
            && self.most_upvoted_positive.is_none()
            && self.most_upvoted_negative.is_none()
    }

    /// Flatten to `[funniest, positive, negative]`, skipping empty slots
    pub fn into_labeled(self) -> Vec<LabeledReview> {
        [
            (HighlightSlot::Funniest, self.funniest),
            (HighlightSlot::MostUpvotedPositive, self.most_upvoted_positive),
            (HighlightSlot::MostUpvotedNegative, self.most_upvoted_negative),
        ]
        .into_iter()
        .filter_map(|(slot, review)| review.map(|review| LabeledReview { slot, review }))
        .collect()
    }
}

/// A selected review tagged with its highlight slot.
///
/// Serializes as the plain review object plus a `slot` field so clients that
/// only know the Steam review shape keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledReview {
    pub slot: HighlightSlot,
    #[serde(flatten)]
    pub review: Review,
}

/// Subset of the Steam store app details we expose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDetails {
    pub steam_appid: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub header_image: String,
    /// "game", "dlc", ...
    #[serde(rename = "type", default)]
    pub app_type: String,
}

/// One entry of SteamSpy's `request=all` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteamSpyEntry {
    pub appid: u64,
    #[serde(default)]
    pub name: String,
    /// Estimated owners, e.g. "1,000,000 .. 2,000,000"
    #[serde(default)]
    pub owners: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_missing_counts_default_to_zero() {
        let review: Review = serde_json::from_value(serde_json::json!({
            "recommendationid": "42",
            "review": "fun",
            "voted_up": true
        }))
        .unwrap();
        assert_eq!(review.votes_up, 0);
        assert_eq!(review.votes_funny, 0);
        assert_eq!(review.author.playtime_forever, 0);
    }

    #[test]
    fn playtime_rounds_to_nearest_hour() {
        let mut review: Review = serde_json::from_value(serde_json::json!({
            "recommendationid": "1",
            "author": { "steamid": "7656", "playtime_forever": 89 }
        }))
        .unwrap();
        assert_eq!(review.playtime_hours(), 1);
        review.author.playtime_forever = 90;
        assert_eq!(review.playtime_hours(), 2);
        review.author.playtime_forever = u64::MAX;
        assert_eq!(review.playtime_hours(), u64::MAX / 60);
    }

    #[test]
    fn labeled_review_serializes_flat() {
        let labeled = LabeledReview {
            slot: HighlightSlot::MostUpvotedNegative,
            review: serde_json::from_value(serde_json::json!({
                "recommendationid": "9",
                "votes_up": 3
            }))
            .unwrap(),
        };
        let value = serde_json::to_value(&labeled).unwrap();
        assert_eq!(value["slot"], "most_upvoted_negative");
        assert_eq!(value["recommendationid"], "9");
        assert_eq!(value["votes_up"], 3);
    }

    #[test]
    fn app_details_reads_type_field() {
        let details: AppDetails = serde_json::from_value(serde_json::json!({
            "steam_appid": 620,
            "name": "Portal 2",
            "type": "game",
            "header_image": "https://example.invalid/header.jpg",
            "is_free": false
        }))
        .unwrap();
        assert_eq!(details.app_type, "game");
        assert_eq!(details.name, "Portal 2");
    }
}
