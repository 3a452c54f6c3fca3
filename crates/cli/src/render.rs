//! Terminal rendering of review cards

use steamguessr_core::{LabeledReview, Segment};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Join segments, drawing hidden spans as `mask` repeated to the same width
pub fn render_segments(segments: &[Segment], mask: &str) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.clone(),
            Segment::Masked(_) => mask.repeat(segment.char_len()),
            Segment::Emphasized(text) => format!("{}{}{}", BOLD, text, RESET),
        })
        .collect()
}

pub fn render_card(labeled: &LabeledReview, segments: &[Segment], mask: &str) -> String {
    let review = &labeled.review;
    let verdict = if review.voted_up {
        "👍 Recommended"
    } else {
        "👎 Not Recommended"
    };
    let posted = review
        .created_at()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "== {} ==\n{}  ({} hrs on record)\n\n{}\n\n🧑 {}  👍 {} helpful  😂 {} funny  🕒 {}\n",
        labeled.slot.label(),
        verdict,
        review.playtime_hours(),
        render_segments(segments, mask).trim(),
        review.author.steamid,
        review.votes_up,
        review.votes_funny,
        posted,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use steamguessr_core::{redact_title, HighlightSlot, Review, ReviewAuthor};

    #[test]
    fn masks_keep_title_width() {
        let segments = redact_title("I love Portal so much", "Portal", true).unwrap();
        assert_eq!(render_segments(&segments, "#"), "I love ###### so much");
    }

    #[test]
    fn revealed_title_is_bold() {
        let segments = redact_title("I love Portal", "portal", false).unwrap();
        assert_eq!(render_segments(&segments, "#"), "I love \x1b[1mPortal\x1b[0m");
    }

    #[test]
    fn card_shows_slot_votes_and_date() {
        let labeled = LabeledReview {
            slot: HighlightSlot::MostUpvotedNegative,
            review: Review {
                recommendationid: "7".to_string(),
                author: ReviewAuthor { steamid: "7656".to_string(), playtime_forever: 600 },
                review: "meh".to_string(),
                voted_up: false,
                votes_up: 12,
                votes_funny: 0,
                timestamp_created: 0,
            },
        };
        let card = render_card(&labeled, &[Segment::Plain("meh".to_string())], "#");
        assert!(card.starts_with("== Most Upvoted Negative Review =="));
        assert!(card.contains("Not Recommended"));
        assert!(card.contains("10 hrs on record"));
        assert!(card.contains("🧑 7656"));
        assert!(card.contains("👍 12 helpful"));
        assert!(card.contains("1970-01-01"));
    }
}
