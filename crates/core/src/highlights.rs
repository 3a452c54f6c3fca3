//! Highlight selection: funniest, most upvoted positive, most upvoted negative

use crate::models::{Highlights, Review};

/// First review with the highest `key`; later reviews must be strictly greater to win.
fn first_max_by<'a, I, F>(reviews: I, key: F) -> Option<&'a Review>
where
    I: IntoIterator<Item = &'a Review>,
    F: Fn(&Review) -> u64,
{
    reviews
        .into_iter()
        .reduce(|best, candidate| if key(candidate) > key(best) { candidate } else { best })
}

fn is_taken(review: &Review, taken: &[Option<&Review>]) -> bool {
    taken
        .iter()
        .flatten()
        .any(|t| t.recommendationid == review.recommendationid)
}

/// Pick up to three representative reviews.
///
/// Slots are filled in order (funniest, positive, negative) and a review
/// already placed in an earlier slot is never eligible for a later one.
pub fn select_highlights(reviews: &[Review]) -> Highlights {
    let funniest = first_max_by(reviews, |r| r.votes_funny);

    let positive = first_max_by(
        reviews
            .iter()
            .filter(|r| r.voted_up && !is_taken(r, &[funniest])),
        |r| r.votes_up,
    );

    let negative = first_max_by(
        reviews
            .iter()
            .filter(|r| !r.voted_up && !is_taken(r, &[funniest, positive])),
        |r| r.votes_up,
    );

    Highlights {
        funniest: funniest.cloned(),
        most_upvoted_positive: positive.cloned(),
        most_upvoted_negative: negative.cloned(),
    }
}
