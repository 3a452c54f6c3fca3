//! State of one guessing round

use steamguessr_core::{redact_title, titles_match, AppDetails, CoreError, LabeledReview, Segment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect { attempts_left: Option<u32> },
    /// Last allowed attempt was wrong; the game is revealed
    OutOfAttempts,
    /// Round already over, guess ignored
    Finished,
}

pub struct GameRound {
    pub appid: u64,
    pub details: AppDetails,
    pub reviews: Vec<LabeledReview>,
    blurred: bool,
    solved: bool,
    attempts: u32,
    max_attempts: Option<u32>,
}

impl GameRound {
    pub fn new(
        appid: u64,
        details: AppDetails,
        reviews: Vec<LabeledReview>,
        max_attempts: Option<u32>,
    ) -> Self {
        Self {
            appid,
            details,
            reviews,
            blurred: true,
            solved: false,
            attempts: 0,
            max_attempts,
        }
    }

    pub fn is_blurred(&self) -> bool {
        self.blurred
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn submit_guess(&mut self, guess: &str) -> GuessOutcome {
        if !self.blurred {
            return GuessOutcome::Finished;
        }

        self.attempts += 1;
        if titles_match(guess, &self.details.name) {
            self.solved = true;
            self.blurred = false;
            return GuessOutcome::Correct;
        }

        match self.max_attempts {
            Some(max) if self.attempts >= max => {
                self.blurred = false;
                GuessOutcome::OutOfAttempts
            }
            Some(max) => GuessOutcome::Incorrect { attempts_left: Some(max - self.attempts) },
            None => GuessOutcome::Incorrect { attempts_left: None },
        }
    }

    /// Give up and show the title
    pub fn reveal(&mut self) {
        self.blurred = false;
    }

    /// Review bodies split around the title, hidden while the round is blurred
    pub fn redacted_reviews(&self) -> Result<Vec<(&LabeledReview, Vec<Segment>)>, CoreError> {
        self.reviews
            .iter()
            .map(|r| {
                redact_title(&r.review.review, &self.details.name, self.blurred)
                    .map(|segments| (r, segments))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steamguessr_core::{HighlightSlot, Review, ReviewAuthor};

    fn round(max_attempts: Option<u32>) -> GameRound {
        let details = AppDetails {
            steam_appid: 400,
            name: "Portal™".to_string(),
            header_image: "https://example.invalid/400/header.jpg".to_string(),
            app_type: "game".to_string(),
        };
        let review = Review {
            recommendationid: "1".to_string(),
            author: ReviewAuthor::default(),
            review: "Portal is short but portal is sweet".to_string(),
            voted_up: true,
            votes_up: 3,
            votes_funny: 1,
            timestamp_created: 1_700_000_000,
        };
        GameRound::new(
            400,
            details,
            vec![LabeledReview { slot: HighlightSlot::Funniest, review }],
            max_attempts,
        )
    }

    #[test]
    fn correct_guess_unblurs() {
        let mut r = round(None);
        assert_eq!(r.submit_guess("portal"), GuessOutcome::Correct);
        assert!(r.is_solved());
        assert!(!r.is_blurred());
        assert_eq!(r.submit_guess("portal"), GuessOutcome::Finished);
        assert_eq!(r.attempts(), 1);
    }

    #[test]
    fn wrong_guesses_count_down() {
        let mut r = round(Some(2));
        assert_eq!(
            r.submit_guess("portal 2"),
            GuessOutcome::Incorrect { attempts_left: Some(1) }
        );
        assert!(r.is_blurred());
        assert_eq!(r.submit_guess("half-life"), GuessOutcome::OutOfAttempts);
        assert!(!r.is_blurred());
        assert!(!r.is_solved());
    }

    #[test]
    fn unlimited_attempts() {
        let mut r = round(None);
        for _ in 0..10 {
            assert_eq!(r.submit_guess("nope"), GuessOutcome::Incorrect { attempts_left: None });
        }
        assert!(r.is_blurred());
    }

    #[test]
    fn title_in_reviews_follows_blur_flag() {
        let mut r = round(None);
        // Redaction is literal, so a ™ in the title would not match the review text
        r.details.name = "Portal".to_string();
        let redacted = r.redacted_reviews().unwrap();
        assert_eq!(redacted[0].1.iter().filter(|s| s.is_hidden()).count(), 2);

        r.reveal();
        let redacted = r.redacted_reviews().unwrap();
        assert!(!redacted[0].1.iter().any(Segment::is_hidden));
        assert!(redacted[0].1.contains(&Segment::Emphasized("portal".to_string())));
    }
}
