//! Title redaction inside review text

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A span of review text, classified for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Plain(String),
    /// Title occurrence that must stay hidden
    Masked(String),
    /// Title occurrence shown once the game is revealed
    Emphasized(String),
}

impl Segment {
    /// Original text of the span, whatever its kind
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Masked(s) | Segment::Emphasized(s) => s,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Segment::Masked(_))
    }

    /// Length in characters, for drawing a mask of matching width
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }
}

/// Split `text` around case-insensitive occurrences of `title`.
///
/// The title is matched literally, surrounding whitespace included. Occurrences become `Masked` while
/// `blurred` is set and `Emphasized` otherwise; everything else stays
/// `Plain`. An empty title or a text without occurrences yields a single
/// plain segment.
pub fn redact_title(text: &str, title: &str, blurred: bool) -> Result<Vec<Segment>, CoreError> {
    if title.trim().is_empty() {
        return Ok(vec![Segment::Plain(text.to_string())]);
    }

    let pattern = RegexBuilder::new(&regex::escape(title))
        .case_insensitive(true)
        .build()?;

    let mut segments = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Plain(text[last..m.start()].to_string()));
        }
        let matched = m.as_str().to_string();
        segments.push(if blurred {
            Segment::Masked(matched)
        } else {
            Segment::Emphasized(matched)
        });
        last = m.end();
    }

    if segments.is_empty() {
        return Ok(vec![Segment::Plain(text.to_string())]);
    }
    if last < text.len() {
        segments.push(Segment::Plain(text[last..].to_string()));
    }
    Ok(segments)
}
