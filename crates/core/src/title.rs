//! Title normalization and guess matching

/// Decorative marks dropped before comparing titles
const DECORATIVE_MARKS: &[char] = &[
    '™', '®', '©', '℗', '°', '·', '•', '†', '‡', '§', '¶', '…', '‰', '‱', '⁂', '⁑', '⁃', '⁇',
    '⁈', '⁉', '¹', '²', '³', '⁺', '⁻', '⁼', '⁽', '⁾', 'ⁿ', ':',
];

fn is_decorative(c: char) -> bool {
    // U+2070..=U+2079 covers the remaining superscript digits and ⁱ
    DECORATIVE_MARKS.contains(&c) || ('\u{2070}'..='\u{2079}').contains(&c)
}

/// Canonical form of a title for comparison.
///
/// Drops decorative marks, collapses whitespace runs to a single space, trims
/// and lowercases last. Applying it twice gives the same result as once.
pub fn normalize_title(s: &str) -> String {
    let stripped: String = s.chars().filter(|c| !is_decorative(*c)).collect();
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether a guess names the given title.
///
/// A guess that normalizes to nothing never matches, even a title made only
/// of decorative marks.
pub fn titles_match(guess: &str, actual: &str) -> bool {
    let guess = normalize_title(guess);
    !guess.is_empty() && guess == normalize_title(actual)
}
