//! Clause splitting and tokenization for review text.

use regex::Regex;
use std::sync::LazyLock;

static CLAUSE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[.!?;\n\r]+|,?\s*\b(?:but|however|although|though|whereas)\b").unwrap()
});

/// Split review text into lowercase clauses on sentence punctuation and
/// contrastive conjunctions ("the coach is great but the app crashes").
pub fn split_clauses(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    CLAUSE_BOUNDARY
        .split(&lowered)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase word tokens. Apostrophes and inner hyphens stay part of the word.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '-'))
        .map(|t| t.trim_matches(|c| c == '\'' || c == '-'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_punctuation() {
        let clauses = split_clauses("Great app! Too expensive. Coach is nice;");
        assert_eq!(clauses, vec!["great app", "too expensive", "coach is nice"]);
    }

    #[test]
    fn test_split_on_contrast() {
        let clauses = split_clauses("The coaching is great, but the price is too high");
        assert_eq!(clauses, vec!["the coaching is great", "the price is too high"]);
    }

    #[test]
    fn test_conjunction_inside_word_is_kept() {
        let clauses = split_clauses("I thought about the butter");
        assert_eq!(clauses, vec!["i thought about the butter"]);
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Don't buy - it's a life-changing SCAM!!");
        assert_eq!(tokens, vec!["don't", "buy", "it's", "a", "life-changing", "scam"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_clauses("   ").is_empty());
        assert!(tokenize("...").is_empty());
    }
}
