//! Review sentiment lexicon for rule-based clause scoring.

use std::collections::HashMap;

/// Word → polarity weights tuned for app-store style product reviews.
pub struct ReviewLexicon {
    words: HashMap<String, f64>,
    negations: Vec<String>,
    intensifiers: HashMap<String, f64>,
}

impl Default for ReviewLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewLexicon {
    pub fn new() -> Self {
        let mut words = HashMap::new();

        let positive_words = [
            ("love", 0.8),
            ("loved", 0.8),
            ("loving", 0.7),
            ("great", 0.7),
            ("good", 0.5),
            ("excellent", 0.8),
            ("amazing", 0.8),
            ("awesome", 0.8),
            ("fantastic", 0.8),
            ("best", 0.7),
            ("nice", 0.4),
            ("helpful", 0.6),
            ("useful", 0.5),
            ("easy", 0.5),
            ("simple", 0.4),
            ("intuitive", 0.6),
            ("clear", 0.4),
            ("worth", 0.6),
            ("affordable", 0.6),
            ("reasonable", 0.5),
            ("fair", 0.4),
            ("recommend", 0.7),
            ("happy", 0.6),
            ("enjoy", 0.6),
            ("enjoyed", 0.6),
            ("supportive", 0.7),
            ("responsive", 0.6),
            ("friendly", 0.5),
            ("motivating", 0.6),
            ("motivated", 0.5),
            ("effective", 0.6),
            ("works", 0.4),
            ("fast", 0.4),
            ("quick", 0.4),
            ("accurate", 0.5),
            ("informative", 0.5),
            ("interesting", 0.4),
            ("life-changing", 0.9),
        ];

        let negative_words = [
            ("hate", -0.8),
            ("hated", -0.8),
            ("terrible", -0.9),
            ("awful", -0.9),
            ("horrible", -0.9),
            ("bad", -0.6),
            ("poor", -0.6),
            ("worst", -0.9),
            ("worse", -0.6),
            ("expensive", -0.6),
            ("overpriced", -0.8),
            ("pricey", -0.5),
            ("scam", -0.9),
            ("ripoff", -0.9),
            ("waste", -0.7),
            ("useless", -0.8),
            ("confusing", -0.6),
            ("difficult", -0.5),
            ("hard", -0.4),
            ("slow", -0.5),
            ("buggy", -0.7),
            ("crash", -0.7),
            ("crashes", -0.7),
            ("crashed", -0.7),
            ("broken", -0.7),
            ("glitch", -0.6),
            ("glitchy", -0.6),
            ("annoying", -0.6),
            ("frustrating", -0.7),
            ("disappointed", -0.7),
            ("disappointing", -0.7),
            ("rude", -0.7),
            ("unhelpful", -0.7),
            ("unresponsive", -0.7),
            ("impossible", -0.7),
            ("charged", -0.4),
            ("misleading", -0.7),
            ("inaccurate", -0.6),
            ("generic", -0.4),
            ("boring", -0.5),
            ("repetitive", -0.4),
            ("pushy", -0.5),
            ("hidden", -0.4),
        ];

        for (word, score) in positive_words.into_iter().chain(negative_words) {
            words.insert(word.to_string(), score);
        }

        let negations = [
            "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot", "cant",
            "can't", "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont",
            "wouldn't", "wouldnt", "isn't", "isnt", "aren't", "arent", "wasn't", "wasnt",
            "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let intensifiers = [
            ("very", 1.5),
            ("really", 1.4),
            ("so", 1.3),
            ("extremely", 2.0),
            ("super", 1.5),
            ("incredibly", 1.8),
            ("totally", 1.5),
            ("absolutely", 1.8),
            ("slightly", 0.5),
            ("somewhat", 0.7),
            ("kinda", 0.7),
            ("pretty", 1.2),
        ]
        .into_iter()
        .map(|(w, m)| (w.to_string(), m))
        .collect();

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| n == word)
    }

    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// Score lowercase tokens.
    ///
    /// 1. Look up word weights
    /// 2. Negation flips the next sentiment word
    /// 3. Intensifiers scale the next sentiment word
    ///
    /// Modifiers reset when a non-sentiment word intervenes, except that a
    /// negation survives one intensifier ("not very good").
    pub fn score(&self, tokens: &[String]) -> LexiconScore {
        let mut scores = Vec::new();
        let mut negate_next = false;
        let mut intensifier = 1.0;

        for token in tokens {
            if self.is_negation(token) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.get_intensifier(token) {
                intensifier = mult;
                continue;
            }

            if let Some(mut score) = self.get_score(token) {
                if negate_next {
                    score = -score;
                    negate_next = false;
                }
                score *= intensifier;
                intensifier = 1.0;
                scores.push(score);
            } else {
                negate_next = false;
                intensifier = 1.0;
            }
        }

        let score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        LexiconScore {
            score: score.clamp(-1.0, 1.0),
            matched: scores.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconScore {
    /// Mean weight of matched words, in [-1, 1]
    pub score: f64,
    /// Number of sentiment words found
    pub matched: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::tokenize;

    fn score(text: &str) -> LexiconScore {
        ReviewLexicon::new().score(&tokenize(text))
    }

    #[test]
    fn test_positive_and_negative_words() {
        let lexicon = ReviewLexicon::new();
        assert!(lexicon.get_score("love").unwrap() > 0.0);
        assert!(lexicon.get_score("overpriced").unwrap() < 0.0);
        assert!(lexicon.get_score("subscription").is_none());
    }

    #[test]
    fn test_negation_handling() {
        assert!(score("the coaching is helpful").score > 0.0);
        assert!(score("the coaching is not helpful").score < 0.0);
        assert!(score("not very good").score < 0.0);
    }

    #[test]
    fn test_intensifier_handling() {
        let normal = score("the app is good");
        let intensified = score("the app is extremely good");
        assert!(intensified.score > normal.score);
    }

    #[test]
    fn test_no_sentiment_words() {
        let result = score("i use it every morning");
        assert_eq!(result.matched, 0);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_score_is_clamped() {
        let result = score("absolutely terrible");
        assert_eq!(result.score, -1.0);
    }
}
