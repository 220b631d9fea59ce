use crate::clause::{split_clauses, tokenize};
use crate::lexicon::ReviewLexicon;
use crate::traits::SentimentAnalyzer;
use crate::{Error, Result};
use featsent_types::{Label, ReviewTable, SentimentRecord, SentimentTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A feature bucket and the keywords that place a clause into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketDefinition {
    pub name: String,
    pub keywords: Vec<String>,
}

impl BucketDefinition {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
        .normalized()
    }

    /// Clauses are matched in lowercase, so keywords must be too.
    fn normalized(mut self) -> Self {
        for keyword in &mut self.keywords {
            *keyword = keyword.trim().to_lowercase();
        }
        self.keywords.retain(|k| !k.is_empty());
        self
    }

    /// Single-word keywords match whole tokens (plural "s" allowed);
    /// multi-word keywords match as substrings of the clause.
    pub fn matches(&self, clause: &str, tokens: &[String]) -> bool {
        self.keywords.iter().any(|keyword| {
            if keyword.contains(' ') {
                clause.contains(keyword.as_str())
            } else {
                tokens.iter().any(|t| {
                    t == keyword || t.strip_suffix('s').is_some_and(|stem| stem == keyword)
                })
            }
        })
    }
}

/// Buckets for diet/coaching app reviews.
pub fn default_buckets() -> Vec<BucketDefinition> {
    vec![
        BucketDefinition::new(
            "price",
            &[
                "price", "cost", "expensive", "cheap", "money", "subscription", "refund",
                "charge", "charged", "billing", "overpriced", "pricey", "fee", "trial",
                "worth the money",
            ],
        ),
        BucketDefinition::new(
            "support",
            &[
                "support", "customer service", "help desk", "response", "email", "cancel",
                "cancellation", "contact",
            ],
        ),
        BucketDefinition::new(
            "coaching",
            &["coach", "coaching", "goal specialist", "group", "mentor", "accountability"],
        ),
        BucketDefinition::new(
            "usability",
            &[
                "app", "interface", "navigate", "navigation", "design", "crash", "crashes",
                "bug", "buggy", "glitch", "update", "login", "sync",
            ],
        ),
        BucketDefinition::new(
            "food_logging",
            &[
                "log", "logging", "food", "calorie", "calories", "track", "tracking",
                "barcode", "scan", "meal", "recipe", "database",
            ],
        ),
        BucketDefinition::new(
            "content",
            &["lesson", "lessons", "article", "articles", "quiz", "reading", "psychology"],
        ),
        BucketDefinition::new(
            "results",
            &["weight", "lost", "pounds", "lbs", "results", "progress", "habits"],
        ),
    ]
}

/// Built-in analyzer: keyword buckets plus lexicon scoring per clause.
///
/// A clause that mentions several buckets produces one record per bucket.
/// Clauses without any sentiment word are not emitted.
pub struct KeywordAnalyzer {
    buckets: Vec<BucketDefinition>,
    lexicon: ReviewLexicon,
    min_confidence: f64,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new(default_buckets())
    }
}

impl KeywordAnalyzer {
    pub fn new(buckets: Vec<BucketDefinition>) -> Self {
        Self {
            buckets: buckets.into_iter().map(BucketDefinition::normalized).collect(),
            lexicon: ReviewLexicon::new(),
            min_confidence: 0.0,
        }
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    fn analyze_text(&self, review_index: usize, text: &str, out: &mut Vec<SentimentRecord>) {
        for clause in split_clauses(text) {
            let tokens = tokenize(&clause);
            let hits: Vec<&BucketDefinition> = self
                .buckets
                .iter()
                .filter(|b| b.matches(&clause, &tokens))
                .collect();
            if hits.is_empty() {
                continue;
            }

            let scored = self.lexicon.score(&tokens);
            if scored.matched == 0 {
                continue;
            }

            let coverage = (scored.matched as f64 / tokens.len() as f64).min(1.0);
            let confidence = (0.5 + 0.3 * coverage + 0.2 * scored.score.abs()).min(0.99);
            if confidence < self.min_confidence {
                continue;
            }

            let label = if scored.score >= 0.0 {
                Label::POSITIVE
            } else {
                Label::NEGATIVE
            };

            for bucket in hits {
                out.push(
                    SentimentRecord::new(&bucket.name, label, confidence)
                        .with_source(review_index, clause.clone()),
                );
            }
        }
    }
}

impl SentimentAnalyzer for KeywordAnalyzer {
    fn name(&self) -> &str {
        "keyword"
    }

    fn analyze(
        &self,
        reviews: &ReviewTable,
        text_column: &str,
    ) -> Result<Option<SentimentTable>> {
        let column = reviews
            .column(text_column)
            .ok_or_else(|| Error::MissingColumn(text_column.to_string()))?;

        let mut records = Vec::new();
        for (idx, text) in column.enumerate() {
            self.analyze_text(idx, text, &mut records);
        }

        info!(
            reviews = reviews.len(),
            records = records.len(),
            buckets = self.buckets.len(),
            "keyword analysis finished"
        );

        if records.is_empty() {
            debug!("no clause matched a bucket keyword with sentiment");
            return Ok(None);
        }

        Ok(Some(SentimentTable::new(records)))
    }
}
