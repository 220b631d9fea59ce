use serde::{Deserialize, Serialize};

/// Well-known sentiment labels. Analyzers may emit others; they are kept as
/// plain strings everywhere so unexpected labels survive the pivot.
pub struct Label;

impl Label {
    pub const POSITIVE: &'static str = "POSITIVE";
    pub const NEGATIVE: &'static str = "NEGATIVE";
    pub const NEUTRAL: &'static str = "NEUTRAL";
}

/// One analyzed clause: the feature bucket it mentions, the sentiment label
/// and the model's confidence in that label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub bucket: String,
    pub label: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clause: Option<String>,
}

impl SentimentRecord {
    pub fn new(bucket: impl Into<String>, label: impl Into<String>, confidence: f64) -> Self {
        Self {
            bucket: bucket.into(),
            label: label.into(),
            confidence,
            review_index: None,
            clause: None,
        }
    }

    pub fn with_source(mut self, review_index: usize, clause: impl Into<String>) -> Self {
        self.review_index = Some(review_index);
        self.clause = Some(clause.into());
        self
    }
}

/// Analyzer output: one row per clause/feature mention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentTable {
    pub records: Vec<SentimentRecord>,
}

impl SentimentTable {
    pub fn new(records: Vec<SentimentRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SentimentRecord> {
        self.records.iter()
    }

    pub fn confidences(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.confidence).collect()
    }
}

impl FromIterator<SentimentRecord> for SentimentTable {
    fn from_iter<I: IntoIterator<Item = SentimentRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SentimentTable {
    type Item = &'a SentimentRecord;
    type IntoIter = std::slice::Iter<'a, SentimentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
