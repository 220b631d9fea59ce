use featsent_types::{Label, SentimentTable};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Bucket × label pivot with derived rates, ordered from the most negative
/// feature to the most positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentSummary {
    /// Distinct labels in name order; one count column per entry.
    pub labels: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub bucket: String,
    /// Count for every label column, zero-filled.
    pub counts: BTreeMap<String, u64>,
    /// POSITIVE + NEGATIVE; other labels do not contribute.
    pub total: u64,
    /// `None` when `total` is zero.
    pub positive_rate: Option<f64>,
    pub negative_rate: Option<f64>,
    pub sentiment_score: Option<f64>,
}

impl SummaryRow {
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn has_score(&self) -> bool {
        self.sentiment_score.is_some()
    }
}

impl SentimentSummary {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, bucket: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.bucket == bucket)
    }

    /// Rows whose score is undefined (no POSITIVE or NEGATIVE mentions).
    pub fn unscored(&self) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().filter(|r| !r.has_score())
    }
}

/// Group results by bucket, count labels, pivot wide and score each bucket.
///
/// Rows start in bucket-name order and are then stably sorted ascending by
/// `sentiment_score`, so ties keep bucket-name order. Buckets without a
/// defined score go last.
pub fn summarize(results: &SentimentTable) -> SentimentSummary {
    let mut grouped: BTreeMap<&str, BTreeMap<&str, u64>> = BTreeMap::new();
    let mut labels: BTreeSet<&str> = BTreeSet::new();

    for record in results {
        labels.insert(record.label.as_str());
        *grouped
            .entry(record.bucket.as_str())
            .or_default()
            .entry(record.label.as_str())
            .or_insert(0) += 1;
    }

    let mut rows: Vec<SummaryRow> = grouped
        .into_iter()
        .map(|(bucket, label_counts)| {
            let counts: BTreeMap<String, u64> = labels
                .iter()
                .map(|label| {
                    let n = label_counts.get(label).copied().unwrap_or(0);
                    (label.to_string(), n)
                })
                .collect();
            score_row(bucket.to_string(), counts)
        })
        .collect();

    rows.sort_by(|a, b| compare_scores(a.sentiment_score, b.sentiment_score));

    SentimentSummary {
        labels: labels.into_iter().map(str::to_string).collect(),
        rows,
    }
}

fn score_row(bucket: String, counts: BTreeMap<String, u64>) -> SummaryRow {
    let positive = counts.get(Label::POSITIVE).copied().unwrap_or(0);
    let negative = counts.get(Label::NEGATIVE).copied().unwrap_or(0);
    let total = positive + negative;

    let (positive_rate, negative_rate, sentiment_score) = if total > 0 {
        let pos = positive as f64 / total as f64;
        let neg = negative as f64 / total as f64;
        (Some(pos), Some(neg), Some(pos - neg))
    } else {
        (None, None, None)
    };

    SummaryRow {
        bucket,
        counts,
        total,
        positive_rate,
        negative_rate,
        sentiment_score,
    }
}

fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
