use crate::summary::SentimentSummary;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Zero counts as positive.
    pub fn of(score: f64) -> Self {
        if score >= 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Polarity::Positive => "#4CAF50",
            Polarity::Negative => "#F44336",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Polarity::Positive => (0x4C, 0xAF, 0x50),
            Polarity::Negative => (0xF4, 0x43, 0x36),
        }
    }
}

/// One bar of the horizontal sentiment score chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBar {
    pub bucket: String,
    pub score: f64,
    pub polarity: Polarity,
}

/// Bars in summary order (most negative first). Buckets without a defined
/// score have nothing to plot and are left out.
pub fn score_bars(summary: &SentimentSummary) -> Vec<ScoreBar> {
    summary
        .rows
        .iter()
        .filter_map(|row| {
            row.sentiment_score.map(|score| ScoreBar {
                bucket: row.bucket.clone(),
                score,
                polarity: Polarity::of(score),
            })
        })
        .collect()
}
