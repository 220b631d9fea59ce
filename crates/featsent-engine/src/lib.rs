// Engine module - pure computations over analyzer output
// This layer sits between the result table (types) and CLI presentation

pub mod chart;
pub mod histogram;
pub mod summary;

pub use chart::{Polarity, ScoreBar, score_bars};
pub use histogram::{Histogram, histogram};
pub use summary::{SentimentSummary, SummaryRow, summarize};

use featsent_types::SentimentTable;

// Façade API - the CLI layer builds everything it renders through these

/// Confidence distribution of every analyzed clause.
pub fn confidence_histogram(results: &SentimentTable, bins: usize) -> Option<Histogram> {
    histogram(&results.confidences(), bins)
}
