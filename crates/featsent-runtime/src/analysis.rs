use crate::Result;
use featsent_engine::{
    Histogram, ScoreBar, SentimentSummary, confidence_histogram, score_bars, summarize,
};
use featsent_providers::SentimentAnalyzer;
use featsent_types::{ReviewTable, SentimentTable, TEXT_COLUMN};
use tracing::{info, warn};

/// Everything the dashboard renders after a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub analyzer: String,
    pub results: SentimentTable,
    pub summary: SentimentSummary,
    pub histogram: Option<Histogram>,
    pub bars: Vec<ScoreBar>,
}

impl AnalysisReport {
    pub fn build(analyzer: impl Into<String>, results: SentimentTable, bins: usize) -> Self {
        let summary = summarize(&results);
        let histogram = confidence_histogram(&results, bins);
        let bars = score_bars(&summary);
        Self {
            analyzer: analyzer.into(),
            results,
            summary,
            histogram,
            bars,
        }
    }
}

/// Hand the reviews to the analyzer and derive the report.
///
/// Blocks until the analyzer returns. `Ok(None)` means nothing matched.
pub fn run_analysis(
    reviews: &ReviewTable,
    analyzer: &dyn SentimentAnalyzer,
    bins: usize,
) -> Result<Option<AnalysisReport>> {
    info!(analyzer = analyzer.name(), reviews = reviews.len(), "running sentiment analysis");

    let results = match analyzer.analyze(reviews, TEXT_COLUMN)? {
        Some(results) if !results.is_empty() => results,
        _ => {
            warn!(analyzer = analyzer.name(), "analysis produced no results");
            return Ok(None);
        }
    };

    Ok(Some(AnalysisReport::build(analyzer.name(), results, bins)))
}
