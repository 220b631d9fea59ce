use featsent_engine::Polarity;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{CreateView, DisplayOptions};
use crate::presentation::views::AnalysisView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateViewModel {
    NoData,
    DataLoaded,
    ResultsReady,
    NoResults,
}

#[derive(Debug, Serialize)]
pub struct AnalysisViewModel {
    pub state: StateViewModel,
    pub source: Option<SourceViewModel>,
    pub analyzer: Option<String>,
    pub histogram: Option<HistogramViewModel>,
    pub summary: Option<SummaryViewModel>,
    pub scores: Vec<ScoreBarViewModel>,
}

#[derive(Debug, Serialize)]
pub struct SourceViewModel {
    /// "upload" or "default"
    pub origin: String,
    pub path: String,
    pub reviews: usize,
}

#[derive(Debug, Serialize)]
pub struct HistogramViewModel {
    pub bins: Vec<HistogramBinViewModel>,
    pub max_count: u64,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct HistogramBinViewModel {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct SummaryViewModel {
    pub labels: Vec<String>,
    pub rows: Vec<SummaryRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct SummaryRowViewModel {
    pub bucket: String,
    pub counts: BTreeMap<String, u64>,
    pub total: u64,
    pub positive_rate: Option<f64>,
    pub negative_rate: Option<f64>,
    pub sentiment_score: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ScoreBarViewModel {
    pub bucket: String,
    pub score: f64,
    pub polarity: Polarity,
    pub color: String,
}

impl CreateView for AnalysisViewModel {
    fn create_view<'a>(
        &'a self,
        options: &'a DisplayOptions,
    ) -> Box<dyn std::fmt::Display + 'a> {
        Box::new(AnalysisView::new(self, options))
    }
}
