use crate::analysis::{AnalysisReport, run_analysis};
use crate::loader::{CsvOrigin, CsvSource, LoadOutcome, load_reviews};
use crate::{Error, Result};
use featsent_providers::SentimentAnalyzer;
use featsent_types::ReviewTable;
use std::fmt;
use std::path::PathBuf;

pub const NO_DATA_HINT: &str = "Please upload a CSV or use the default processed CSV.";
pub const ANALYSIS_COMPLETE: &str = "Sentiment analysis complete!";
pub const NO_RESULTS: &str = "No relevant clauses were found with the current keywords.";
pub const ANALYSIS_RUNNING: &str = "Running sentiment analysis... This may take a few minutes...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    NoData,
    DataLoaded,
    ResultsReady,
    NoResults,
}

impl fmt::Display for DashboardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardState::NoData => write!(f, "no data"),
            DashboardState::DataLoaded => write!(f, "data loaded"),
            DashboardState::ResultsReady => write!(f, "results"),
            DashboardState::NoResults => write!(f, "no results"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// The one status message the dashboard shows at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Where the currently loaded reviews came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub origin: CsvOrigin,
    pub path: PathBuf,
}

/// State behind the interactive dashboard.
///
/// Transitions are driven only by user actions:
/// - `load`: NoData/any → DataLoaded (or NoData when the default is missing)
/// - `run_analysis`: DataLoaded/ResultsReady/NoResults → ResultsReady | NoResults
pub struct DashboardSession {
    bins: usize,
    reviews: Option<ReviewTable>,
    source: Option<LoadedSource>,
    report: Option<AnalysisReport>,
    analyzed: bool,
    notice: Notice,
}

impl DashboardSession {
    pub fn new(bins: usize) -> Self {
        Self {
            bins,
            reviews: None,
            source: None,
            report: None,
            analyzed: false,
            notice: Notice::info(NO_DATA_HINT),
        }
    }

    pub fn state(&self) -> DashboardState {
        match (&self.reviews, self.analyzed, &self.report) {
            (None, _, _) => DashboardState::NoData,
            (Some(_), false, _) => DashboardState::DataLoaded,
            (Some(_), true, Some(_)) => DashboardState::ResultsReady,
            (Some(_), true, None) => DashboardState::NoResults,
        }
    }

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn reviews(&self) -> Option<&ReviewTable> {
        self.reviews.as_ref()
    }

    pub fn source(&self) -> Option<&LoadedSource> {
        self.source.as_ref()
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    /// Replace the loaded data. Previous results are discarded either way.
    pub fn load(&mut self, source: &CsvSource) -> Result<&Notice> {
        let outcome = load_reviews(source)?;
        let message = outcome.message();

        self.report = None;
        self.analyzed = false;

        match outcome {
            LoadOutcome::Loaded {
                table,
                origin,
                path,
            } => {
                self.reviews = Some(table);
                self.source = Some(LoadedSource { origin, path });
                self.notice = Notice::info(message);
            }
            LoadOutcome::DefaultMissing { .. } => {
                self.reviews = None;
                self.source = None;
                self.notice = Notice::error(message);
            }
        }

        Ok(&self.notice)
    }

    pub fn run_analysis(&mut self, analyzer: &dyn SentimentAnalyzer) -> Result<&Notice> {
        let reviews = self.reviews.as_ref().ok_or_else(|| {
            Error::InvalidOperation("no reviews loaded; load a CSV first".to_string())
        })?;

        let report = run_analysis(reviews, analyzer, self.bins)?;
        self.analyzed = true;
        self.notice = if report.is_some() {
            Notice::success(ANALYSIS_COMPLETE)
        } else {
            Notice::warning(NO_RESULTS)
        };
        self.report = report;

        Ok(&self.notice)
    }

    /// Surface a failed action without changing the data state.
    pub fn fail(&mut self, err: impl fmt::Display) {
        self.notice = Notice::error(err.to_string());
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = notice;
    }
}
