use featsent_providers::SentimentAnalyzer;
use featsent_runtime::{
    ANALYSIS_RUNNING, CsvSource, DashboardSession, NO_DATA_HINT, Notice,
};
use std::path::PathBuf;

use crate::presentation::presenters::present_analysis;
use crate::presentation::view_models::{AnalysisViewModel, CommandResultViewModel};

pub(crate) struct AppState {
    pub session: DashboardSession,
    pub default_csv: PathBuf,
    /// Snapshot of `session` the components draw from.
    pub view: CommandResultViewModel<AnalysisViewModel>,
    pub running: bool,
    pub summary_offset: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(session: DashboardSession, default_csv: PathBuf) -> Self {
        let view = present_analysis(&session);
        Self {
            session,
            default_csv,
            view,
            running: false,
            summary_offset: 0,
            should_quit: false,
        }
    }

    fn refresh(&mut self) {
        self.view = present_analysis(&self.session);
        self.summary_offset = self.summary_offset.min(self.summary_len().saturating_sub(1));
    }

    pub fn summary_len(&self) -> usize {
        self.view
            .content
            .summary
            .as_ref()
            .map(|s| s.rows.len())
            .unwrap_or(0)
    }

    /// Failures end up in the notice line; the data state is kept.
    pub fn load(&mut self, source: &CsvSource) {
        let loaded = self.session.load(source).map(|_| ());
        if let Err(err) = loaded {
            self.session.fail(err);
        }
        self.summary_offset = 0;
        self.refresh();
    }

    pub fn load_default(&mut self) {
        let source = CsvSource::Default(self.default_csv.clone());
        self.load(&source);
    }

    /// Returns false when there is nothing to analyze.
    pub fn begin_analysis(&mut self) -> bool {
        if self.session.reviews().is_none() {
            self.session.set_notice(Notice::warning(NO_DATA_HINT));
            self.refresh();
            return false;
        }

        self.running = true;
        self.session.set_notice(Notice::info(ANALYSIS_RUNNING));
        self.refresh();
        true
    }

    /// Blocks until the analyzer returns.
    pub fn finish_analysis(&mut self, analyzer: &dyn SentimentAnalyzer) {
        let analyzed = self.session.run_analysis(analyzer).map(|_| ());
        if let Err(err) = analyzed {
            self.session.fail(err);
        }
        self.running = false;
        self.summary_offset = 0;
        self.refresh();
    }

    pub fn scroll_down(&mut self) {
        if self.summary_offset + 1 < self.summary_len() {
            self.summary_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.summary_offset = self.summary_offset.saturating_sub(1);
    }
}
