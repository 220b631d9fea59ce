pub mod analysis;
pub mod common;
pub mod config;
pub mod options;
pub mod result;

pub use analysis::{
    AnalysisViewModel, HistogramBinViewModel, HistogramViewModel, ScoreBarViewModel,
    SourceViewModel, StateViewModel, SummaryRowViewModel, SummaryViewModel,
};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigShowViewModel};
pub use options::DisplayOptions;
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: &'a DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
