use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod dashboard;
pub(crate) mod footer;
pub(crate) mod histogram;
pub(crate) mod scores;
pub(crate) mod summary;

pub(crate) use dashboard::DashboardComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use histogram::HistogramComponent;
pub(crate) use scores::ScoresComponent;
pub(crate) use summary::SummaryComponent;
