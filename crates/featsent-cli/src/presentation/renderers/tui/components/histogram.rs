use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::views::analysis::HISTOGRAM_TITLE;

pub(crate) struct HistogramComponent;

impl Component for HistogramComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let Some(histogram) = &state.view.content.histogram else {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", HISTOGRAM_TITLE));
            f.render_widget(
                Paragraph::new("No confidence values to plot").block(block),
                area,
            );
            return;
        };

        let range = match (histogram.bins.first(), histogram.bins.last()) {
            (Some(first), Some(last)) => format!(" [{:.2}, {:.2}]", first.lower, last.upper),
            _ => String::new(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {}{} ", HISTOGRAM_TITLE, range));

        let bins = histogram.bins.len().max(1) as u16;
        let slot = area.width.saturating_sub(2) / bins;
        let gap = if slot >= 3 { 1 } else { 0 };
        let bar_width = slot.saturating_sub(gap).max(1);

        let bars: Vec<Bar> = histogram
            .bins
            .iter()
            .map(|bin| Bar::default().value(bin.count))
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(gap)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

        f.render_widget(chart, area);
    }
}
