use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::AppState;
use super::components::{
    Component, DashboardComponent, FooterComponent, HistogramComponent, ScoresComponent,
    SummaryComponent,
};
use crate::presentation::view_models::StateViewModel;

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    DashboardComponent.render(f, main_chunks[0], state);

    if state.view.content.state == StateViewModel::ResultsReady {
        draw_results(f, main_chunks[1], state);
    } else {
        draw_placeholder(f, main_chunks[1], state);
    }

    FooterComponent.render(f, main_chunks[2], state);
}

fn draw_results(f: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    HistogramComponent.render(f, charts[0], state);
    ScoresComponent.render(f, charts[1], state);
    SummaryComponent.render(f, rows[1], state);
}

fn draw_placeholder(f: &mut Frame, area: Rect, state: &AppState) {
    let text = if state.running {
        "Waiting for the analyzer..."
    } else {
        match state.view.content.state {
            StateViewModel::NoData => {
                "No reviews loaded. Press d to load the default processed CSV, or start with --file <CSV>."
            }
            StateViewModel::DataLoaded => "Reviews loaded. Press r to run the sentiment analysis.",
            StateViewModel::NoResults => "Nothing to plot for this dataset.",
            StateViewModel::ResultsReady => "",
        }
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(widget, vertical[1]);
}
