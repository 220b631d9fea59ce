use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::view_models::{StateViewModel, StatusLevel};

pub(crate) struct DashboardComponent;

impl Component for DashboardComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)])
            .split(area);

        render_title_bar(f, chunks[0], state);
        render_notice_box(f, chunks[1], state);
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let source = state
        .view
        .content
        .source
        .as_ref()
        .map(|s| format!(" → {} ({} reviews)", s.path, s.reviews))
        .unwrap_or_default();

    let title = Line::from(vec![
        Span::styled(
            "━━ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Feature Sentiment Dashboard",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(source, Style::default().fg(Color::White)),
        Span::styled(
            " ━━",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let (state_text, state_color) = if state.running {
        ("⏳ RUNNING", Color::Yellow)
    } else {
        match state.view.content.state {
            StateViewModel::NoData => ("○ NO DATA", Color::DarkGray),
            StateViewModel::DataLoaded => ("● DATA LOADED", Color::LightBlue),
            StateViewModel::ResultsReady => ("● RESULTS", Color::LightGreen),
            StateViewModel::NoResults => ("○ NO RESULTS", Color::Yellow),
        }
    };

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    f.render_widget(Paragraph::new(title), layout[0]);
    f.render_widget(
        Paragraph::new(state_text)
            .style(
                Style::default()
                    .fg(state_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right),
        layout[1],
    );
}

fn render_notice_box(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(badge) = &state.view.badge else {
        f.render_widget(Block::default().borders(Borders::ALL), area);
        return;
    };

    let color = match badge.level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::LightBlue,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let line = Line::from(vec![
        Span::raw(format!("{} ", badge.icon())),
        Span::styled(badge.label.clone(), Style::default().fg(color)),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}
