use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::AppState;

const KEYS: &[(&str, &str)] = &[
    ("d", "default CSV"),
    ("r", "run analysis"),
    ("↑/↓", "scroll summary"),
    ("q", "quit"),
];

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, _state: &AppState) {
        let mut spans = Vec::new();
        for (i, (key, action)) in KEYS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::Gray),
            ));
        }

        let footer_widget = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(footer_widget, area);
    }
}
