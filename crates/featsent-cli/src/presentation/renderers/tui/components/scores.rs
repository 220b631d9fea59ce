use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::formatters::{diverging_bar, format_score};
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::views::analysis::SCORES_TITLE;

pub(crate) struct ScoresComponent;

impl Component for ScoresComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", SCORES_TITLE));

        let scores = &state.view.content.scores;
        if scores.is_empty() {
            f.render_widget(
                Paragraph::new("No bucket has a defined score").block(block),
                area,
            );
            return;
        }

        let label_width = scores
            .iter()
            .map(|s| s.bucket.chars().count())
            .max()
            .unwrap_or(0);
        let inner = area.width.saturating_sub(2) as usize;
        let half = (inner.saturating_sub(label_width + 9) / 2).clamp(3, 40);

        let lines: Vec<Line> = scores
            .iter()
            .map(|score| {
                let bar = diverging_bar(score.score, half);
                let (r, g, b) = score.polarity.rgb();
                let bar_style = Style::default().fg(Color::Rgb(r, g, b));
                Line::from(vec![
                    Span::raw(format!("{:>w$} ", score.bucket, w = label_width)),
                    Span::raw(" ".repeat(bar.left_pad)),
                    Span::styled("█".repeat(bar.left), bar_style),
                    Span::styled("│", Style::default().fg(Color::Gray)),
                    Span::styled("█".repeat(bar.right), bar_style),
                    Span::raw(" ".repeat(bar.right_pad)),
                    Span::raw(format!(" {}", format_score(score.score))),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
