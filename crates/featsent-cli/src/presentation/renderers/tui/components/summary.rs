use featsent_engine::Polarity;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::Component;
use crate::presentation::formatters::format_rate;
use crate::presentation::renderers::tui::app::AppState;
use crate::presentation::views::analysis::SUMMARY_TITLE;

pub(crate) struct SummaryComponent;

impl Component for SummaryComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let Some(summary) = &state.view.content.summary else {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", SUMMARY_TITLE));
            f.render_widget(Paragraph::new("No summary yet").block(block), area);
            return;
        };

        // Index safety: clamp against the data, not just the state.
        let offset = state
            .summary_offset
            .min(summary.rows.len().saturating_sub(1));

        let title = format!(
            " {} ({}/{}) ",
            SUMMARY_TITLE,
            (offset + 1).min(summary.rows.len()),
            summary.rows.len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);

        let mut header_cells = vec!["bucket".to_string()];
        header_cells.extend(summary.labels.iter().cloned());
        header_cells.extend(
            ["total", "positive_rate", "negative_rate", "sentiment_score"]
                .iter()
                .map(|s| s.to_string()),
        );

        let bucket_width = summary
            .rows
            .iter()
            .map(|r| r.bucket.chars().count())
            .max()
            .unwrap_or(0)
            .max(6) as u16;

        let mut widths = vec![Constraint::Length(bucket_width)];
        widths.extend(
            summary
                .labels
                .iter()
                .map(|l| Constraint::Length(l.chars().count().max(5) as u16)),
        );
        widths.extend([
            Constraint::Length(5),
            Constraint::Length(13),
            Constraint::Length(13),
            Constraint::Length(15),
        ]);

        let header = Row::new(header_cells).style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = summary
            .rows
            .iter()
            .skip(offset)
            .map(|row| {
                let mut cells = vec![Cell::from(row.bucket.clone())];
                cells.extend(summary.labels.iter().map(|l| {
                    Cell::from(row.counts.get(l).copied().unwrap_or(0).to_string())
                }));
                cells.push(Cell::from(row.total.to_string()));
                cells.push(Cell::from(format_rate(row.positive_rate)));
                cells.push(Cell::from(format_rate(row.negative_rate)));

                let score_style = match row.sentiment_score {
                    Some(score) => {
                        let (r, g, b) = Polarity::of(score).rgb();
                        Style::default().fg(Color::Rgb(r, g, b))
                    }
                    None => Style::default().fg(Color::DarkGray),
                };
                cells.push(Cell::from(format_rate(row.sentiment_score)).style(score_style));
                Row::new(cells)
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(2);

        f.render_widget(table, area);
    }
}
