use owo_colors::OwoColorize;
use std::fmt;

use featsent_engine::Polarity;

use crate::presentation::formatters::{diverging_bar, format_rate, format_score, scaled_len};
use crate::presentation::view_models::{
    AnalysisViewModel, DisplayOptions, HistogramViewModel, ScoreBarViewModel, StateViewModel,
    SummaryViewModel,
};

pub const HISTOGRAM_TITLE: &str = "Model Confidence Distribution";
pub const SUMMARY_TITLE: &str = "Feature-Level Sentiment Summary";
pub const SCORES_TITLE: &str = "Feature Sentiment Scores";

const BLOCK: &str = "█";
const ZERO_LINE: &str = "│";

// --------------------------------------------------------
// Analysis Report View
// --------------------------------------------------------

pub struct AnalysisView<'a> {
    data: &'a AnalysisViewModel,
    options: &'a DisplayOptions,
}

impl<'a> AnalysisView<'a> {
    pub fn new(data: &'a AnalysisViewModel, options: &'a DisplayOptions) -> Self {
        Self { data, options }
    }

    fn section(&self, f: &mut fmt::Formatter, title: &str) -> fmt::Result {
        writeln!(f)?;
        if self.options.enable_color {
            writeln!(f, "{}", title.bold())?;
        } else {
            writeln!(f, "{}", title)?;
        }
        writeln!(f, "{}", "─".repeat(title.chars().count()))
    }
}

impl<'a> fmt::Display for AnalysisView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(source) = &self.data.source {
            let origin = if source.origin == "default" {
                "default CSV"
            } else {
                "uploaded CSV"
            };
            writeln!(
                f,
                "Source:   {} ({}, {} reviews)",
                source.path, origin, source.reviews
            )?;
        }
        if let Some(analyzer) = &self.data.analyzer {
            writeln!(f, "Analyzer: {}", analyzer)?;
        }

        if self.data.state != StateViewModel::ResultsReady {
            return Ok(());
        }

        self.section(f, HISTOGRAM_TITLE)?;
        match &self.data.histogram {
            Some(histogram) => write_histogram(f, histogram, self.options)?,
            None => writeln!(f, "  (no confidence values to plot)")?,
        }

        if let Some(summary) = &self.data.summary {
            self.section(f, SUMMARY_TITLE)?;
            write_summary(f, summary, self.options)?;
        }

        self.section(f, SCORES_TITLE)?;
        if self.data.scores.is_empty() {
            writeln!(f, "  (no bucket has a defined score)")?;
        } else {
            write_scores(f, &self.data.scores, self.options)?;
        }

        Ok(())
    }
}

fn write_histogram(
    f: &mut fmt::Formatter,
    histogram: &HistogramViewModel,
    options: &DisplayOptions,
) -> fmt::Result {
    let count_width = histogram.max_count.to_string().len();
    let last = histogram.bins.len().saturating_sub(1);
    // "[0.500, 0.525) │" is 16 columns
    let bar_width = options.width.saturating_sub(16 + 1 + count_width + 2).max(10);

    for (i, bin) in histogram.bins.iter().enumerate() {
        let close = if i == last { ']' } else { ')' };
        let len = scaled_len(bin.count as f64, histogram.max_count as f64, bar_width);
        let bar = BLOCK.repeat(len);
        let bar = if options.enable_color {
            bar.cyan().to_string()
        } else {
            bar
        };
        writeln!(
            f,
            "[{:.3}, {:.3}{} {}{} {:>cw$}",
            bin.lower,
            bin.upper,
            close,
            ZERO_LINE,
            bar,
            bin.count,
            cw = count_width
        )?;
    }

    writeln!(f, "{} clauses", histogram.total)
}

fn write_summary(
    f: &mut fmt::Formatter,
    summary: &SummaryViewModel,
    options: &DisplayOptions,
) -> fmt::Result {
    let mut header: Vec<String> = vec!["bucket".to_string()];
    header.extend(summary.labels.iter().cloned());
    header.extend(
        ["total", "positive_rate", "negative_rate", "sentiment_score"]
            .iter()
            .map(|s| s.to_string()),
    );

    let rows: Vec<Vec<String>> = summary
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.bucket.clone()];
            cells.extend(
                summary
                    .labels
                    .iter()
                    .map(|l| row.counts.get(l).copied().unwrap_or(0).to_string()),
            );
            cells.push(row.total.to_string());
            cells.push(format_rate(row.positive_rate));
            cells.push(format_rate(row.negative_rate));
            cells.push(format_rate(row.sentiment_score));
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(header[col].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_line = format_row(&header, &widths);
    if options.enable_color {
        writeln!(f, "{}", header_line.bold())?;
    } else {
        writeln!(f, "{}", header_line)?;
    }
    writeln!(f, "{}", "-".repeat(header_line.chars().count()))?;

    for cells in &rows {
        writeln!(f, "{}", format_row(cells, &widths))?;
    }

    Ok(())
}

/// First column left-aligned, the rest right-aligned.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            if i == 0 {
                format!("{:<w$}", cell, w = w)
            } else {
                format!("{:>w$}", cell, w = w)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn write_scores(
    f: &mut fmt::Formatter,
    scores: &[ScoreBarViewModel],
    options: &DisplayOptions,
) -> fmt::Result {
    let label_width = scores
        .iter()
        .map(|s| s.bucket.chars().count())
        .max()
        .unwrap_or(0);
    // label, space, zero line, space, "+0.000"
    let half = (options.width.saturating_sub(label_width + 9) / 2).clamp(5, 40);

    for score in scores {
        let bar = diverging_bar(score.score, half);
        let left = paint(&BLOCK.repeat(bar.left), score.polarity, options);
        let right = paint(&BLOCK.repeat(bar.right), score.polarity, options);
        writeln!(
            f,
            "{:>lw$} {}{}{}{}{} {}",
            score.bucket,
            " ".repeat(bar.left_pad),
            left,
            ZERO_LINE,
            right,
            " ".repeat(bar.right_pad),
            format_score(score.score),
            lw = label_width
        )?;
    }

    writeln!(
        f,
        "{:lw$} {:<half$}0{:>half$}",
        "",
        "-1",
        "+1",
        lw = label_width,
        half = half
    )
}

fn paint(bar: &str, polarity: Polarity, options: &DisplayOptions) -> String {
    if !options.enable_color || bar.is_empty() {
        return bar.to_string();
    }
    let (r, g, b) = polarity.rgb();
    bar.truecolor(r, g, b).to_string()
}
