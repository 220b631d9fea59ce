use featsent_engine::{Histogram, ScoreBar, SentimentSummary};
use featsent_runtime::{CsvOrigin, DashboardSession, DashboardState, NoticeLevel};

use crate::presentation::view_models::{
    AnalysisViewModel, CommandResultViewModel, Guidance, HistogramBinViewModel,
    HistogramViewModel, ScoreBarViewModel, SourceViewModel, StateViewModel, StatusBadge,
    SummaryRowViewModel, SummaryViewModel,
};

pub fn present_analysis(session: &DashboardSession) -> CommandResultViewModel<AnalysisViewModel> {
    let state = session.state();
    let report = session.report();

    let source = session.source().map(|src| SourceViewModel {
        origin: match src.origin {
            CsvOrigin::Upload => "upload".to_string(),
            CsvOrigin::Default => "default".to_string(),
        },
        path: src.path.display().to_string(),
        reviews: session.reviews().map(|r| r.len()).unwrap_or(0),
    });

    let content = AnalysisViewModel {
        state: present_state(state),
        source,
        analyzer: report.map(|r| r.analyzer.clone()),
        histogram: report.and_then(|r| r.histogram.as_ref()).map(present_histogram),
        summary: report.map(|r| present_summary(&r.summary)),
        scores: report
            .map(|r| r.bars.iter().map(present_score_bar).collect())
            .unwrap_or_default(),
    };

    let notice = session.notice();
    let badge = match notice.level {
        NoticeLevel::Info => StatusBadge::info(&notice.message),
        NoticeLevel::Success => StatusBadge::success(&notice.message),
        NoticeLevel::Warning => StatusBadge::warning(&notice.message),
        NoticeLevel::Error => StatusBadge::error(&notice.message),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(badge);

    match state {
        DashboardState::NoData => {
            result = result
                .with_suggestion(
                    Guidance::new("Analyze your own reviews")
                        .with_command("featsent analyze --file <reviews.csv>"),
                )
                .with_suggestion(
                    Guidance::new("Use the default processed CSV")
                        .with_command("featsent analyze --use-default"),
                );
        }
        DashboardState::NoResults => {
            result = result.with_suggestion(
                Guidance::new("Review the keyword buckets in your config")
                    .with_command("featsent config show"),
            );
        }
        DashboardState::DataLoaded | DashboardState::ResultsReady => {}
    }

    result
}

fn present_state(state: DashboardState) -> StateViewModel {
    match state {
        DashboardState::NoData => StateViewModel::NoData,
        DashboardState::DataLoaded => StateViewModel::DataLoaded,
        DashboardState::ResultsReady => StateViewModel::ResultsReady,
        DashboardState::NoResults => StateViewModel::NoResults,
    }
}

fn present_histogram(histogram: &Histogram) -> HistogramViewModel {
    HistogramViewModel {
        bins: histogram
            .iter_bins()
            .map(|(lower, upper, count)| HistogramBinViewModel {
                lower,
                upper,
                count,
            })
            .collect(),
        max_count: histogram.max_count(),
        total: histogram.total(),
    }
}

fn present_summary(summary: &SentimentSummary) -> SummaryViewModel {
    SummaryViewModel {
        labels: summary.labels().to_vec(),
        rows: summary
            .rows
            .iter()
            .map(|row| SummaryRowViewModel {
                bucket: row.bucket.clone(),
                counts: row.counts.clone(),
                total: row.total,
                positive_rate: row.positive_rate,
                negative_rate: row.negative_rate,
                sentiment_score: row.sentiment_score,
            })
            .collect(),
    }
}

fn present_score_bar(bar: &ScoreBar) -> ScoreBarViewModel {
    ScoreBarViewModel {
        bucket: bar.bucket.clone(),
        score: bar.score,
        polarity: bar.polarity,
        color: bar.polarity.hex().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use featsent_runtime::CsvSource;
    use featsent_providers::KeywordAnalyzer;
    use std::path::PathBuf;

    #[test]
    fn test_no_data_suggests_both_sources() {
        let session = DashboardSession::new(20);
        let result = present_analysis(&session);

        assert_eq!(result.content.state, StateViewModel::NoData);
        assert!(result.content.summary.is_none());
        assert!(result.content.scores.is_empty());
        assert_eq!(result.badge.unwrap().level, StatusLevel::Info);
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_missing_default_is_error_badge() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let mut session = DashboardSession::new(20);
        session.load(&CsvSource::Default(dir.path().join("absent.csv")))?;

        let result = present_analysis(&session);
        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Error);
        assert!(badge.label.starts_with("Default CSV not found at "));
        assert!(result.content.source.is_none());
        Ok(())
    }

    #[test]
    fn test_results_are_presented_in_summary_order() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let path: PathBuf = dir.path().join("reviews.csv");
        std::fs::write(
            &path,
            "cleaned_content\nthe coach is amazing\nway too expensive\nlove the recipes\n",
        )?;

        let mut session = DashboardSession::new(10);
        session.load(&CsvSource::Upload(path))?;
        session.run_analysis(&KeywordAnalyzer::default())?;

        let result = present_analysis(&session);
        let content = &result.content;
        assert_eq!(content.state, StateViewModel::ResultsReady);
        assert_eq!(content.analyzer.as_deref(), Some("keyword"));
        assert_eq!(content.source.as_ref().unwrap().origin, "upload");
        assert_eq!(content.source.as_ref().unwrap().reviews, 3);
        assert_eq!(content.histogram.as_ref().unwrap().bins.len(), 10);

        let buckets: Vec<&str> = content
            .summary
            .as_ref()
            .unwrap()
            .rows
            .iter()
            .map(|r| r.bucket.as_str())
            .collect();
        assert_eq!(buckets, vec!["price", "coaching", "food_logging"]);
        assert_eq!(content.scores[0].color, "#F44336");
        assert_eq!(content.scores[1].color, "#4CAF50");
        assert!(result.suggestions.is_empty());
        Ok(())
    }
}
