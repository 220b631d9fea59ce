//! Dashboard session driven through the same steps a user takes.

use anyhow::Result;
use featsent_runtime::{
    ANALYSIS_COMPLETE, Config, CsvSource, DashboardSession, DashboardState, NoticeLevel,
};
use featsent_testing::fixtures;
use tempfile::TempDir;

#[test]
fn test_upload_analyze_summary() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("reviews.csv");
    std::fs::write(&path, fixtures::SAMPLE_REVIEWS_CSV)?;

    let config = Config::default();
    let analyzer = config.build_analyzer(None)?;
    let mut session = DashboardSession::new(config.histogram_bins);

    session.load(&CsvSource::Upload(path))?;
    assert_eq!(session.state(), DashboardState::DataLoaded);

    let notice = session.run_analysis(analyzer.as_ref())?;
    assert_eq!(notice.message, ANALYSIS_COMPLETE);

    let report = session.report().expect("report after successful analysis");
    let scores: Vec<f64> = report
        .summary
        .rows
        .iter()
        .filter_map(|r| r.sentiment_score)
        .collect();
    assert!(scores.windows(2).all(|w| w[0] <= w[1]));
    assert!(scores.iter().all(|s| (-1.0..=1.0).contains(s)));

    let histogram = report.histogram.as_ref().unwrap();
    assert_eq!(histogram.bins(), 20);
    assert_eq!(histogram.total() as usize, report.results.len());
    assert_eq!(report.bars.len(), report.summary.len());
    Ok(())
}

#[test]
fn test_configured_default_path() -> Result<()> {
    let dir = TempDir::new()?;
    let default_csv = dir.path().join("processed").join("reviews.csv");

    let mut config = Config::default();
    config.default_csv = default_csv.clone();
    let mut session = DashboardSession::new(config.histogram_bins);

    session.load(&CsvSource::Default(config.default_csv.clone()))?;
    assert_eq!(session.state(), DashboardState::NoData);
    assert_eq!(session.notice().level, NoticeLevel::Error);

    std::fs::create_dir_all(default_csv.parent().unwrap())?;
    std::fs::write(&default_csv, fixtures::SAMPLE_REVIEWS_CSV)?;

    session.load(&CsvSource::Default(config.default_csv.clone()))?;
    assert_eq!(session.state(), DashboardState::DataLoaded);
    assert_eq!(session.notice().message, "Loaded 6 reviews from default CSV.");
    Ok(())
}

#[test]
fn test_precomputed_results_bypass_text_column() -> Result<()> {
    let dir = TempDir::new()?;
    let reviews = dir.path().join("reviews.csv");
    let results = dir.path().join("results.csv");
    std::fs::write(&reviews, fixtures::WRONG_COLUMN_CSV)?;
    std::fs::write(&results, fixtures::SAMPLE_RESULTS_CSV)?;

    let config = Config::default();
    let analyzer = config.build_analyzer(Some(results))?;
    let mut session = DashboardSession::new(5);

    session.load(&CsvSource::Upload(reviews))?;
    session.run_analysis(analyzer.as_ref())?;

    let report = session.report().unwrap();
    assert_eq!(report.analyzer, "precomputed");
    assert_eq!(report.summary.rows[0].bucket, "support");
    assert_eq!(report.histogram.as_ref().unwrap().bins(), 5);
    Ok(())
}
