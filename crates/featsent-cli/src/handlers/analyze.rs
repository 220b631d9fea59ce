use anyhow::{Context, Result};
use featsent_runtime::{ANALYSIS_RUNNING, Config, CsvSource, DashboardSession, DashboardState};
use featsent_types::MAX_HISTOGRAM_BINS;
use std::path::PathBuf;

use crate::presentation::presenters::present_analysis;
use crate::presentation::{ConsoleRenderer, DisplayOptions, Renderer};

pub struct AnalyzeArgs {
    pub file: Option<PathBuf>,
    pub use_default: bool,
    pub results: Option<PathBuf>,
    pub bins: Option<usize>,
}

/// An explicit file wins over the default dataset.
pub fn resolve_source(config: &Config, file: Option<PathBuf>, use_default: bool) -> Option<CsvSource> {
    match (file, use_default) {
        (Some(path), _) => Some(CsvSource::Upload(path)),
        (None, true) => Some(CsvSource::Default(config.default_csv.clone())),
        (None, false) => None,
    }
}

pub fn resolve_bins(config: &Config, bins: Option<usize>) -> Result<usize> {
    let bins = bins.unwrap_or(config.histogram_bins);
    if bins == 0 {
        anyhow::bail!("--bins must be at least 1");
    }
    if bins > MAX_HISTOGRAM_BINS {
        anyhow::bail!("--bins must be at most {}", MAX_HISTOGRAM_BINS);
    }
    Ok(bins)
}

pub fn handle(
    config: &Config,
    args: AnalyzeArgs,
    json_mode: bool,
    options: DisplayOptions,
) -> Result<()> {
    let bins = resolve_bins(config, args.bins)?;
    let mut session = DashboardSession::new(bins);

    if let Some(source) = resolve_source(config, args.file, args.use_default) {
        session
            .load(&source)
            .with_context(|| format!("Failed to load {}", source.path().display()))?;

        if session.state() == DashboardState::DataLoaded {
            let analyzer = config.build_analyzer(args.results)?;
            if !json_mode {
                eprintln!("{}", ANALYSIS_RUNNING);
            }
            session.run_analysis(analyzer.as_ref())?;
        }
    }

    let renderer = ConsoleRenderer::new(json_mode, options);
    renderer.render(present_analysis(&session))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_wins_over_default() {
        let config = Config::default();
        let source = resolve_source(&config, Some(PathBuf::from("mine.csv")), true);
        assert_eq!(source, Some(CsvSource::Upload(PathBuf::from("mine.csv"))));
    }

    #[test]
    fn test_default_uses_config_path() {
        let mut config = Config::default();
        config.default_csv = PathBuf::from("/data/reviews.csv");
        let source = resolve_source(&config, None, true);
        assert_eq!(
            source,
            Some(CsvSource::Default(PathBuf::from("/data/reviews.csv")))
        );
        assert_eq!(resolve_source(&config, None, false), None);
    }

    #[test]
    fn test_bins() {
        let config = Config::default();
        assert_eq!(resolve_bins(&config, None).unwrap(), 20);
        assert_eq!(resolve_bins(&config, Some(5)).unwrap(), 5);
        assert!(resolve_bins(&config, Some(0)).is_err());
        assert_eq!(resolve_bins(&config, Some(1000)).unwrap(), 1000);
        assert!(resolve_bins(&config, Some(usize::MAX)).is_err());
    }
}
