use crate::keyword::{BucketDefinition, KeywordAnalyzer};
use crate::precomputed::PrecomputedAnalyzer;
use crate::traits::SentimentAnalyzer;
use crate::{Error, Result};
use std::path::PathBuf;

/// Names accepted by `create_analyzer`.
const ANALYZERS: &[&str] = &["keyword", "precomputed"];

/// Everything needed to build any registered analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerOptions {
    pub buckets: Vec<BucketDefinition>,
    pub min_confidence: f64,
    pub results_path: Option<PathBuf>,
}

/// Create an analyzer by name
pub fn create_analyzer(name: &str, options: AnalyzerOptions) -> Result<Box<dyn SentimentAnalyzer>> {
    match name {
        "keyword" => Ok(Box::new(
            KeywordAnalyzer::new(options.buckets).with_min_confidence(options.min_confidence),
        )),
        "precomputed" => {
            let path = options.results_path.ok_or_else(|| {
                Error::Analyzer("precomputed analyzer needs a results CSV path".to_string())
            })?;
            Ok(Box::new(PrecomputedAnalyzer::new(path)))
        }
        other => Err(Error::Analyzer(format!(
            "unknown analyzer '{}' (available: {})",
            other,
            ANALYZERS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_buckets;

    #[test]
    fn test_create_keyword() {
        let analyzer = create_analyzer(
            "keyword",
            AnalyzerOptions {
                buckets: default_buckets(),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(analyzer.name(), "keyword");
    }

    #[test]
    fn test_precomputed_requires_path() {
        assert!(create_analyzer("precomputed", AnalyzerOptions::default()).is_err());

        let analyzer = create_analyzer(
            "precomputed",
            AnalyzerOptions {
                results_path: Some(PathBuf::from("results.csv")),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(analyzer.name(), "precomputed");
    }

    #[test]
    fn test_unknown_analyzer() {
        let err = create_analyzer("bert", AnalyzerOptions::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains("available: keyword, precomputed"));
    }
}
