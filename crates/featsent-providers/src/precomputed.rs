use crate::Result;
use crate::traits::SentimentAnalyzer;
use featsent_types::{ReviewTable, SentimentRecord, SentimentTable};
use std::path::{Path, PathBuf};
use tracing::info;

/// Replays results produced elsewhere.
///
/// Reads a CSV with at least `bucket`, `label` and `confidence` columns.
/// The reviews table is ignored; this lets the dashboard render output of an
/// external model run without re-analyzing.
pub struct PrecomputedAnalyzer {
    path: PathBuf,
}

impl PrecomputedAnalyzer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SentimentAnalyzer for PrecomputedAnalyzer {
    fn name(&self) -> &str {
        "precomputed"
    }

    fn analyze(
        &self,
        _reviews: &ReviewTable,
        _text_column: &str,
    ) -> Result<Option<SentimentTable>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let records = reader
            .deserialize::<SentimentRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!(path = %self.path.display(), records = records.len(), "loaded precomputed results");

        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(SentimentTable::new(records)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("results.csv");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_required_columns_and_ignores_extra() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "bucket,label,confidence,model\nprice,NEGATIVE,0.97,distilbert\nsupport,POSITIVE,0.61,distilbert\n",
        );

        let table = PrecomputedAnalyzer::new(path)
            .analyze(&ReviewTable::default(), "cleaned_content")?
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].bucket, "price");
        assert_eq!(table.records[0].label, "NEGATIVE");
        assert_eq!(table.records[1].confidence, 0.61);
        assert_eq!(table.records[1].review_index, None);
        Ok(())
    }

    #[test]
    fn test_header_only_is_nothing_matched() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "bucket,label,confidence\n");

        let result =
            PrecomputedAnalyzer::new(path).analyze(&ReviewTable::default(), "cleaned_content")?;
        assert!(result.is_none());
        Ok(())
    }

    #[test]
    fn test_missing_required_column_fails() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "bucket,label\nprice,POSITIVE\n");

        let result =
            PrecomputedAnalyzer::new(path).analyze(&ReviewTable::default(), "cleaned_content");
        assert!(matches!(result, Err(crate::Error::Csv(_))));
        Ok(())
    }
}
