use crate::{Error, Result};
use featsent_types::ReviewTable;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Where the reviews come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    /// A file the user handed over explicitly
    Upload(PathBuf),
    /// The configured default dataset
    Default(PathBuf),
}

impl CsvSource {
    pub fn path(&self) -> &Path {
        match self {
            CsvSource::Upload(path) | CsvSource::Default(path) => path,
        }
    }

    pub fn origin(&self) -> CsvOrigin {
        match self {
            CsvSource::Upload(_) => CsvOrigin::Upload,
            CsvSource::Default(_) => CsvOrigin::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvOrigin {
    Upload,
    Default,
}

impl CsvOrigin {
    pub fn describe(&self) -> &'static str {
        match self {
            CsvOrigin::Upload => "uploaded CSV",
            CsvOrigin::Default => "default CSV",
        }
    }
}

#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Loaded {
        table: ReviewTable,
        origin: CsvOrigin,
        path: PathBuf,
    },
    /// The default dataset is absent. Not a fault: the user is told to
    /// upload a file instead.
    DefaultMissing { path: PathBuf },
}

impl LoadOutcome {
    pub fn message(&self) -> String {
        match self {
            LoadOutcome::Loaded { table, origin, .. } => {
                format!("Loaded {} reviews from {}.", table.len(), origin.describe())
            }
            LoadOutcome::DefaultMissing { path } => format!(
                "Default CSV not found at {}. Please upload a file.",
                path.display()
            ),
        }
    }

    pub fn table(&self) -> Option<&ReviewTable> {
        match self {
            LoadOutcome::Loaded { table, .. } => Some(table),
            LoadOutcome::DefaultMissing { .. } => None,
        }
    }

    pub fn into_table(self) -> Option<ReviewTable> {
        match self {
            LoadOutcome::Loaded { table, .. } => Some(table),
            LoadOutcome::DefaultMissing { .. } => None,
        }
    }
}

/// Load reviews from an uploaded file or the default dataset.
///
/// Only a missing default file is turned into an outcome; every other
/// failure (unreadable upload, malformed CSV) is returned as an error.
pub fn load_reviews(source: &CsvSource) -> Result<LoadOutcome> {
    let path = source.path();

    if let CsvSource::Upload(path) = source
        && !has_csv_extension(path)
    {
        return Err(Error::UnsupportedFile(path.clone()));
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound && source.origin() == CsvOrigin::Default => {
            warn!(path = %path.display(), "default CSV not found");
            return Ok(LoadOutcome::DefaultMissing {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let table = parse_reviews(file)?;
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "loaded reviews"
    );

    Ok(LoadOutcome::Loaded {
        table,
        origin: source.origin(),
        path: path.to_path_buf(),
    })
}

fn parse_reviews<R: Read>(reader: R) -> Result<ReviewTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(ReviewTable::new(headers, rows))
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_upload() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "reviews.csv",
            "\u{feff}review_id,cleaned_content\n1,great coach\n2,\"too expensive, sadly\"\n",
        );

        let outcome = load_reviews(&CsvSource::Upload(path))?;
        let table = outcome.table().unwrap();
        assert_eq!(table.headers, vec!["review_id", "cleaned_content"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][1], "too expensive, sadly");
        assert_eq!(outcome.message(), "Loaded 2 reviews from uploaded CSV.");
        Ok(())
    }

    #[test]
    fn test_default_missing_is_not_an_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("data/processed/noom_google_clean.csv");

        let outcome = load_reviews(&CsvSource::Default(path.clone()))?;
        assert!(outcome.table().is_none());
        assert_eq!(
            outcome.message(),
            format!("Default CSV not found at {}. Please upload a file.", path.display())
        );
        Ok(())
    }

    #[test]
    fn test_missing_upload_is_an_error() {
        let result = load_reviews(&CsvSource::Upload(PathBuf::from("/nonexistent/reviews.csv")));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_upload_must_be_csv() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "reviews.txt", "cleaned_content\nhello\n");

        let result = load_reviews(&CsvSource::Upload(path));
        assert!(matches!(result, Err(Error::UnsupportedFile(_))));

        let upper = write(&dir, "REVIEWS.CSV", "cleaned_content\nhello\n");
        assert!(load_reviews(&CsvSource::Upload(upper)).is_ok());
        Ok(())
    }

    #[test]
    fn test_ragged_rows_are_accepted() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "reviews.csv", "a,b,cleaned_content\n1,2\n1,2,3,4\n");

        let outcome = load_reviews(&CsvSource::Upload(path))?;
        let table = outcome.table().unwrap();
        assert_eq!(table.len(), 2);
        let texts: Vec<&str> = table.column("cleaned_content").unwrap().collect();
        assert_eq!(texts, vec!["", "3"]);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_a_csv_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("reviews.csv");
        std::fs::write(&path, b"id,cleaned_content\n1,great coach\n2,\xff\xfe broken\n")?;

        let result = load_reviews(&CsvSource::Upload(path));
        assert!(matches!(result, Err(Error::Csv(_))));
        Ok(())
    }

    #[test]
    fn test_header_whitespace_is_kept() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "reviews.csv", "\u{feff}id, cleaned_content\n1,great coach\n");

        let outcome = load_reviews(&CsvSource::Upload(path))?;
        let table = outcome.table().unwrap();
        assert_eq!(table.headers, vec!["id", " cleaned_content"]);
        assert!(!table.has_column("cleaned_content"));
        Ok(())
    }

    #[test]
    fn test_columns_are_not_validated() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "reviews.csv", "title,body\nhi,there\n");

        let outcome = load_reviews(&CsvSource::Upload(path))?;
        assert!(!outcome.table().unwrap().has_column("cleaned_content"));
        Ok(())
    }
}
