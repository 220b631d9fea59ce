use std::fmt;

/// Result type for featsent-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while running an analyzer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// CSV parsing failed
    Csv(csv::Error),

    /// The reviews table has no column with this name
    MissingColumn(String),

    /// Analyzer not found or misconfigured
    Analyzer(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::MissingColumn(name) => {
                write!(f, "Column '{}' not found in reviews table", name)
            }
            Error::Analyzer(msg) => write!(f, "Analyzer error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::MissingColumn(_) | Error::Analyzer(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
