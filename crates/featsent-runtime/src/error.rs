use std::fmt;
use std::path::PathBuf;

/// Result type for featsent-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Analyzer layer error
    Provider(featsent_providers::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// CSV parsing failed
    Csv(csv::Error),

    /// Configuration error
    Config(String),

    /// Uploaded file is not a CSV
    UnsupportedFile(PathBuf),

    /// Invalid operation or state
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(err) => write!(f, "Analyzer error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::UnsupportedFile(path) => {
                write!(f, "Unsupported file (expected .csv): {}", path.display())
            }
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Provider(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::Config(_) | Error::UnsupportedFile(_) | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<featsent_providers::Error> for Error {
    fn from(err: featsent_providers::Error) -> Self {
        Error::Provider(err)
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

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
