mod review;
mod sentiment;

pub use review::ReviewTable;
pub use sentiment::{Label, SentimentRecord, SentimentTable};

/// Column the analyzer reads review text from.
pub const TEXT_COLUMN: &str = "cleaned_content";

/// Processed reviews file used when the user asks for the default dataset.
pub const DEFAULT_CSV: &str = "data/processed/noom_google_clean.csv";

/// Number of bins in the confidence histogram.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Upper bound accepted for the histogram bin count.
pub const MAX_HISTOGRAM_BINS: usize = 1000;
