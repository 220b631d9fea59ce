// Error types
pub mod error;

// Analyzer contract
pub mod traits;

// Analyzer implementations
pub mod keyword;
pub mod precomputed;

// Text scoring
pub mod clause;
pub mod lexicon;

// Analyzer registry
pub mod registry;

pub use error::{Error, Result};
pub use keyword::{BucketDefinition, KeywordAnalyzer, default_buckets};
pub use lexicon::{LexiconScore, ReviewLexicon};
pub use precomputed::PrecomputedAnalyzer;
pub use registry::{AnalyzerOptions, create_analyzer};
pub use traits::SentimentAnalyzer;
