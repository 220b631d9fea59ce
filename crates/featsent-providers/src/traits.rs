use crate::Result;
use featsent_types::{ReviewTable, SentimentTable};

/// Feature-level sentiment extraction.
///
/// Implementations receive the whole reviews table plus the name of the text
/// column, and return one record per analyzed clause. `Ok(None)` and an empty
/// table both mean "nothing matched"; callers treat them the same way.
/// The call is synchronous and may take a long time.
pub trait SentimentAnalyzer {
    /// Short identifier shown to the user (e.g., "keyword", "precomputed")
    fn name(&self) -> &str;

    fn analyze(&self, reviews: &ReviewTable, text_column: &str)
    -> Result<Option<SentimentTable>>;
}
