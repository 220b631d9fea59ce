//! Sample CSV content for tests.

/// Reviews in the shape of the processed Google Play export: metadata columns
/// plus `cleaned_content`. Every review hits at least one bucket keyword.
pub const SAMPLE_REVIEWS_CSV: &str = "\
review_id,score,at,cleaned_content
r1,5,2024-01-03,the coach is amazing and really supportive
r2,1,2024-01-04,way too expensive for what you get
r3,2,2024-01-05,\"love the lessons, but the subscription is overpriced\"
r4,4,2024-01-06,logging food is easy
r5,1,2024-01-07,the app crashes every time i scan a barcode
r6,3,2024-01-08,customer service was unhelpful
";

/// Reviews none of the default buckets match.
pub const UNMATCHED_REVIEWS_CSV: &str = "\
review_id,cleaned_content
r1,installed it yesterday
r2,my sister told me about it
";

/// Reviews without the text column the analyzer reads.
pub const WRONG_COLUMN_CSV: &str = "\
review_id,content
r1,great coach
";

/// Results as an external model would emit them.
pub const SAMPLE_RESULTS_CSV: &str = "\
bucket,label,confidence
price,POSITIVE,0.91
price,POSITIVE,0.88
price,NEGATIVE,0.97
support,NEGATIVE,0.99
support,NEGATIVE,0.74
coaching,POSITIVE,0.95
";

pub const EMPTY_RESULTS_CSV: &str = "bucket,label,confidence\n";
