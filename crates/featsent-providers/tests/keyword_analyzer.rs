use featsent_providers::{
    AnalyzerOptions, BucketDefinition, SentimentAnalyzer, create_analyzer, default_buckets,
};
use featsent_testing::fixtures;
use featsent_types::{ReviewTable, TEXT_COLUMN};

fn table_from_csv(content: &str) -> ReviewTable {
    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    ReviewTable::new(headers, rows)
}

fn keyword(buckets: Vec<BucketDefinition>) -> Box<dyn SentimentAnalyzer> {
    create_analyzer(
        "keyword",
        AnalyzerOptions {
            buckets,
            ..AnalyzerOptions::default()
        },
    )
    .unwrap()
}

#[test]
fn test_sample_reviews_cover_expected_buckets() {
    let reviews = table_from_csv(fixtures::SAMPLE_REVIEWS_CSV);
    let results = keyword(default_buckets())
        .analyze(&reviews, TEXT_COLUMN)
        .unwrap()
        .unwrap();

    let mut buckets: Vec<&str> = results.iter().map(|r| r.bucket.as_str()).collect();
    buckets.sort();
    buckets.dedup();
    assert_eq!(
        buckets,
        vec!["coaching", "content", "food_logging", "price", "support", "usability"]
    );

    let price: Vec<&str> = results
        .iter()
        .filter(|r| r.bucket == "price")
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(price, vec!["NEGATIVE", "NEGATIVE"]);
}

#[test]
fn test_records_point_back_to_reviews() {
    let reviews = table_from_csv(fixtures::SAMPLE_REVIEWS_CSV);
    let results = keyword(default_buckets())
        .analyze(&reviews, TEXT_COLUMN)
        .unwrap()
        .unwrap();

    for record in &results {
        let idx = record.review_index.unwrap();
        assert!(idx < reviews.len());
        let clause = record.clause.as_deref().unwrap();
        let text = reviews.column(TEXT_COLUMN).unwrap().nth(idx).unwrap();
        assert!(text.to_lowercase().contains(clause));
    }
}

#[test]
fn test_unmatched_reviews_yield_nothing() {
    let reviews = table_from_csv(fixtures::UNMATCHED_REVIEWS_CSV);
    let results = keyword(default_buckets())
        .analyze(&reviews, TEXT_COLUMN)
        .unwrap();
    assert!(results.is_none());
}

#[test]
fn test_negation_flips_label() {
    let reviews = ReviewTable::new(
        vec![TEXT_COLUMN.to_string()],
        vec![
            vec!["the coach was not helpful".to_string()],
            vec!["the coach was helpful".to_string()],
        ],
    );
    let results = keyword(vec![BucketDefinition::new("coaching", &["coach"])])
        .analyze(&reviews, TEXT_COLUMN)
        .unwrap()
        .unwrap();

    let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["NEGATIVE", "POSITIVE"]);
}
