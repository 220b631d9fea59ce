use featsent_engine::{confidence_histogram, score_bars, summarize};
use featsent_types::{SentimentRecord, SentimentTable};

fn results() -> SentimentTable {
    [
        ("support", "NEGATIVE", 0.91),
        ("price", "POSITIVE", 0.75),
        ("app", "POSITIVE", 0.98),
        ("support", "NEGATIVE", 0.66),
        ("price", "NEGATIVE", 0.52),
    ]
    .into_iter()
    .map(|(bucket, label, confidence)| SentimentRecord::new(bucket, label, confidence))
    .collect()
}

#[test]
fn test_summary_json_snapshot() {
    let summary = summarize(&results());
    let json = serde_json::to_string_pretty(&summary).unwrap();

    insta::assert_snapshot!(json, @r#"
{
  "labels": [
    "NEGATIVE",
    "POSITIVE"
  ],
  "rows": [
    {
      "bucket": "support",
      "counts": {
        "NEGATIVE": 2,
        "POSITIVE": 0
      },
      "total": 2,
      "positive_rate": 0.0,
      "negative_rate": 1.0,
      "sentiment_score": -1.0
    },
    {
      "bucket": "price",
      "counts": {
        "NEGATIVE": 1,
        "POSITIVE": 1
      },
      "total": 2,
      "positive_rate": 0.5,
      "negative_rate": 0.5,
      "sentiment_score": 0.0
    },
    {
      "bucket": "app",
      "counts": {
        "NEGATIVE": 0,
        "POSITIVE": 1
      },
      "total": 1,
      "positive_rate": 1.0,
      "negative_rate": 0.0,
      "sentiment_score": 1.0
    }
  ]
}
"#);
}

#[test]
fn test_pipeline_from_results_to_bars() {
    let results = results();
    let summary = summarize(&results);
    let bars = score_bars(&summary);

    let buckets: Vec<&str> = bars.iter().map(|b| b.bucket.as_str()).collect();
    assert_eq!(buckets, vec!["support", "price", "app"]);

    let hist = confidence_histogram(&results, 20).unwrap();
    assert_eq!(hist.total(), results.len() as u64);
    assert_eq!(hist.counts[0], 1);
    assert_eq!(hist.counts[19], 1);
}

#[test]
fn test_every_bucket_has_one_row() {
    let results = results();
    let summary = summarize(&results);

    let mut buckets: Vec<&str> = results.iter().map(|r| r.bucket.as_str()).collect();
    buckets.sort();
    buckets.dedup();
    assert_eq!(summary.len(), buckets.len());

    for bucket in buckets {
        let expected = results.iter().filter(|r| r.bucket == bucket).count() as u64;
        let row = summary.row(bucket).unwrap();
        let counted: u64 = summary.labels().iter().map(|l| row.count(l)).sum();
        assert_eq!(counted, expected);
    }
}
