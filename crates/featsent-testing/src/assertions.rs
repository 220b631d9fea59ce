//! Custom assertions for featsent JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the result badge has the given level ("success", "warning", ...).
pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;

    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }

    Ok(())
}

/// Assert the dashboard state reported in `content.state`.
pub fn assert_state(json: &Value, expected: &str) -> Result<()> {
    let state = json["content"]["state"]
        .as_str()
        .context("Expected 'content.state' in JSON")?;

    if state != expected {
        anyhow::bail!("Expected state {}, got {}", expected, state);
    }

    Ok(())
}

/// Summary bucket names in output order.
pub fn summary_buckets(json: &Value) -> Result<Vec<String>> {
    let rows = json["content"]["summary"]["rows"]
        .as_array()
        .context("Expected 'content.summary.rows' array in JSON")?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            row["bucket"]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Row {} missing bucket", i))
        })
        .collect()
}

/// Assert summary rows are sorted ascending by score, unscored rows last.
pub fn assert_sorted_by_score(json: &Value) -> Result<()> {
    let rows = json["content"]["summary"]["rows"]
        .as_array()
        .context("Expected 'content.summary.rows' array in JSON")?;

    let mut previous = f64::NEG_INFINITY;
    let mut seen_unscored = false;
    for (i, row) in rows.iter().enumerate() {
        match row["sentiment_score"].as_f64() {
            Some(score) => {
                if seen_unscored || score < previous {
                    anyhow::bail!("Row {} ({}) is out of order", i, row["bucket"]);
                }
                previous = score;
            }
            None => seen_unscored = true,
        }
    }

    Ok(())
}
