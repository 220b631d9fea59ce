/// Three decimals, `-` when undefined.
pub fn format_rate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => "-".to_string(),
    }
}

/// Signed, three decimals.
pub fn format_score(value: f64) -> String {
    format!("{:+.3}", value)
}
