use serde::Serialize;

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(lower, upper, count)` for every bin.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (self.edges[i], self.edges[i + 1], count))
    }
}

/// Bin `values` into `bins` equal-width bins spanning their min..max.
///
/// Non-finite values are dropped. The last bin is closed on the right so the
/// maximum is counted. A single distinct value is centered in a range of
/// width one. Returns `None` when there is nothing to plot.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if bins == 0 {
        return None;
    }

    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0u64; bins];
    for v in finite {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Some(Histogram { edges, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twenty_bins_over_range() {
        let values: Vec<f64> = (0..=100).map(|i| 0.5 + i as f64 / 200.0).collect();
        let hist = histogram(&values, 20).unwrap();

        assert_eq!(hist.bins(), 20);
        assert_eq!(hist.edges.len(), 21);
        assert_eq!(hist.total(), 101);
        assert_eq!(hist.edges[0], 0.5);
        assert_eq!(hist.edges[20], 1.0);
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let hist = histogram(&[0.0, 0.5, 1.0], 4).unwrap();
        assert_eq!(hist.counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn test_single_value_is_centered() {
        let hist = histogram(&[0.9, 0.9], 20).unwrap();
        assert_eq!(hist.total(), 2);
        assert!((hist.edges[0] - 0.4).abs() < 1e-12);
        assert!((hist.edges[20] - 1.4).abs() < 1e-12);
        assert_eq!(hist.counts.iter().filter(|&&c| c == 2).count(), 1);
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        let hist = histogram(&[f64::NAN, 0.2, f64::INFINITY, 0.8], 2).unwrap();
        assert_eq!(hist.counts, vec![1, 1]);
    }

    #[test]
    fn test_nothing_to_plot() {
        assert!(histogram(&[], 20).is_none());
        assert!(histogram(&[f64::NAN], 20).is_none());
        assert!(histogram(&[0.5], 0).is_none());
    }
}
