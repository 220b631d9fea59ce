/// Number of cells for `value` on a scale where `max` fills `width`.
pub fn scaled_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    (ratio * width as f64).round() as usize
}

/// Placement of one bar in a chart centered on a zero line.
///
/// Each side of the zero line is `half` cells wide. Negative bars grow
/// leftwards from the line, positive bars rightwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivergingBar {
    pub left_pad: usize,
    pub left: usize,
    pub right: usize,
    pub right_pad: usize,
}

/// Scores are expected in [-1, 1].
pub fn diverging_bar(score: f64, half: usize) -> DivergingBar {
    let len = scaled_len(score.abs(), 1.0, half);
    if score < 0.0 {
        DivergingBar {
            left_pad: half - len,
            left: len,
            right: 0,
            right_pad: half,
        }
    } else {
        DivergingBar {
            left_pad: half,
            left: 0,
            right: len,
            right_pad: half - len,
        }
    }
}
