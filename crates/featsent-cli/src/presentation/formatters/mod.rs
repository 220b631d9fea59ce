pub mod bar;
pub mod number;

pub use bar::{DivergingBar, diverging_bar, scaled_len};
pub use number::{format_rate, format_score};

/// Columns of the attached terminal, 80 when there is none.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
}
