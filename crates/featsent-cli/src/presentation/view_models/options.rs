/// Console rendering options
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub enable_color: bool,
    /// Terminal columns available to charts.
    pub width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            width: 80,
        }
    }
}
