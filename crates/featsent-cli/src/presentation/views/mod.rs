pub mod analysis;
pub mod config;

pub use analysis::AnalysisView;
pub use config::{ConfigInitView, ConfigShowView};
