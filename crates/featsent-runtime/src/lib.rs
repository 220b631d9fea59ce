pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod session;

pub use analysis::{AnalysisReport, run_analysis};
pub use config::{AnalyzerConfig, Config, resolve_config_path};
pub use error::{Error, Result};
pub use loader::{CsvOrigin, CsvSource, LoadOutcome, load_reviews};
pub use session::{
    ANALYSIS_COMPLETE, ANALYSIS_RUNNING, DashboardSession, DashboardState, LoadedSource,
    NO_DATA_HINT, NO_RESULTS, Notice, NoticeLevel,
};
