//! # Presentation Layer
//!
//! MVVM adaptation shared by the console report and the dashboard TUI.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: raw data, `Serialize`. JSON output is an API, so rates
//!   and scores stay numbers (`None` when undefined).
//! * `presenters/`: pure functions from runtime state to view models.
//! * `views/`: `fmt::Display` layouts. Colors and number formatting live here.
//! * `formatters/`: small helpers used by views and TUI components.
//! * `renderers/`: console (JSON or text) and the ratatui dashboard.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, DashboardTui, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel,
};
