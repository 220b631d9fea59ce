// NOTE: featsent layering
//
// types      → review table and analyzer result records
// providers  → analyzers (keyword lexicon, precomputed results CSV)
// engine     → pivot summary, histogram, score bars (pure functions)
// runtime    → CSV loading, config, dashboard session state
// cli        → argument parsing, handlers, console/JSON/TUI presentation
//
// Everything runs on one thread. The analyzer call blocks; the TUI draws a
// "running" frame first and then waits for it.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
