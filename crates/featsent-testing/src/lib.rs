//! Testing infrastructure for featsent integration tests.
//!
//! - `TestWorld`: isolated temp directory with config and CSV files
//! - `assertions`: checks against the JSON output of `--format json`
//! - `fixtures`: sample review and result CSVs

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
