use anyhow::Result;
use featsent_runtime::{Config, CsvSource, DashboardSession};
use std::path::PathBuf;

use super::analyze::resolve_bins;
use crate::presentation::DashboardTui;

pub struct DashboardArgs {
    pub file: Option<PathBuf>,
    pub results: Option<PathBuf>,
    pub bins: Option<usize>,
}

pub fn handle(config: &Config, args: DashboardArgs) -> Result<()> {
    let bins = resolve_bins(config, args.bins)?;
    let analyzer = config.build_analyzer(args.results)?;

    let mut session = DashboardSession::new(bins);
    if let Some(path) = args.file {
        let loaded = session.load(&CsvSource::Upload(path)).map(|_| ());
        if let Err(err) = loaded {
            session.fail(err);
        }
    }

    DashboardTui::new(session, config.default_csv.clone()).run(analyzer.as_ref())
}
