use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "featsent")]
#[command(about = "Feature-level sentiment dashboard for review CSVs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $FEATSENT_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Log level for stderr diagnostics (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Load reviews, run the analyzer once and print the report")]
    Analyze {
        #[arg(long, help = "Reviews CSV to analyze (takes priority over --use-default)")]
        file: Option<PathBuf>,

        #[arg(long, help = "Use the default processed CSV from the config")]
        use_default: bool,

        #[arg(
            long,
            help = "Precomputed results CSV (bucket,label,confidence) instead of the keyword analyzer"
        )]
        results: Option<PathBuf>,

        #[arg(long, help = "Number of histogram bins (default from config)")]
        bins: Option<usize>,
    },

    #[command(about = "Interactive dashboard (d: default CSV, r: run analysis, q: quit)")]
    Dashboard {
        #[arg(long, help = "Reviews CSV to load on start")]
        file: Option<PathBuf>,

        #[arg(long, help = "Precomputed results CSV used when running the analysis")]
        results: Option<PathBuf>,

        #[arg(long, help = "Number of histogram bins (default from config)")]
        bins: Option<usize>,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write the default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
