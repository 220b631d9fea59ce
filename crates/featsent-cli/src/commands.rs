use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use super::handlers::analyze::AnalyzeArgs;
use super::handlers::dashboard::DashboardArgs;
use crate::logging;
use crate::presentation::DisplayOptions;
use crate::presentation::formatters::terminal_width;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use featsent_runtime::{Config, resolve_config_path};
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let is_dashboard = matches!(cli.command, Some(Commands::Dashboard { .. }));
    logging::init(cli.log_level, if is_dashboard { "off" } else { "warn" });

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let json_mode = cli.format == OutputFormat::Json;
    let options = DisplayOptions {
        enable_color: !cli.no_color && std::io::stdout().is_terminal(),
        width: terminal_width(),
    };

    tracing::debug!(config = %config_path.display(), format = %cli.format, "starting");

    let Some(command) = cli.command else {
        // No subcommand: behave like `analyze` with nothing selected.
        let config = load_config(&config_path)?;
        return handlers::analyze::handle(
            &config,
            AnalyzeArgs {
                file: None,
                use_default: false,
                results: None,
                bins: None,
            },
            json_mode,
            options,
        );
    };

    match command {
        Commands::Analyze {
            file,
            use_default,
            results,
            bins,
        } => {
            let config = load_config(&config_path)?;
            handlers::analyze::handle(
                &config,
                AnalyzeArgs {
                    file,
                    use_default,
                    results,
                    bins,
                },
                json_mode,
                options,
            )
        }

        Commands::Dashboard {
            file,
            results,
            bins,
        } => {
            let config = load_config(&config_path)?;
            handlers::dashboard::handle(
                &config,
                DashboardArgs {
                    file,
                    results,
                    bins,
                },
            )
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&config_path, json_mode, options),
            ConfigCommand::Init { force } => {
                handlers::config::handle_init(&config_path, force, json_mode, options)
            }
        },
    }
}

fn load_config(path: &std::path::Path) -> Result<Config> {
    Config::load_from(path).with_context(|| format!("Failed to load config {}", path.display()))
}
