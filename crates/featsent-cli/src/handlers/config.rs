use anyhow::{Context, Result};
use featsent_runtime::Config;
use std::path::Path;

use crate::presentation::presenters::{present_config_init, present_config_show};
use crate::presentation::{ConsoleRenderer, DisplayOptions, Renderer};

pub fn handle_show(config_path: &Path, json_mode: bool, options: DisplayOptions) -> Result<()> {
    let exists = config_path.exists();
    let config = Config::load_from(config_path)
        .with_context(|| format!("Failed to read config {}", config_path.display()))?;

    let renderer = ConsoleRenderer::new(json_mode, options);
    renderer.render(present_config_show(config_path, exists, config))
}

pub fn handle_init(
    config_path: &Path,
    force: bool,
    json_mode: bool,
    options: DisplayOptions,
) -> Result<()> {
    let written = if config_path.exists() && !force {
        false
    } else {
        Config::default()
            .save_to(config_path)
            .with_context(|| format!("Failed to write config {}", config_path.display()))?;
        true
    };

    let renderer = ConsoleRenderer::new(json_mode, options);
    renderer.render(present_config_init(config_path, written))
}
